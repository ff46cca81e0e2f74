mod favorite_routes_tests;
mod hero_tests;
mod home_tests;
mod housing_tests;
