mod browse_tests;
mod carousel_tests;
mod router_tests;
mod utils;
