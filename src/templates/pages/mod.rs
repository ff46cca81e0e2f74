pub mod category;
pub mod home;
pub mod housing;
pub mod profile;

pub use category::category_page;
pub use home::{home_page, HomeVm};
pub use housing::{housing_page, HousingVm};
pub use profile::{profile_page, ProfileVm};
