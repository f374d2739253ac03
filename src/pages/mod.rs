//! Page components

mod facilities;
mod login;

pub use facilities::{FacilityCreate, FacilityDetail, FacilityList, FacilityPatients};
pub use login::Login;
