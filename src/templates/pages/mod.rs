pub mod compare;
pub mod error;
pub mod home;
pub mod property;
pub mod zip_analysis;

pub use compare::compare_page;
pub use error::error_page;
pub use home::home_page;
pub use property::{property_page, AddressForm};
pub use zip_analysis::zip_analysis_page;
