//! Page components

mod contact_us;
mod feature;
mod home;

pub use contact_us::ContactUsPage;
pub use feature::FeaturePage;
pub use home::HomePage;
