pub mod home;
pub mod location;

pub use home::HomePage;
pub use location::LocationPage;
