//! Routed page views

pub mod about;
pub mod contact;
pub mod home;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
