//! Reusable UI components

pub mod contact_details;
pub mod header;
pub mod layout;
pub mod product_card;
pub mod spinner;

pub use contact_details::ContactDetails;
pub use header::Header;
pub use layout::Layout;
pub use product_card::ProductCard;
pub use spinner::LoadingSpinner;
