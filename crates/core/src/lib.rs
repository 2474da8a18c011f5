//! Showcase core: theme preference, catalog loading, contact form and layout
//! state, free of any browser API so it can be tested natively.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod copy;
pub mod delay;
pub mod error;
pub mod layout;
pub mod nav;
pub mod preferences;
pub mod theme;

pub use config::SiteConfig;
pub use error::{CatalogError, CoreError, CoreResult};
pub use preferences::{PreferenceStorage, PreferenceStore, ThemeEffects};
pub use theme::Theme;
