//! Browser-backed implementations of the core's storage, timer and HTTP seams

pub mod catalog;
pub mod document;
pub mod storage;
pub mod timers;

pub use catalog::HttpCatalogSource;
pub use document::{DocumentThemeEffects, viewport_width};
pub use storage::LocalPreferenceStorage;
pub use timers::GlooDelay;
