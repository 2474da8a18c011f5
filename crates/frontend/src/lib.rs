//! Themeable storefront showcase

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod router;
pub mod services;
pub mod theme;

pub use app::{App, AppProps};
