//! Theme management module

mod context;
mod provider;

pub use context::{ThemeAction, ThemeContext};
pub use provider::ThemeProvider;

use showcase_core::Theme;
use yew::prelude::*;

/// Hook to access theme context
#[hook]
pub fn use_theme() -> UseReducerHandle<ThemeContext> {
    use_context::<UseReducerHandle<ThemeContext>>()
        .expect("Theme context not found. Make sure to wrap your app with ThemeProvider")
}

/// Hook to get current theme
#[hook]
pub fn use_current_theme() -> Theme {
    let theme_ctx = use_theme();
    theme_ctx.theme()
}

/// Hook to get a callback taking the raw name of the selected theme
#[hook]
pub fn use_set_theme() -> Callback<String> {
    let theme_ctx = use_theme();
    Callback::from(move |raw: String| {
        theme_ctx.dispatch(ThemeAction::SetRaw(raw));
    })
}
