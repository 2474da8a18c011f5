//! Theme side effects on the live document

use gloo::timers::callback::Timeout;
use showcase_core::delay::millis_u32;
use showcase_core::{Theme, ThemeEffects};
use std::time::Duration;
use tracing::warn;

/// Attribute on `<html>` that theme-scoped CSS keys off
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentThemeEffects;

impl ThemeEffects for DocumentThemeEffects {
    fn apply(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            warn!("no document element to apply theme to");
            return;
        };

        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            warn!(?err, "could not set theme attribute");
        }
    }

    fn lock_for_transition(&self, duration: Duration) {
        set_body_overflow("hidden");
        // A newer lock may still be running; whichever fires last restores scrolling
        Timeout::new(millis_u32(duration), || set_body_overflow("auto")).forget();
    }
}

fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };

    if let Err(err) = body.style().set_property("overflow", value) {
        warn!(?err, "could not set body overflow");
    }
}

/// Current `window.innerWidth` in logical pixels
#[must_use]
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}
