//! Browser tests for the web-sys adapters. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use showcase_core::config::ThemeConfig;
use showcase_core::preferences::PreferenceStore;
use showcase_core::{PreferenceStorage, Theme, ThemeEffects};
use showcase_frontend::services::document::THEME_ATTRIBUTE;
use showcase_frontend::services::{DocumentThemeEffects, LocalPreferenceStorage, viewport_width};
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const TEST_KEY: &str = "showcase-test-theme";

fn root_theme() -> Option<String> {
    web_sys::window()?
        .document()?
        .document_element()?
        .get_attribute(THEME_ATTRIBUTE)
}

fn body_overflow() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .and_then(|body| body.style().get_property_value("overflow").ok())
        .unwrap_or_default()
}

fn clear_key(key: &str) {
    if let Some(Ok(Some(storage))) = web_sys::window().map(|window| window.local_storage()) {
        let _ = storage.remove_item(key);
    }
}

#[wasm_bindgen_test]
fn local_storage_round_trips_raw_values() {
    clear_key(TEST_KEY);
    let storage = LocalPreferenceStorage;

    assert_eq!(storage.read(TEST_KEY).unwrap(), None);
    storage.write(TEST_KEY, "dark").unwrap();
    assert_eq!(storage.read(TEST_KEY).unwrap().as_deref(), Some("dark"));

    clear_key(TEST_KEY);
}

#[wasm_bindgen_test]
fn apply_sets_the_root_theme_attribute() {
    DocumentThemeEffects.apply(Theme::Colorful);
    assert_eq!(root_theme().as_deref(), Some("colorful"));

    DocumentThemeEffects.apply(Theme::Minimal);
    assert_eq!(root_theme().as_deref(), Some("minimal"));
}

#[wasm_bindgen_test]
async fn transition_lock_is_released() {
    DocumentThemeEffects.lock_for_transition(Duration::from_millis(20));
    assert_eq!(body_overflow(), "hidden");

    gloo::timers::future::TimeoutFuture::new(60).await;
    assert_eq!(body_overflow(), "auto");
}

#[wasm_bindgen_test]
fn store_loads_saved_choice_and_persists_changes() {
    clear_key(TEST_KEY);
    let config = ThemeConfig {
        storage_key: TEST_KEY.to_string(),
        transition_lock_ms: 0,
    };

    let mut store = PreferenceStore::load(LocalPreferenceStorage, DocumentThemeEffects, &config);
    assert_eq!(store.get(), Theme::Minimal);
    assert_eq!(LocalPreferenceStorage.read(TEST_KEY).unwrap(), None);

    store.set(Theme::Dark);
    assert_eq!(root_theme().as_deref(), Some("dark"));

    let reloaded = PreferenceStore::load(LocalPreferenceStorage, DocumentThemeEffects, &config);
    assert_eq!(reloaded.get(), Theme::Dark);

    clear_key(TEST_KEY);
}

#[wasm_bindgen_test]
fn viewport_width_is_reported() {
    assert!(viewport_width().is_some_and(|width| width > 0.0));
}
