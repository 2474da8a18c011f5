//! Theme preference persisted in `window.localStorage`

use showcase_core::{CoreError, CoreResult, PreferenceStorage};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalPreferenceStorage;

impl LocalPreferenceStorage {
    fn storage() -> CoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| CoreError::storage("no window"))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| CoreError::storage("localStorage is not available"))
    }
}

impl PreferenceStorage for LocalPreferenceStorage {
    fn read(&self, key: &str) -> CoreResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> CoreResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> CoreError {
    CoreError::storage(format!("{value:?}"))
}
