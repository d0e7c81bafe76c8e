//! `localStorage`-backed language preference.

use gloo::storage::{LocalStorage, Storage};
use terrain_site_i18n::{PreferenceError, PreferenceStore};
use wasm_bindgen::JsValue;

/// Raw-string `localStorage` access.
///
/// Values are stored unencoded (`en`, not `"en"`) so preferences written by
/// the plain-script version of the site keep loading.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| PreferenceError::Read {
                key: key.to_string(),
                detail: js_detail(&err),
            })
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| PreferenceError::Write {
                key: key.to_string(),
                detail: js_detail(&err),
            })
    }
}

fn js_detail(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
