//! Web-specific preference storage using localStorage
use tezga_catalog::{PrefsStore, RotationCfg, load_rotation_prefs, save_rotation_prefs};

#[derive(Debug, thiserror::Error)]
pub enum WebPrefsError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Preference store backed by browser localStorage. Outside a browser every
/// read resolves to "nothing stored", so server-side renders fall back to
/// defaults instead of touching JS APIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebPrefs;

#[cfg(target_arch = "wasm32")]
fn storage() -> Result<web_sys::Storage, WebPrefsError> {
    crate::dom::local_storage()
        .map_err(|e| WebPrefsError::Storage(crate::dom::js_error_message(&e)))
}

impl PrefsStore for WebPrefs {
    type Error = WebPrefsError;

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|e| WebPrefsError::Storage(crate::dom::js_error_message(&e)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?
                .get_item(key)
                .map_err(|e| WebPrefsError::Storage(crate::dom::js_error_message(&e)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?
                .remove_item(key)
                .map_err(|e| WebPrefsError::Storage(crate::dom::js_error_message(&e)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// Load the persisted rotation settings, falling back to `base`.
#[must_use]
pub fn load_rotation(base: RotationCfg) -> RotationCfg {
    load_rotation_prefs(&WebPrefs, base)
}

/// Persist the rotation settings; failures are logged, never surfaced.
pub fn save_rotation(cfg: &RotationCfg) {
    if let Err(e) = save_rotation_prefs(&WebPrefs, cfg) {
        log::warn!("failed to persist rotation settings: {e}");
    }
}
