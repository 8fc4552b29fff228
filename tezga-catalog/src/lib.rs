//! Tezga Catalog Engine
//!
//! Platform-agnostic core logic for the Tezga storefront. This crate owns
//! the product model, the memoizing product store, the gallery rotation
//! state machine and the render-generation bookkeeping, without UI or
//! platform-specific dependencies.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod product;
pub mod render;
pub mod rotation;
pub mod text;

// Re-export commonly used types
pub use cache::KeyedCache;
pub use catalog::{ALL_CATEGORY, Catalog};
pub use config::{DEFAULT_ROTATION_INTERVAL_MS, GridCfg, RotationCfg, StorefrontConfig};
pub use product::{
    CombinedDoc, Product, merge_products, parse_products, parse_products_lenient,
};
pub use render::{RenderEpoch, RenderToken};
pub use rotation::{
    PROGRESS_TICK_MS, RESTART_DELAY_MS, RotationPhase, RotationSession,
};
pub use text::{TextCache, count_label, title_case};

/// Trait for abstracting product-data loading
/// Platform-specific implementations should provide this
pub trait ProductSource {
    type Error: std::error::Error + 'static;

    /// Load the combined product document from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the product data cannot be loaded or parsed.
    fn load_products(&self) -> Result<Vec<Product>, Self::Error>;

    /// Load the storefront configuration document
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config(&self) -> Result<StorefrontConfig, Self::Error>;
}

/// Trait for abstracting small key-value preference storage
/// Platform-specific implementations should provide this
pub trait PrefsStore {
    type Error: std::error::Error + 'static;

    /// Persist a small string value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be stored.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Read a previously stored value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Delete a stored value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// Storage key for the persisted rotation preferences.
pub const ROTATION_PREFS_KEY: &str = "tezga.prefs.rotation";

/// Persist the rotation preferences through a [`PrefsStore`].
///
/// # Errors
///
/// Returns an error if serialization or the underlying store fails.
pub fn save_rotation_prefs<P: PrefsStore>(
    prefs: &P,
    cfg: &RotationCfg,
) -> Result<(), P::Error> {
    let json = serde_json::to_string(cfg).unwrap_or_default();
    prefs.set(ROTATION_PREFS_KEY, &json)
}

/// Load persisted rotation preferences, falling back to `base` when absent
/// or unreadable. Persisted values are clamped into the supported range.
pub fn load_rotation_prefs<P: PrefsStore>(prefs: &P, base: RotationCfg) -> RotationCfg {
    match prefs.get(ROTATION_PREFS_KEY) {
        Ok(Some(json)) => match serde_json::from_str::<RotationCfg>(&json) {
            Ok(cfg) => cfg.clamped(),
            Err(e) => {
                log::warn!("discarding unreadable rotation prefs: {e}");
                base
            }
        },
        Ok(None) => base,
        Err(e) => {
            log::warn!("preference store unavailable: {e}");
            base
        }
    }
}
