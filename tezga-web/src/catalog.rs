//! Web-specific catalog loading
//!
//! This module provides web-specific implementations of the tezga-catalog
//! traits and re-exports the core catalog types. The product catalog is
//! fetched at most once per page; concurrent callers share the in-flight
//! future instead of re-fetching.

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

// Re-export all types from tezga-catalog
pub use tezga_catalog::*;

/// Countries with their own product document under `assets/data/`.
pub const COUNTRIES: &[&str] = &["serbia", "china", "turkey", "peru"];

#[derive(Debug, thiserror::Error)]
pub enum WebCatalogError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fallback product source compiled into the bundle, used when every
/// per-country fetch fails.
pub struct EmbeddedSource;

impl ProductSource for EmbeddedSource {
    type Error = WebCatalogError;

    fn load_products(&self) -> Result<Vec<Product>, Self::Error> {
        let json = include_str!("../static/assets/data/products.json");
        parse_products(json).map_err(WebCatalogError::Json)
    }

    fn load_config(&self) -> Result<StorefrontConfig, Self::Error> {
        let json = include_str!("../static/assets/data/config.json");
        StorefrontConfig::from_json(json).map_err(WebCatalogError::Json)
    }
}

/// Result of one catalog load. `degraded` is set when any source failed and
/// the UI should surface a toast.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub products: Rc<Vec<Product>>,
    pub degraded: bool,
}

type SharedLoad = Shared<LocalBoxFuture<'static, LoadOutcome>>;

thread_local! {
    static INFLIGHT: RefCell<Option<SharedLoad>> = const { RefCell::new(None) };
}

fn country_url(country: &str) -> String {
    format!("assets/data/{country}.json")
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn fetch_country(country: &str) -> Result<Vec<Product>, WebCatalogError> {
    let url = country_url(country);
    let text = crate::dom::fetch_text(&url)
        .await
        .map_err(|e| WebCatalogError::Network(crate::dom::js_error_message(&e)))?;
    parse_products(&text).map_err(WebCatalogError::Json)
}

#[allow(clippy::future_not_send)]
async fn load_all() -> LoadOutcome {
    let fetches = COUNTRIES.iter().map(|country| fetch_country(country));
    let results = futures::future::join_all(fetches).await;

    let mut lists = Vec::new();
    let mut degraded = false;
    for (country, result) in COUNTRIES.iter().zip(results) {
        match result {
            Ok(list) => lists.push(list),
            Err(e) => {
                degraded = true;
                log::error!("failed to load {country} products: {e}");
            }
        }
    }

    if lists.is_empty() {
        // every per-country document failed; use the embedded combined doc
        match EmbeddedSource.load_products() {
            Ok(list) => lists.push(list),
            Err(e) => log::error!("embedded product fallback unreadable: {e}"),
        }
    }

    LoadOutcome {
        products: Rc::new(merge_products(lists)),
        degraded,
    }
}

/// Load the product catalog. The first caller starts the fetch; everyone
/// else awaits the same shared future. Failures degrade to an empty list,
/// never an error past this boundary.
#[allow(clippy::future_not_send)]
pub async fn load_products() -> LoadOutcome {
    let shared = INFLIGHT.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| load_all().boxed_local().shared())
            .clone()
    });
    shared.await
}

/// Forget the completed (or in-flight) load so the next `load_products`
/// fetches fresh documents. Callers also clear their query caches.
pub fn invalidate_loaded() {
    INFLIGHT.with(|slot| slot.borrow_mut().take());
}
