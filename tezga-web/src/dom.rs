//! Browser plumbing: window/document access, fetch, timers and a small
//! DOM-lookup cache.
use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Response, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Look up an element by id. A missing node is logged and the caller is
/// expected to degrade to a no-op.
#[must_use]
pub fn element_by_id(id: &str) -> Option<Element> {
    let found = window().document().and_then(|doc| doc.get_element_by_id(id));
    if found.is_none() {
        log::warn!("expected DOM node #{id} is missing");
    }
    found
}

/// Memoized id → element lookups, shared across handlers that poke the DOM
/// directly (section scrolling, focus restoration). Cleared on reload so a
/// re-rendered page never serves detached nodes.
#[derive(Default)]
pub struct NodeCache {
    nodes: RefCell<HashMap<String, Element>>,
}

impl NodeCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached `getElementById`. Misses are logged once per lookup attempt.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Element> {
        if let Some(el) = self.nodes.borrow().get(id) {
            // a node detached since it was cached must not be reused
            if el.is_connected() {
                return Some(el.clone());
            }
        }
        let found = element_by_id(id)?;
        self.nodes
            .borrow_mut()
            .insert(id.to_string(), found.clone());
        Some(found)
    }

    pub fn clear(&self) {
        self.nodes.borrow_mut().clear();
    }
}

thread_local! {
    static NODE_CACHE: NodeCache = NodeCache::new();
}

/// Cached lookup against the app-wide node cache.
#[must_use]
pub fn cached_element(id: &str) -> Option<Element> {
    NODE_CACHE.with(|cache| cache.get(id))
}

/// Drop every cached node; called when the page reloads its data and the
/// tree is about to be rebuilt.
pub fn clear_node_cache() {
    NODE_CACHE.with(NodeCache::clear);
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let resp_value = JsFuture::from(window().fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Fetch a URL and return its body as text.
///
/// # Errors
/// Returns an error for network failures, non-success statuses, or a body
/// that cannot be read as text.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let response = fetch_response(url).await?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "GET {url} returned status {}",
            response.status()
        )));
    }
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Schedule a one-shot callback. The closure is leaked to the timer queue;
/// callers guard against late firings with their own liveness checks.
#[cfg(target_arch = "wasm32")]
pub fn set_timeout(duration_ms: i32, callback: impl FnOnce() + 'static) {
    let closure = Closure::once(callback);
    if let Some(win) = web_sys::window() {
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            duration_ms,
        );
        closure.forget();
    }
}
