//! Shared hook handles for the storefront component tree
use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::components::toast::{ToastItem, ToastKind};
use tezga_catalog::{Catalog, Product, RotationCfg};

/// Every handle the storefront mutates, bundled so the handler table is
/// built from one argument instead of a dozen loose clones.
#[derive(Clone)]
pub struct StorefrontState {
    pub catalog: Rc<RefCell<Catalog>>,
    pub visible: UseStateHandle<Rc<Vec<Product>>>,
    pub catalog_epoch: UseStateHandle<u64>,
    pub active_category: UseStateHandle<AttrValue>,
    pub query: UseStateHandle<String>,
    pub selected: UseStateHandle<Option<Product>>,
    pub toasts: UseStateHandle<Vec<ToastItem>>,
    pub rotation: UseStateHandle<RotationCfg>,
    pub show_settings: UseStateHandle<bool>,
    pub loading: UseStateHandle<bool>,
    pub toast_seq: Rc<RefCell<u32>>,
}

/// Recompute the visible list for the given filter inputs. The state
/// handles still hold the previous values during the same turn, so the
/// fresh category/query are passed in explicitly.
pub fn apply_filters(state: &StorefrontState, category: &str, query: &str) {
    let mut catalog = state.catalog.borrow_mut();
    let trimmed = query.trim();
    let list = if trimmed.is_empty() {
        catalog.filter_by_category(category)
    } else {
        catalog.search(trimmed)
    };
    state.visible.set(Rc::new(list));
}

/// Install a freshly loaded product list and repaint the grid from it.
pub fn install_products(state: &StorefrontState, products: &[Product]) {
    {
        let mut catalog = state.catalog.borrow_mut();
        catalog.replace_products(products.to_vec());
        state.catalog_epoch.set(catalog.epoch());
    }
    let category = (*state.active_category).clone();
    let query = (*state.query).clone();
    apply_filters(state, &category, &query);
}

/// Fold one load outcome into the UI: surface a toast when degraded,
/// install whatever arrived, clear the loading flag.
pub fn finish_load(state: &StorefrontState, outcome: &crate::catalog::LoadOutcome) {
    if outcome.degraded {
        push_toast(
            state,
            ToastKind::Error,
            "Some products could not be loaded.",
        );
    }
    install_products(state, &outcome.products);
    state.loading.set(false);
}

pub fn push_toast(state: &StorefrontState, kind: ToastKind, message: impl Into<AttrValue>) {
    let id = {
        let mut seq = state.toast_seq.borrow_mut();
        *seq = seq.wrapping_add(1);
        *seq
    };
    let mut toasts = (*state.toasts).clone();
    toasts.push(ToastItem {
        id,
        kind,
        message: message.into(),
    });
    state.toasts.set(toasts);
}

pub fn remove_toast(state: &StorefrontState, id: u32) {
    let toasts: Vec<ToastItem> = state
        .toasts
        .iter()
        .filter(|t| t.id != id)
        .cloned()
        .collect();
    state.toasts.set(toasts);
}
