//! Event delegation table
//!
//! Every click, input and submit in the storefront routes through one of
//! these callbacks; the view never mutates state directly.
use yew::prelude::*;

use super::state::{self, StorefrontState};
use crate::components::toast::ToastKind;
use tezga_catalog::{Product, RotationCfg};

#[derive(Clone)]
pub struct Handlers {
    pub select_category: Callback<AttrValue>,
    pub search: Callback<String>,
    pub open_product: Callback<Product>,
    pub close_modal: Callback<()>,
    pub contact_submitted: Callback<AttrValue>,
    pub dismiss_toast: Callback<u32>,
    pub open_settings: Callback<()>,
    pub close_settings: Callback<()>,
    pub change_rotation: Callback<RotationCfg>,
    pub reload: Callback<()>,
}

/// Build the full handler table against one state bundle.
pub fn build(state: &StorefrontState) -> Handlers {
    let select_category = {
        let state = state.clone();
        Callback::from(move |tag: AttrValue| {
            state.active_category.set(tag.clone());
            state.query.set(String::new());
            state::apply_filters(&state, &tag, "");
        })
    };

    let search = {
        let state = state.clone();
        Callback::from(move |text: String| {
            state.query.set(text.clone());
            let category = (*state.active_category).clone();
            state::apply_filters(&state, &category, &text);
        })
    };

    let open_product = {
        let state = state.clone();
        Callback::from(move |product: Product| {
            state.selected.set(Some(product));
        })
    };

    // closing unmounts the gallery, which unconditionally cancels the
    // rotation timers and resets the progress bar
    let close_modal = {
        let state = state.clone();
        Callback::from(move |()| {
            state.selected.set(None);
        })
    };

    let contact_submitted = {
        let state = state.clone();
        Callback::from(move |message: AttrValue| {
            state::push_toast(&state, ToastKind::Success, message);
        })
    };

    let dismiss_toast = {
        let state = state.clone();
        Callback::from(move |id: u32| {
            state::remove_toast(&state, id);
        })
    };

    let open_settings = {
        let state = state.clone();
        Callback::from(move |()| {
            state.show_settings.set(true);
        })
    };

    let close_settings = {
        let state = state.clone();
        Callback::from(move |()| {
            state.show_settings.set(false);
        })
    };

    let change_rotation = {
        let state = state.clone();
        Callback::from(move |cfg: RotationCfg| {
            state.rotation.set(cfg);
            crate::prefs::save_rotation(&cfg);
        })
    };

    let reload = {
        let state = state.clone();
        Callback::from(move |()| {
            #[cfg(target_arch = "wasm32")]
            {
                crate::catalog::invalidate_loaded();
                crate::dom::clear_node_cache();
                state.loading.set(true);
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = crate::catalog::load_products().await;
                    state::finish_load(&state, &outcome);
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = &state;
        })
    };

    Handlers {
        select_category,
        search,
        open_product,
        close_modal,
        contact_submitted,
        dismiss_toast,
        open_settings,
        close_settings,
        change_rotation,
        reload,
    }
}
