//! Application shell and storefront wiring
pub mod handlers;
pub mod state;

use std::rc::Rc;

use yew::html::TargetCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::category_bar::CategoryBar;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::product_grid::ProductGrid;
use crate::components::product_modal::ProductModal;
use crate::components::settings_dialog::SettingsDialog;
use crate::components::toast::Toast;
use crate::routes::Route;
use state::StorefrontState;
use tezga_catalog::{ALL_CATEGORY, Catalog, Product, ProductSource, StorefrontConfig};

/// Top-level component providing browser routing.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={crate::router::switch} />
        </BrowserRouter>
    }
}

fn embedded_config() -> StorefrontConfig {
    match crate::catalog::EmbeddedSource.load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("embedded storefront config unreadable: {e}");
            StorefrontConfig::default()
        }
    }
}

/// The storefront page: owns the catalog, the filter state, the selected
/// product and the toast stack, and hands the view a prebuilt handler
/// table.
#[function_component(Storefront)]
pub fn storefront() -> Html {
    let config = use_state(embedded_config);
    let catalog = use_mut_ref(Catalog::new);
    let visible = use_state(|| Rc::new(Vec::<Product>::new()));
    let catalog_epoch = use_state(|| 0_u64);
    let active_category = use_state(|| AttrValue::from(ALL_CATEGORY));
    let query = use_state(String::new);
    let selected = use_state(|| None::<Product>);
    let toasts = use_state(Vec::new);
    let rotation = {
        let base = config.rotation;
        use_state(move || crate::prefs::load_rotation(base))
    };
    let show_settings = use_state(|| false);
    let loading = use_state(|| true);
    let toast_seq = use_mut_ref(|| 0_u32);

    let state = StorefrontState {
        catalog,
        visible,
        catalog_epoch,
        active_category,
        query,
        selected,
        toasts,
        rotation,
        show_settings,
        loading,
        toast_seq,
    };

    // fetch the catalog once on mount; concurrent mounts share the load
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            #[cfg(target_arch = "wasm32")]
            {
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = crate::catalog::load_products().await;
                    state::finish_load(&state, &outcome);
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = &state;
            || {}
        });
    }

    let handlers = handlers::build(&state);

    let categories: Vec<AttrValue> = {
        let catalog = state.catalog.borrow();
        let mut countries: Vec<String> = catalog
            .all()
            .iter()
            .map(|p| p.country.to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        countries.sort();
        countries.dedup();
        std::iter::once(AttrValue::from(ALL_CATEGORY))
            .chain(countries.into_iter().map(AttrValue::from))
            .collect()
    };

    let on_search_input = {
        let search = handlers.search.clone();
        Callback::from(move |e: InputEvent| {
            search.emit(e.target_unchecked_into::<web_sys::HtmlInputElement>().value());
        })
    };
    let on_reload = {
        let reload = handlers.reload.clone();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };

    html! {
        <div id="top" class="storefront">
            <Header on_open_settings={handlers.open_settings.clone()} />
            <main class="container">
                <section class="hero">
                    <h1>{ "Tezga" }</h1>
                    <p>{ "Handicrafts from small workshops, straight from the stall." }</p>
                </section>
                <CategoryBar categories={categories}
                             active={(*state.active_category).clone()}
                             on_select={handlers.select_category.clone()} />
                <section id="catalog" class="catalog">
                    <div class="catalog-controls">
                        <input class="search-input" type="search" aria-label="Search products"
                               placeholder="Search products" value={(*state.query).clone()}
                               oninput={on_search_input} />
                        <button class="btn btn-ghost" onclick={on_reload}>{ "Reload" }</button>
                    </div>
                    { if *state.loading { html! {
                        <p class="catalog-loading" role="status">{ "Loading products…" }</p>
                    } } else { html! {
                        <ProductGrid products={(*state.visible).clone()}
                                     catalog_epoch={*state.catalog_epoch}
                                     grid={config.grid}
                                     on_select={handlers.open_product.clone()} />
                    } } }
                </section>
                <ContactForm on_submitted={handlers.contact_submitted.clone()} />
            </main>
            <Footer />
            <ProductModal product={(*state.selected).clone()} rotation={*state.rotation}
                          on_close={handlers.close_modal.clone()} />
            <SettingsDialog open={*state.show_settings} cfg={*state.rotation}
                            on_close={handlers.close_settings.clone()}
                            on_change={handlers.change_rotation.clone()} />
            <Toast toasts={(*state.toasts).clone()}
                   on_dismiss={Some(handlers.dismiss_toast.clone())} />
        </div>
    }
}
