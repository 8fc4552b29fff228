//! Product grid with render-generation bookkeeping
//!
//! Each grid pass takes a token from a [`RenderEpoch`]; the staggered
//! reveal's completion callback only clears the render-in-progress flag
//! when its token is still current, so a superseded render finishes its
//! DOM work but skips the flag reset. A safety timeout force-clears the
//! flag after a fixed ceiling in case the completion callback was skipped.
use std::rc::Rc;

use crate::components::foundation as f;
use crate::components::product_card::{ProductCard, card_template};
use tezga_catalog::{GridCfg, KeyedCache, Product, RenderEpoch, TextCache};

#[derive(f::Properties, PartialEq, Clone)]
pub struct ProductGridProps {
    pub products: Rc<Vec<Product>>,
    /// Catalog reload marker; a change invalidates every cached card
    /// template while plain re-filters keep them.
    #[prop_or_default]
    pub catalog_epoch: u64,
    #[prop_or_default]
    pub grid: GridCfg,
    #[prop_or_default]
    pub on_select: f::Callback<Product>,
}

#[f::function_component(ProductGrid)]
pub fn product_grid(props: &ProductGridProps) -> f::Html {
    let cache = f::use_mut_ref(KeyedCache::<(u32, String), f::Html>::new);
    let epoch = f::use_mut_ref(RenderEpoch::new);
    let seen_epoch = f::use_mut_ref(|| None::<u64>);
    let text = f::use_mut_ref(TextCache::new);
    let rendering = f::use_state(|| false);

    // card templates survive re-filters; a catalog reload drops them all
    {
        let mut seen = seen_epoch.borrow_mut();
        if *seen != Some(props.catalog_epoch) {
            *seen = Some(props.catalog_epoch);
            cache.borrow_mut().clear();
            text.borrow_mut().clear();
        }
    }

    {
        let epoch = epoch.clone();
        let rendering = rendering.clone();
        let grid = props.grid;
        let count = props.products.len();
        f::use_effect_with(
            (props.products.clone(), props.catalog_epoch),
            move |_| {
                let token = epoch.borrow_mut().begin();
                rendering.set(true);
                #[cfg(target_arch = "wasm32")]
                {
                    let epoch_done = epoch.clone();
                    let rendering_done = rendering.clone();
                    crate::dom::set_timeout(grid.reveal_budget_ms(count), move || {
                        if epoch_done.borrow().is_current(token) {
                            rendering_done.set(false);
                        }
                    });
                    let rendering_force = rendering.clone();
                    crate::dom::set_timeout(grid.safety_ceiling_ms, move || {
                        rendering_force.set(false);
                    });
                }
                #[cfg(not(target_arch = "wasm32"))]
                let _ = (token, grid, count);
                || {}
            },
        );
    }

    let count_text = text.borrow_mut().count_label(props.products.len());
    let body = if props.products.is_empty() {
        f::html! {
            <p class="grid-empty" role="status">{ "No products match your filters." }</p>
        }
    } else {
        let stagger = props.grid.stagger_ms;
        f::html! {
            <div class="products-grid__cards">
                { for props.products.iter().enumerate().map(|(i, product)| {
                    let key = (
                        product.id,
                        product.primary_image().unwrap_or_default().to_string(),
                    );
                    let template = cache
                        .borrow_mut()
                        .get_or_insert_with(key, || card_template(product))
                        .clone();
                    f::html! {
                        <ProductCard key={product.id} product={product.clone()} index={i}
                                     stagger_ms={stagger} template={Some(template)}
                                     on_select={props.on_select.clone()} />
                    }
                }) }
            </div>
        }
    };

    f::html! {
        <section id="productsGrid" class="products-grid" aria-busy={(*rendering).to_string()}>
            <p class="products-grid__count">{ count_text }</p>
            { body }
        </section>
    }
}
