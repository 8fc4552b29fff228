use crate::components::foundation as f;
use tezga_catalog::{Product, title_case};

/// Handler-free card markup. The grid caches these by
/// (product id, first image) and clones them per render; the interactive
/// wrapper below attaches the click handler.
#[must_use]
pub fn card_template(product: &Product) -> f::Html {
    let image = product.primary_image().unwrap_or_default().to_string();
    f::html! {
        <>
            <div class="product-card__media">
                { if image.is_empty() {
                    f::html! { <div class="product-card__placeholder" aria-hidden="true"></div> }
                } else {
                    f::html! { <img src={image} alt={product.name.clone()} loading="lazy" /> }
                } }
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{ product.name.clone() }</h3>
                <p class="product-card__desc">{ product.description.clone() }</p>
                <div class="product-card__meta">
                    <span class="product-card__price">{ product.price.clone() }</span>
                    <span class="badge">{ title_case(&product.country) }</span>
                </div>
            </div>
        </>
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
    /// Position in the grid; sets the reveal stagger.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub stagger_ms: u32,
    /// Pre-built template from the card cache; built fresh when absent.
    #[prop_or_default]
    pub template: Option<f::Html>,
    #[prop_or_default]
    pub on_select: f::Callback<Product>,
}

#[f::function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> f::Html {
    let body = props
        .template
        .clone()
        .unwrap_or_else(|| card_template(&props.product));
    let onclick = {
        let product = props.product.clone();
        let on_select = props.on_select.clone();
        f::Callback::from(move |_: f::MouseEvent| on_select.emit(product.clone()))
    };
    let delay = u32::try_from(props.index)
        .unwrap_or(u32::MAX)
        .saturating_mul(props.stagger_ms);
    f::html! {
        <article class="product-card card-reveal"
                 style={format!("animation-delay:{delay}ms")}
                 onclick={onclick} role="button" tabindex="0">
            { body }
        </article>
    }
}
