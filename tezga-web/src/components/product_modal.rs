use crate::components::foundation as f;
use crate::components::gallery::Gallery;
#[cfg(target_arch = "wasm32")]
use f::JsCast;
use tezga_catalog::{Product, RotationCfg, title_case};

#[derive(f::Properties, PartialEq, Clone)]
pub struct ProductModalProps {
    /// The product being viewed; `None` keeps the modal hidden.
    pub product: Option<Product>,
    #[prop_or_default]
    pub rotation: RotationCfg,
    #[prop_or_default]
    pub on_close: f::Callback<()>,
}

#[f::function_component(ProductModal)]
pub fn product_modal(props: &ProductModalProps) -> f::Html {
    // move keyboard focus into the dialog once it is on screen
    f::use_effect_with(props.product.is_some(), move |open| {
        #[cfg(target_arch = "wasm32")]
        if *open {
            if let Some(el) = crate::dom::cached_element("productModal") {
                if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                    let _ = el.focus();
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = open;
        || {}
    });

    let Some(product) = props.product.clone() else {
        return f::Html::default();
    };
    let close = {
        let cb = props.on_close.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        f::Callback::from(move |e: f::KeyboardEvent| {
            if !cfg!(target_arch = "wasm32") {
                let _ = &e;
                return;
            }
            if e.key() == "Escape" {
                cb.emit(());
            }
        })
    };
    let images: Vec<f::AttrValue> = product
        .images
        .iter()
        .cloned()
        .map(f::AttrValue::from)
        .collect();
    f::html! {
        <div id="productModal" class="modal modal-open" role="dialog" aria-modal="true"
             aria-label={product.name.clone()} onkeydown={on_keydown} tabindex="-1">
            <div class="modal-box">
                <div class="modal-box__header">
                    <h3 class="modal-box__title">{ product.name.clone() }</h3>
                    <button class="close" aria-label="Close" onclick={close.clone()}>{ "✕" }</button>
                </div>
                <p class="modal-box__desc">{ product.description.clone() }</p>
                <div class="modal-box__meta">
                    <span class="modal-box__price">{ product.price.clone() }</span>
                    <span class="badge">{ title_case(&product.country) }</span>
                </div>
                { if images.len() > 1 { f::html! {
                    <Gallery images={images.clone()} rotation={props.rotation}
                             in_modal={true} alt={product.name.clone()} />
                } } else { f::html! {
                    <div class="gallery-main">
                        <img id="modalMainImage"
                             src={images.first().cloned().unwrap_or_default()}
                             alt={product.name.clone()} />
                    </div>
                } } }
            </div>
            <div class="modal-backdrop" onclick={close}></div>
        </div>
    }
}
