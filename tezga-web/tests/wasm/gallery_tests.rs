use tezga_web::catalog::RotationCfg;
use tezga_web::components::gallery::{Gallery, GalleryProps};
use tezga_web::dom;
use wasm_bindgen_test::*;
use yew::{AttrValue, Callback, Classes};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn gallery_props(interval_ms: u32) -> GalleryProps {
    GalleryProps {
        images: vec![
            AttrValue::from("a.jpg"),
            AttrValue::from("b.jpg"),
            AttrValue::from("c.jpg"),
        ],
        rotation: RotationCfg {
            enabled: true,
            interval_ms,
            modal_only: true,
        },
        in_modal: true,
        alt: AttrValue::from("Gallery"),
        class: Classes::new(),
        on_change: Callback::noop(),
    }
}

fn mount(props: GalleryProps) -> yew::AppHandle<Gallery> {
    let body = dom::document().body().expect("body present");
    yew::Renderer::<Gallery>::with_root_and_props(body.into(), props).render()
}

fn main_image_src() -> String {
    dom::document()
        .get_element_by_id("modalMainImage")
        .and_then(|el| el.get_attribute("src"))
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn rotation_advances_after_one_interval() {
    let handle = mount(gallery_props(600));
    // stabilization delay + one interval
    let _ = dom::sleep_ms(1100).await;
    assert_eq!(main_image_src(), "b.jpg");
    handle.destroy();
}

#[wasm_bindgen_test]
async fn progress_bar_fills_between_advances() {
    let handle = mount(gallery_props(2000));
    let _ = dom::sleep_ms(800).await;
    let width = dom::document()
        .get_element_by_id("progressBar")
        .and_then(|el| el.get_attribute("style"))
        .unwrap_or_default();
    assert!(width.starts_with("width:"), "style was {width}");
    assert_ne!(width, "width:0.0%");
    handle.destroy();
}

#[wasm_bindgen_test]
async fn destroying_the_gallery_stops_rotation() {
    let handle = mount(gallery_props(600));
    let _ = dom::sleep_ms(300).await;
    handle.destroy();
    // a full interval later nothing may tick; the node tree is gone
    let _ = dom::sleep_ms(800).await;
    assert!(dom::document().get_element_by_id("modalMainImage").is_none());
}
