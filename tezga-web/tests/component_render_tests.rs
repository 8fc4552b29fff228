use std::rc::Rc;

use futures::executor::block_on;
use tezga_web::catalog::{GridCfg, Product, RotationCfg};
use tezga_web::components::category_bar::{CategoryBar, CategoryBarProps};
use tezga_web::components::contact_form::{ContactForm, ContactFormProps};
use tezga_web::components::footer::Footer;
use tezga_web::components::gallery::{Gallery, GalleryProps};
use tezga_web::components::header::{Header, HeaderProps};
use tezga_web::components::product_card::{ProductCard, ProductCardProps};
use tezga_web::components::product_grid::{ProductGrid, ProductGridProps};
use tezga_web::components::product_modal::{ProductModal, ProductModalProps};
use tezga_web::components::settings_dialog::{SettingsDialog, SettingsDialogProps};
use tezga_web::components::toast::{Toast, ToastItem, ToastKind, ToastProps};
use yew::{AttrValue, Callback, Classes, LocalServerRenderer};

fn opanci() -> Product {
    Product {
        id: 101,
        name: "Opanci Leather Shoes".to_string(),
        description: "Hand-stitched traditional leather shoes.".to_string(),
        price: "$39.00".to_string(),
        country: "serbia".to_string(),
        category: "footwear".to_string(),
        images: vec![
            "assets/img/opanci-1.jpg".to_string(),
            "assets/img/opanci-2.jpg".to_string(),
            "assets/img/opanci-3.jpg".to_string(),
        ],
        tags: vec!["serbia".to_string(), "footwear".to_string()],
    }
}

fn teapot() -> Product {
    Product {
        id: 201,
        name: "Porcelain Teapot".to_string(),
        description: "Thin-walled celadon teapot.".to_string(),
        price: "$54.50".to_string(),
        country: "china".to_string(),
        category: "kitchen".to_string(),
        images: vec!["assets/img/teapot-1.jpg".to_string()],
        tags: vec!["china".to_string(), "kitchen".to_string()],
    }
}

#[test]
fn product_card_renders_name_price_and_country() {
    let props = ProductCardProps {
        product: opanci(),
        index: 2,
        stagger_ms: 80,
        template: None,
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductCard>::with_props(props).render());
    assert!(html.contains("Opanci Leather Shoes"));
    assert!(html.contains("$39.00"));
    assert!(html.contains("Serbia"));
    assert!(html.contains("product-card"));
    assert!(html.contains("animation-delay:160ms"));
}

#[test]
fn grid_renders_cards_and_count() {
    let props = ProductGridProps {
        products: Rc::new(vec![opanci(), teapot()]),
        catalog_epoch: 1,
        grid: GridCfg::default(),
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductGrid>::with_props(props).render());
    assert!(html.contains("productsGrid"));
    assert!(html.contains("2 products"));
    assert!(html.contains("Opanci Leather Shoes"));
    assert!(html.contains("Porcelain Teapot"));
}

#[test]
fn grid_renders_placeholder_when_empty() {
    let props = ProductGridProps {
        products: Rc::new(Vec::new()),
        catalog_epoch: 1,
        grid: GridCfg::default(),
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductGrid>::with_props(props).render());
    assert!(html.contains("No products match your filters."));
    assert!(html.contains("0 products"));
    assert!(!html.contains("product-card__name"));
}

#[test]
fn modal_renders_gallery_for_multi_image_products() {
    let props = ProductModalProps {
        product: Some(opanci()),
        rotation: RotationCfg::default(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductModal>::with_props(props).render());
    assert!(html.contains("productModal"));
    assert!(html.contains("modalMainImage"));
    assert!(html.contains("thumbnailImages"));
    assert!(html.contains("imageRotationProgress"));
    assert!(html.contains("progressBar"));
    assert!(html.contains("width:0.0%"));
}

#[test]
fn modal_skips_rotation_chrome_for_single_image() {
    let props = ProductModalProps {
        product: Some(teapot()),
        rotation: RotationCfg::default(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductModal>::with_props(props).render());
    assert!(html.contains("modalMainImage"));
    assert!(!html.contains("thumbnailImages"));
    assert!(!html.contains("imageRotationProgress"));
}

#[test]
fn modal_hidden_without_a_product() {
    let props = ProductModalProps {
        product: None,
        rotation: RotationCfg::default(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductModal>::with_props(props).render());
    assert!(!html.contains("productModal"));
}

#[test]
fn gallery_marks_first_thumbnail_active() {
    let props = GalleryProps {
        images: vec![
            AttrValue::from("a.jpg"),
            AttrValue::from("b.jpg"),
            AttrValue::from("c.jpg"),
        ],
        rotation: RotationCfg::default(),
        in_modal: true,
        alt: AttrValue::from("Gallery"),
        class: Classes::new(),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Gallery>::with_props(props).render());
    assert!(html.contains("thumbnail active"));
    assert!(html.contains("aria-selected=\"true\""));
    assert_eq!(html.matches("class=\"thumbnail\"").count(), 2);
    assert!(html.contains("src=\"a.jpg\""));
}

#[test]
fn toast_stack_renders_messages_and_kinds() {
    let props = ToastProps {
        toasts: vec![
            ToastItem {
                id: 1,
                kind: ToastKind::Success,
                message: AttrValue::from("Message sent."),
            },
            ToastItem {
                id: 2,
                kind: ToastKind::Error,
                message: AttrValue::from("Some products could not be loaded."),
            },
        ],
        class: Classes::new(),
        on_dismiss: Some(Callback::noop()),
    };
    let html = block_on(LocalServerRenderer::<Toast>::with_props(props).render());
    assert!(html.contains("Message sent."));
    assert!(html.contains("alert-success"));
    assert!(html.contains("alert-error"));
    assert_eq!(html.matches("aria-label=\"Dismiss\"").count(), 2);
}

#[test]
fn contact_form_renders_all_fields() {
    let props = ContactFormProps {
        on_submitted: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ContactForm>::with_props(props).render());
    assert!(html.contains("name=\"name\""));
    assert!(html.contains("name=\"email\""));
    assert!(html.contains("name=\"message\""));
    assert!(html.contains("Send message"));
    assert!(!html.contains("contact-form__errors"));
}

#[test]
fn header_and_footer_render_chrome() {
    let header_props = HeaderProps {
        on_open_settings: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(header_props).render());
    assert!(html.contains("nav-link"));
    assert!(html.contains("#catalog"));
    assert!(html.contains("settings-open-btn"));

    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
    assert!(html.contains("Tezga"));
}

#[test]
fn category_bar_marks_the_active_card() {
    let props = CategoryBarProps {
        categories: vec![
            AttrValue::from("all"),
            AttrValue::from("serbia"),
            AttrValue::from("china"),
        ],
        active: AttrValue::from("serbia"),
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CategoryBar>::with_props(props).render());
    assert!(html.contains("All products"));
    assert!(html.contains("Serbia"));
    assert!(html.contains("data-category=\"serbia\""));
    assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
    assert!(html.contains("category-card active"));
}

#[test]
fn settings_dialog_renders_when_open_and_skips_when_closed() {
    let open_props = SettingsDialogProps {
        open: true,
        cfg: RotationCfg::default(),
        on_close: Callback::noop(),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SettingsDialog>::with_props(open_props).render());
    assert!(html.contains("Gallery settings"));
    assert!(html.contains("Rotation interval"));
    assert!(html.contains("3 seconds"));

    let closed_props = SettingsDialogProps {
        open: false,
        cfg: RotationCfg::default(),
        on_close: Callback::noop(),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SettingsDialog>::with_props(closed_props).render());
    assert!(!html.contains("Gallery settings"));
}
