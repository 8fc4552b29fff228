pub mod category_bar;
pub mod contact_form;
pub mod footer;
pub mod foundation;
pub mod gallery;
pub mod header;
pub mod product_card;
pub mod product_grid;
pub mod product_modal;
pub mod settings_dialog;
pub mod toast;
