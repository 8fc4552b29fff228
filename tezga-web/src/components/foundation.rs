//! Shared component plumbing: common re-exports and class helpers.
pub use wasm_bindgen::JsCast;
pub use wasm_bindgen::prelude::Closure;
pub use web_sys::{
    Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, KeyboardEvent,
    MouseEvent, SubmitEvent,
};
pub use yew::classes;
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};
pub use yew::{UseStateHandle, use_effect_with, use_mut_ref, use_state};

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[cfg(test)]
mod tests {
    use super::class_list;
    use yew::Classes;

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mx-1");
        let classes = class_list(&["card", "card-compact"], &extra);
        let rendered = classes.to_string();
        assert!(rendered.contains("card"));
        assert!(rendered.contains("card-compact"));
        assert!(rendered.contains("mx-1"));
    }
}
