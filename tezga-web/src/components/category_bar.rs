use crate::components::foundation as f;
use tezga_catalog::{ALL_CATEGORY, title_case};

#[derive(f::Properties, PartialEq, Clone)]
pub struct CategoryBarProps {
    /// Category tags, `"all"` first.
    pub categories: Vec<f::AttrValue>,
    pub active: f::AttrValue,
    #[prop_or_default]
    pub on_select: f::Callback<f::AttrValue>,
}

#[f::function_component(CategoryBar)]
pub fn category_bar(props: &CategoryBarProps) -> f::Html {
    f::html! {
        <section id="categories" class="category-bar" aria-label="Product categories">
            <div class="category-bar__cards" role="tablist">
                { for props.categories.iter().map(|tag| {
                    let selected = *tag == props.active;
                    let mut card_class = f::classes!("category-card");
                    if selected {
                        card_class.push("active");
                    }
                    let label = if tag.as_str() == ALL_CATEGORY {
                        "All products".to_string()
                    } else {
                        title_case(tag)
                    };
                    let onclick = {
                        let tag = tag.clone();
                        let on_select = props.on_select.clone();
                        f::Callback::from(move |_: f::MouseEvent| on_select.emit(tag.clone()))
                    };
                    f::html! {
                        <button class={card_class} data-category={tag.clone()} role="tab"
                                aria-selected={selected.to_string()} onclick={onclick}>
                            { label }
                        </button>
                    }
                }) }
            </div>
        </section>
    }
}
