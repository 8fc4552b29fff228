use crate::components::foundation as f;

#[f::function_component(Footer)]
pub fn footer() -> f::Html {
    f::html! {
        <footer class="site-footer">
            <p>{ "Tezga — handicrafts from small workshops, one stall at a time." }</p>
            <p class="site-footer__fineprint">
                { "Product images belong to their makers. This storefront keeps no accounts and takes no payments." }
            </p>
        </footer>
    }
}
