use yew::prelude::*;

use crate::app::Storefront;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! { <Storefront /> }
}
