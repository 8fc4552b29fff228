use yew::prelude::*;

use crate::pages::{home::HomePage, not_found::NotFoundPage};
use crate::routes::Route;

/// Map a route to its page.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
