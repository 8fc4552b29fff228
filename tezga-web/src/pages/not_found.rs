use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="not-found container">
            <h1>{ "Lost between the stalls" }</h1>
            <p>{ "This page does not exist. The catalog is back at the entrance." }</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{ "Back to the storefront" }</Link<Route>>
        </main>
    }
}
