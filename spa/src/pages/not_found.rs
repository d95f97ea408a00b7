use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{translate, use_locale, Text};
use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let locale = *use_locale();
    html! {
        <main class="container mt-5 text-center">
            <h1 class="display-4">{"404"}</h1>
            <p class="lead">{ translate(locale, Text::NotFoundTitle) }</p>
            <Link<Route> classes="btn btn-primary" to={Route::Dashboard}>
                { translate(locale, Text::BackToDashboard) }
            </Link<Route>>
        </main>
    }
}
