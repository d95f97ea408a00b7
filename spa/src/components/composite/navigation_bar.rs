use shared::ObjectType;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::composite::language_select::LanguageSelect;
use crate::i18n::{translate, use_locale, Text};
use crate::router::Route;
use crate::session::{self, use_session};

#[function_component(NavigationBar)]
pub fn navigation_bar() -> Html {
    let session = use_session();
    let locale = *use_locale();
    let route = use_route::<Route>();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            spawn_local(async move {
                session::logout(&session).await;
            });
        })
    };

    let link_classes = |target: &Route| {
        if route.as_ref() == Some(target) {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        }
    };

    html! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary">
            <div class="container-fluid">
                <Link<Route> classes="navbar-brand" to={Route::Dashboard}>
                    { translate(locale, Text::AppTitle) }
                </Link<Route>>
                <div class="collapse navbar-collapse">
                    <ul class="navbar-nav me-auto mb-2 mb-lg-0">
                        <li class="nav-item">
                            <Link<Route> classes={link_classes(&Route::Dashboard)} to={Route::Dashboard}>
                                { translate(locale, Text::Dashboard) }
                            </Link<Route>>
                        </li>
                        { for ObjectType::iter().map(|object_type| {
                            let target = Route::for_object_type(object_type);
                            html! {
                                <li class="nav-item" key={object_type.stats_key()}>
                                    <Link<Route> classes={link_classes(&target)} to={target.clone()}>
                                        { translate(locale, Text::for_object_type(object_type)) }
                                    </Link<Route>>
                                </li>
                            }
                        }) }
                        <li class="nav-item">
                            <Link<Route> classes={link_classes(&Route::Users)} to={Route::Users}>
                                { translate(locale, Text::Users) }
                            </Link<Route>>
                        </li>
                    </ul>
                    <div class="d-flex align-items-center">
                        <LanguageSelect />
                        <span class="navbar-text mx-3">
                            { session.display_label() }
                            if session.is_admin() {
                                <span class="badge text-bg-secondary ms-1">
                                    { translate(locale, Text::Administrator) }
                                </span>
                            }
                        </span>
                        <button onclick={on_logout} class="btn btn-sm btn-outline-secondary">
                            { translate(locale, Text::SignOut) }
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
