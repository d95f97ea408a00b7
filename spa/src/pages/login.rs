use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::composite::login_form::{LoginForm, LoginFormData};
use crate::i18n::{translate, use_locale, Text};
use crate::session::{self, use_session};

// On success no navigation happens here: the session context updates, the
// guard re-evaluates the login route and redirects to the dashboard.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let locale = *use_locale();
    let error = use_state(|| Option::<String>::None);
    let busy = use_state(|| false);

    let on_login = {
        let session = session.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |data: LoginFormData| {
            let session = session.clone();
            let error = error.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match session::login(&session, data.username, data.password).await {
                    Ok(user) => {
                        log::info!("Signed in, user_id={}", user.id);
                        error.set(None);
                    }
                    Err(failure) => error.set(Some(failure.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <main class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-4">
                    <h2 class="text-center mb-4">{ translate(locale, Text::AppTitle) }</h2>
                    if let Some(message) = (*error).clone() {
                        <div class="alert alert-danger" role="alert">{ message }</div>
                    }
                    <LoginForm on_login={on_login} disabled={*busy} />
                </div>
            </div>
        </main>
    }
}
