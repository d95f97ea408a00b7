use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{self, LocaleHandle};
use crate::router::{switch, Route};
use crate::session::{Session, SessionHandle};
use crate::storage::LocalStorage;

// Construct and restore the session before the router mounts, so the very
// first guard evaluation already sees the persisted state.
#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer_eq(|| Session::restore(&LocalStorage));
    let locale = use_state_eq(|| i18n::stored_locale(&LocalStorage));

    html! {
        <ContextProvider<SessionHandle> context={session}>
            <ContextProvider<LocaleHandle> context={locale}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<LocaleHandle>>
        </ContextProvider<SessionHandle>>
    }
}
