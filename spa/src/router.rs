use shared::ObjectType;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::composite::navigation_bar::NavigationBar;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::points::PointsPage;
use crate::pages::users::UsersPage;
use crate::session::use_session;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/analog-inputs")]
    AnalogInputs,
    #[at("/analog-outputs")]
    AnalogOutputs,
    #[at("/analog-values")]
    AnalogValues,
    #[at("/binary-inputs")]
    BinaryInputs,
    #[at("/binary-outputs")]
    BinaryOutputs,
    #[at("/binary-values")]
    BinaryValues,
    #[at("/multi-state-inputs")]
    MultiStateInputs,
    #[at("/multi-state-outputs")]
    MultiStateOutputs,
    #[at("/multi-state-values")]
    MultiStateValues,
    #[at("/users")]
    Users,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Screens reachable without a session. Everything else needs one.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }

    pub fn for_object_type(object_type: ObjectType) -> Route {
        match object_type {
            ObjectType::AnalogInput => Route::AnalogInputs,
            ObjectType::AnalogOutput => Route::AnalogOutputs,
            ObjectType::AnalogValue => Route::AnalogValues,
            ObjectType::BinaryInput => Route::BinaryInputs,
            ObjectType::BinaryOutput => Route::BinaryOutputs,
            ObjectType::BinaryValue => Route::BinaryValues,
            ObjectType::MultiStateInput => Route::MultiStateInputs,
            ObjectType::MultiStateOutput => Route::MultiStateOutputs,
            ObjectType::MultiStateValue => Route::MultiStateValues,
        }
    }

    pub fn object_type(&self) -> Option<ObjectType> {
        match self {
            Route::AnalogInputs => Some(ObjectType::AnalogInput),
            Route::AnalogOutputs => Some(ObjectType::AnalogOutput),
            Route::AnalogValues => Some(ObjectType::AnalogValue),
            Route::BinaryInputs => Some(ObjectType::BinaryInput),
            Route::BinaryOutputs => Some(ObjectType::BinaryOutput),
            Route::BinaryValues => Some(ObjectType::BinaryValue),
            Route::MultiStateInputs => Some(ObjectType::MultiStateInput),
            Route::MultiStateOutputs => Some(ObjectType::MultiStateOutput),
            Route::MultiStateValues => Some(ObjectType::MultiStateValue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    Allow,
    Redirect(Route),
}

/// Admission control, re-evaluated on every navigation. A pure function
/// of the target's metadata and the current session flag; nothing is
/// cached between navigations.
pub fn admit(target: &Route, is_authenticated: bool) -> Admission {
    if target.requires_auth() && !is_authenticated {
        return Admission::Redirect(Route::Login);
    }
    if matches!(target, Route::Login) && is_authenticated {
        return Admission::Redirect(Route::Dashboard);
    }
    Admission::Allow
}

pub fn switch(route: Route) -> Html {
    html! { <Guard target={route} /> }
}

#[derive(PartialEq, Properties)]
struct GuardProps {
    target: Route,
}

#[function_component(Guard)]
fn guard(props: &GuardProps) -> Html {
    let session = use_session();
    match admit(&props.target, session.is_authenticated) {
        Admission::Redirect(to) => html! { <Redirect<Route> to={to} /> },
        Admission::Allow => outlet(&props.target),
    }
}

fn outlet(route: &Route) -> Html {
    if let Some(object_type) = route.object_type() {
        // key forces a remount per collection so page/filter state resets
        return shell(html! { <PointsPage key={object_type.stats_key()} object_type={object_type} /> });
    }
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => shell(html! { <DashboardPage /> }),
        Route::Users => shell(html! { <UsersPage /> }),
        Route::NotFound => html! { <NotFoundPage /> },
        _ => Html::default(),
    }
}

// Authenticated screens share the navigation chrome.
fn shell(content: Html) -> Html {
    html! {
        <>
            <NavigationBar />
            <div class="container-fluid py-3">{content}</div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn protected_target_redirects_anonymous_visitors_to_login() {
        for route in [Route::Root, Route::Dashboard, Route::Users, Route::AnalogInputs] {
            assert_eq!(admit(&route, false), Admission::Redirect(Route::Login));
        }
    }

    #[test]
    fn login_redirects_authenticated_visitors_to_dashboard() {
        assert_eq!(
            admit(&Route::Login, true),
            Admission::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn everything_else_passes_through() {
        assert_eq!(admit(&Route::Login, false), Admission::Allow);
        assert_eq!(admit(&Route::Dashboard, true), Admission::Allow);
        assert_eq!(admit(&Route::NotFound, false), Admission::Allow);
        assert_eq!(admit(&Route::MultiStateValues, true), Admission::Allow);
    }

    #[test]
    fn only_login_and_not_found_are_public() {
        assert!(!Route::Login.requires_auth());
        assert!(!Route::NotFound.requires_auth());
        assert!(Route::Root.requires_auth());
        assert!(Route::Dashboard.requires_auth());
        assert!(Route::Users.requires_auth());
    }

    #[test]
    fn object_type_routes_round_trip() {
        for object_type in ObjectType::iter() {
            let route = Route::for_object_type(object_type);
            assert_eq!(route.object_type(), Some(object_type));
            assert!(route.requires_auth());
        }
    }

    #[test]
    fn collection_paths_match_rest_segments() {
        assert_eq!(
            Route::recognize("/analog-inputs"),
            Some(Route::AnalogInputs)
        );
        assert_eq!(
            Route::recognize("/multi-state-values"),
            Some(Route::MultiStateValues)
        );
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
    }
}
