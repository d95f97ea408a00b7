use shared::{HealthResponse, ObjectType, StatsResponse};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::system_api;
use crate::i18n::{translate, use_locale, Text};
use crate::router::Route;
use crate::utils::{self, format_timestamp};

#[derive(Clone, PartialEq, Default)]
struct DashboardState {
    health: Option<HealthResponse>,
    stats: Option<StatsResponse>,
    error: Option<String>,
    loading: bool,
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let locale = *use_locale();
    let state = use_state(DashboardState::default);
    let reload = use_state(|| 0u32);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let state = state.clone();
                spawn_local(async move {
                    state.set(DashboardState {
                        loading: true,
                        ..DashboardState::default()
                    });
                    // the health probe rides out transient hiccups; the
                    // gateway itself never retries
                    let health = utils::retry(system_api::health, 2, 500).await;
                    let stats = system_api::stats().await;
                    let mut next = DashboardState::default();
                    match health {
                        Ok(response) => next.health = Some(response),
                        Err(error) => next.error = Some(error.to_string()),
                    }
                    match stats {
                        Ok(response) => next.stats = Some(response),
                        Err(error) => next.error = Some(error.to_string()),
                    }
                    state.set(next);
                });
                || ()
            },
            *reload,
        );
    }

    // rapid clicks collapse into one reload
    let on_refresh = utils::throttle(
        {
            let reload = reload.clone();
            Callback::from(move |_: MouseEvent| reload.set(*reload + 1))
        },
        2_000,
    );

    let counts = state
        .stats
        .as_ref()
        .map(|stats| stats.object_counts.clone())
        .unwrap_or_default();

    html! {
        <div>
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h3>{ translate(locale, Text::Dashboard) }</h3>
                <button onclick={on_refresh} class="btn btn-sm btn-outline-primary" disabled={state.loading}>
                    { translate(locale, Text::Refresh) }
                </button>
            </div>
            if let Some(message) = state.error.clone() {
                <div class="alert alert-danger" role="alert">{ message }</div>
            }
            if state.loading {
                <p class="text-muted">{ translate(locale, Text::Loading) }</p>
            }
            if let Some(health) = state.health.clone() {
                <div class="card mb-4">
                    <div class="card-body d-flex align-items-center gap-3">
                        <h5 class="card-title mb-0">{ translate(locale, Text::Health) }</h5>
                        <span class={format!("badge text-bg-{}", if health.status == "healthy" { "success" } else { "danger" })}>
                            { health.status.clone() }
                        </span>
                        <span class="text-muted">
                            { format!("{}: {}", translate(locale, Text::Database), health.database.clone().unwrap_or_else(|| "unknown".to_string())) }
                        </span>
                        if let Some(timestamp) = health.timestamp.clone() {
                            <span class="text-muted ms-auto">{ format_timestamp(&timestamp) }</span>
                        }
                    </div>
                </div>
            }
            <h5 class="mb-3">{ translate(locale, Text::ObjectCounts) }</h5>
            <div class="row row-cols-1 row-cols-md-3 g-3">
                { for ObjectType::iter().map(|object_type| {
                    let count = counts.get(object_type.stats_key()).copied().unwrap_or(0);
                    html! {
                        <div class="col" key={object_type.stats_key()}>
                            <div class="card h-100">
                                <div class="card-body">
                                    <h6 class="card-title">
                                        <Link<Route> to={Route::for_object_type(object_type)}>
                                            { translate(locale, Text::for_object_type(object_type)) }
                                        </Link<Route>>
                                    </h6>
                                    <p class="display-6 mb-0">{ count }</p>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
