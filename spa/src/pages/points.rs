use serde_json::Value;
use shared::{ObjectType, Page, Pagination, PointSummary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::points_api;
use crate::components::atoms::input_text::{InputText, InputType};
use crate::components::composite::pagination_controls::PaginationControls;
use crate::components::composite::points_table::PointsTable;
use crate::i18n::{translate, use_locale, Text};
use crate::utils;

const PAGE_SIZE: u32 = 20;

#[derive(Clone, PartialEq, Default)]
struct PointsState {
    rows: Vec<PointSummary>,
    pagination: Option<Pagination>,
    error: Option<String>,
    loading: bool,
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub object_type: ObjectType,
}

/// One list screen serves all nine collections; the route decides which
/// one it is looking at.
#[function_component(PointsPage)]
pub fn points_page(props: &Props) -> Html {
    let locale = *use_locale();
    let state = use_state(PointsState::default);
    let page = use_state(|| 1u32);
    let reload = use_state(|| 0u32);
    let filter = use_state(String::new);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(object_type, page, _reload)| {
                let object_type = *object_type;
                let page = *page;
                let state = state.clone();
                spawn_local(async move {
                    state.set(PointsState {
                        loading: true,
                        ..(*state).clone()
                    });
                    match points_api::list::<PointSummary>(object_type, page, PAGE_SIZE).await {
                        Ok(Page { data, pagination }) => state.set(PointsState {
                            rows: data,
                            pagination: Some(pagination),
                            error: None,
                            loading: false,
                        }),
                        Err(error) => state.set(PointsState {
                            error: Some(error.to_string()),
                            loading: false,
                            ..PointsState::default()
                        }),
                    }
                });
                || ()
            },
            (props.object_type, *page, *reload),
        );
    }

    let on_delete = {
        let state = state.clone();
        let reload = reload.clone();
        let object_type = props.object_type;
        Callback::from(move |id: i64| {
            let state = state.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match points_api::delete(object_type, id).await {
                    Ok(()) => reload.set(*reload + 1),
                    Err(error) => {
                        let mut next = (*state).clone();
                        next.error = Some(error.to_string());
                        state.set(next);
                    }
                }
            });
        })
    };

    let on_filter = utils::debounce(
        {
            let filter = filter.clone();
            Callback::from(move |value: String| filter.set(value))
        },
        300,
    );

    let needle = filter.to_lowercase();
    let visible: Vec<PointSummary> = state
        .rows
        .iter()
        .filter(|row| needle.is_empty() || row.object_name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    let on_export_csv = {
        let visible = visible.clone();
        let object_type = props.object_type;
        Callback::from(move |_: MouseEvent| {
            let rows: Vec<Value> = visible
                .iter()
                .filter_map(|row| serde_json::to_value(row).ok())
                .collect();
            utils::export_as_csv(&rows, &format!("{}.csv", object_type.as_ref()));
        })
    };

    let on_export_json = {
        let visible = visible.clone();
        let object_type = props.object_type;
        Callback::from(move |_: MouseEvent| {
            if let Ok(value) = serde_json::to_value(&visible) {
                utils::export_as_json(&value, &format!("{}.json", object_type.as_ref()));
            }
        })
    };

    let on_previous = {
        let page = page.clone();
        Callback::from(move |_: ()| {
            if *page > 1 {
                page.set(*page - 1);
            }
        })
    };

    let on_next = {
        let page = page.clone();
        let pages = state
            .pagination
            .as_ref()
            .map(|pagination| pagination.pages)
            .unwrap_or(1);
        Callback::from(move |_: ()| {
            if u64::from(*page) < pages {
                page.set(*page + 1);
            }
        })
    };

    html! {
        <div>
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h3>{ translate(locale, Text::for_object_type(props.object_type)) }</h3>
                <div class="d-flex gap-2">
                    <InputText
                        id="name-filter"
                        name="name-filter"
                        class={"form-control form-control-sm"}
                        input_type={InputType::Search}
                        placeholder={translate(locale, Text::FilterByName)}
                        on_change={on_filter} />
                    <button onclick={on_export_csv} class="btn btn-sm btn-outline-secondary">
                        { translate(locale, Text::ExportCsv) }
                    </button>
                    <button onclick={on_export_json} class="btn btn-sm btn-outline-secondary">
                        { translate(locale, Text::ExportJson) }
                    </button>
                </div>
            </div>
            if state.loading {
                <p class="text-muted">{ translate(locale, Text::Loading) }</p>
            }
            if let Some(message) = state.error.clone() {
                <div class="alert alert-danger" role="alert">{ message }</div>
            }
            <PointsTable rows={visible} on_delete={on_delete} />
            if let Some(pagination) = state.pagination.clone() {
                <PaginationControls
                    page={pagination.page}
                    pages={pagination.pages}
                    total={pagination.total}
                    on_previous={on_previous}
                    on_next={on_next} />
            }
        </div>
    }
}
