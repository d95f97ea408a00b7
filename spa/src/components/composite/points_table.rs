use serde_json::Value;
use shared::PointSummary;
use yew::prelude::*;

use crate::i18n::{translate, use_locale, Text};
use crate::utils::{event_state_color, event_state_name, parse_status_flags};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub rows: Vec<PointSummary>,
    pub on_delete: Callback<i64>,
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn flags_title(raw: &str) -> String {
    let flags = parse_status_flags(raw);
    let mut active = Vec::new();
    if flags.in_alarm {
        active.push("in alarm");
    }
    if flags.fault {
        active.push("fault");
    }
    if flags.overridden {
        active.push("overridden");
    }
    if flags.out_of_service {
        active.push("out of service");
    }
    if active.is_empty() {
        "all clear".to_string()
    } else {
        active.join(", ")
    }
}

#[function_component(PointsTable)]
pub fn points_table(props: &Props) -> Html {
    let locale = *use_locale();
    if props.rows.is_empty() {
        return html! { <p class="text-muted">{ translate(locale, Text::NoData) }</p> };
    }
    html! {
        <table class="table table-striped table-hover align-middle">
            <thead>
                <tr>
                    <th>{ translate(locale, Text::ObjectId) }</th>
                    <th>{ translate(locale, Text::ObjectName) }</th>
                    <th>{ translate(locale, Text::PresentValue) }</th>
                    <th>{ translate(locale, Text::EventState) }</th>
                    <th>{ translate(locale, Text::StatusFlags) }</th>
                    <th>{ translate(locale, Text::OutOfService) }</th>
                    <th>{ translate(locale, Text::Description) }</th>
                    <th>{ translate(locale, Text::Actions) }</th>
                </tr>
            </thead>
            <tbody>
                { for props.rows.iter().map(|row| {
                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        let id = row.id;
                        Callback::from(move |_: MouseEvent| on_delete.emit(id))
                    };
                    html! {
                        <tr key={row.id}>
                            <td>{ row.object_identifier }</td>
                            <td>{ &row.object_name }</td>
                            <td>{ render_value(&row.present_value) }</td>
                            <td>
                                <span class={format!("badge text-bg-{}", event_state_color(row.event_state))}>
                                    { event_state_name(row.event_state) }
                                </span>
                            </td>
                            <td><code title={flags_title(&row.status_flags)}>{ &row.status_flags }</code></td>
                            <td>{ if row.out_of_service { "yes" } else { "no" } }</td>
                            <td>{ row.description.clone().unwrap_or_default() }</td>
                            <td>
                                <button onclick={on_delete} class="btn btn-sm btn-outline-danger">
                                    { translate(locale, Text::Delete) }
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
