use shared::{NewUserRequest, Page, Pagination, Principal, UpdateUserRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::users_api;
use crate::components::atoms::input_text::{InputText, InputType};
use crate::components::composite::pagination_controls::PaginationControls;
use crate::i18n::{translate, use_locale, Text};
use crate::utils::validate_email;

const PAGE_SIZE: u32 = 20;

#[derive(Clone, PartialEq, Default)]
struct UsersState {
    users: Vec<Principal>,
    pagination: Option<Pagination>,
    error: Option<String>,
    loading: bool,
}

#[derive(Clone, PartialEq, Default)]
struct UserForm {
    id: Option<i64>,
    name: String,
    display_name: String,
    email: String,
    password: String,
    is_admin: bool,
}

impl UserForm {
    fn for_edit(user: &Principal) -> Self {
        UserForm {
            id: Some(user.id),
            name: user.name.clone(),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            password: String::new(),
            is_admin: user.is_admin,
        }
    }
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let locale = *use_locale();
    let state = use_state(UsersState::default);
    let page = use_state(|| 1u32);
    let reload = use_state(|| 0u32);
    let form = use_state(|| Option::<UserForm>::None);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(page, _reload)| {
                let page = *page;
                let state = state.clone();
                spawn_local(async move {
                    state.set(UsersState {
                        loading: true,
                        ..(*state).clone()
                    });
                    match users_api::list(page, PAGE_SIZE).await {
                        Ok(Page { data, pagination }) => state.set(UsersState {
                            users: data,
                            pagination: Some(pagination),
                            error: None,
                            loading: false,
                        }),
                        Err(error) => state.set(UsersState {
                            error: Some(error.to_string()),
                            loading: false,
                            ..UsersState::default()
                        }),
                    }
                });
                || ()
            },
            (*page, *reload),
        );
    }

    let update_field = |mutator: fn(&mut UserForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            if let Some(mut data) = (*form).clone() {
                mutator(&mut data, value);
                form.set(Some(data));
            }
        })
    };
    let on_change_name = update_field(|data, value| data.name = value);
    let on_change_display_name = update_field(|data, value| data.display_name = value);
    let on_change_email = update_field(|data, value| data.email = value);
    let on_change_password = update_field(|data, value| data.password = value);

    let on_toggle_admin = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let checked = event.target_unchecked_into::<HtmlInputElement>().checked();
            if let Some(mut data) = (*form).clone() {
                data.is_admin = checked;
                form.set(Some(data));
            }
        })
    };

    let open_create = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(Some(UserForm::default())))
    };

    let on_edit = {
        let form = form.clone();
        Callback::from(move |user: Principal| form.set(Some(UserForm::for_edit(&user))))
    };

    let on_cancel = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(None))
    };

    let on_delete = {
        let state = state.clone();
        let reload = reload.clone();
        Callback::from(move |id: i64| {
            let state = state.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match users_api::delete(id).await {
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

    let on_submit = {
        let form = form.clone();
        let state = state.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(data) = (*form).clone() else {
                return;
            };
            if !validate_email(&data.email) {
                let mut next = (*state).clone();
                next.error = Some("Invalid email address".to_string());
                state.set(next);
                return;
            }
            let form = form.clone();
            let state = state.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let result = match data.id {
                    Some(id) => {
                        let request = UpdateUserRequest {
                            display_name: Some(data.display_name.clone()),
                            email: Some(data.email.clone()),
                            password: (!data.password.is_empty()).then(|| data.password.clone()),
                            is_admin: Some(data.is_admin),
                        };
                        users_api::update(id, &request).await.map(|_| ())
                    }
                    None => {
                        let request = NewUserRequest {
                            name: data.name.clone(),
                            display_name: data.display_name.clone(),
                            email: data.email.clone(),
                            password: data.password.clone(),
                            is_admin: data.is_admin,
                        };
                        users_api::create(&request).await.map(|_| ())
                    }
                };
                match result {
                    Ok(()) => {
                        form.set(None);
                        reload.set(*reload + 1);
                    }
                    Err(error) => {
                        let mut next = (*state).clone();
                        next.error = Some(error.to_string());
                        state.set(next);
                    }
                }
            });
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
                <h3>{ translate(locale, Text::Users) }</h3>
                <button onclick={open_create} class="btn btn-sm btn-primary">
                    { translate(locale, Text::NewUser) }
                </button>
            </div>
            if let Some(message) = state.error.clone() {
                <div class="alert alert-danger" role="alert">{ message }</div>
            }
            if let Some(data) = (*form).clone() {
                <div class="card mb-4">
                    <div class="card-body">
                        <form onsubmit={on_submit.clone()}>
                            <div class="row g-3">
                                <div class="col-md-3">
                                    <label for="user-name" class="form-label">{ translate(locale, Text::Name) }</label>
                                    <InputText
                                        id="user-name"
                                        name="name"
                                        class={"form-control"}
                                        value={data.name.clone()}
                                        disabled={data.id.is_some()}
                                        on_change={on_change_name.clone()} />
                                </div>
                                <div class="col-md-3">
                                    <label for="user-display-name" class="form-label">{ translate(locale, Text::DisplayName) }</label>
                                    <InputText
                                        id="user-display-name"
                                        name="display_name"
                                        class={"form-control"}
                                        value={data.display_name.clone()}
                                        on_change={on_change_display_name.clone()} />
                                </div>
                                <div class="col-md-3">
                                    <label for="user-email" class="form-label">{ translate(locale, Text::Email) }</label>
                                    <InputText
                                        id="user-email"
                                        name="email"
                                        class={"form-control"}
                                        input_type={InputType::Email}
                                        value={data.email.clone()}
                                        on_change={on_change_email.clone()} />
                                </div>
                                <div class="col-md-2">
                                    <label for="user-password" class="form-label">{ translate(locale, Text::Password) }</label>
                                    <InputText
                                        id="user-password"
                                        name="password"
                                        class={"form-control"}
                                        input_type={InputType::Password}
                                        on_change={on_change_password.clone()} />
                                </div>
                                <div class="col-md-1 d-flex align-items-end">
                                    <div class="form-check">
                                        <input
                                            id="user-admin"
                                            class="form-check-input"
                                            type="checkbox"
                                            checked={data.is_admin}
                                            onchange={on_toggle_admin.clone()} />
                                        <label for="user-admin" class="form-check-label">
                                            { translate(locale, Text::Administrator) }
                                        </label>
                                    </div>
                                </div>
                            </div>
                            <div class="mt-3 d-flex gap-2">
                                <button type="submit" class="btn btn-primary btn-sm">
                                    { translate(locale, Text::Save) }
                                </button>
                                <button type="button" onclick={on_cancel.clone()} class="btn btn-outline-secondary btn-sm">
                                    { translate(locale, Text::Cancel) }
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
            if state.loading {
                <p class="text-muted">{ translate(locale, Text::Loading) }</p>
            }
            if state.users.is_empty() && !state.loading {
                <p class="text-muted">{ translate(locale, Text::NoData) }</p>
            } else {
                <table class="table table-striped table-hover align-middle">
                    <thead>
                        <tr>
                            <th>{ translate(locale, Text::Name) }</th>
                            <th>{ translate(locale, Text::DisplayName) }</th>
                            <th>{ translate(locale, Text::Email) }</th>
                            <th>{ translate(locale, Text::Administrator) }</th>
                            <th>{ translate(locale, Text::Actions) }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for state.users.iter().map(|user| {
                            let edit = {
                                let on_edit = on_edit.clone();
                                let user = user.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(user.clone()))
                            };
                            let delete = {
                                let on_delete = on_delete.clone();
                                let id = user.id;
                                Callback::from(move |_: MouseEvent| on_delete.emit(id))
                            };
                            html! {
                                <tr key={user.id}>
                                    <td>{ &user.name }</td>
                                    <td>{ &user.display_name }</td>
                                    <td>{ &user.email }</td>
                                    <td>
                                        if user.is_admin {
                                            <span class="badge text-bg-secondary">
                                                { translate(locale, Text::Administrator) }
                                            </span>
                                        }
                                    </td>
                                    <td>
                                        <div class="btn-group btn-group-sm">
                                            <button onclick={edit} class="btn btn-outline-primary">
                                                { translate(locale, Text::Edit) }
                                            </button>
                                            <button onclick={delete} class="btn btn-outline-danger">
                                                { translate(locale, Text::Delete) }
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
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
