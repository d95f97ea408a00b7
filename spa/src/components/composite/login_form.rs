use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};
use crate::i18n::{translate, use_locale, Text};

#[derive(Debug, PartialEq, Default, Clone)]
pub struct LoginFormData {
    pub username: String,
    pub password: String,
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_login: Callback<LoginFormData>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(LoginForm)]
pub fn login_form(props: &Props) -> Html {
    let locale = *use_locale();
    let state = use_state(LoginFormData::default);

    let on_change_username = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.username = input_text;
            state.set(data);
        })
    };

    let on_change_password = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.password = input_text;
            state.set(data);
        })
    };

    let on_submit = {
        let state = state.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let data = (*state).clone();
            if !data.username.is_empty() && !data.password.is_empty() {
                on_login.emit(data);
            }
        })
    };

    html! {
        <form onsubmit={on_submit}>
            <div class="mb-3">
                <label for="username" class="form-label">{ translate(locale, Text::Username) }</label>
                <InputText
                    id="username"
                    name="username"
                    class={"form-control"}
                    input_type={InputType::Text}
                    on_change={on_change_username} />
            </div>
            <div class="mb-3">
                <label for="password" class="form-label">{ translate(locale, Text::Password) }</label>
                <InputText
                    id="password"
                    name="password"
                    class={"form-control"}
                    input_type={InputType::Password}
                    on_change={on_change_password} />
            </div>
            <div class="d-grid">
                <button class="btn btn-primary" type="submit" disabled={props.disabled}>
                    { translate(locale, Text::SignIn) }
                </button>
            </div>
        </form>
    }
}
