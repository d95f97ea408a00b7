use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(PartialEq, Default, Copy, Clone, Debug)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Search,
}

impl InputType {
    fn as_type(&self) -> AttrValue {
        match self {
            Self::Text => "text".into(),
            Self::Password => "password".into(),
            Self::Email => "email".into(),
            Self::Search => "search".into(),
        }
    }
}

#[derive(PartialEq, Properties, Default, Debug)]
pub struct Props {
    pub id: String,
    pub name: String,
    #[prop_or_default]
    pub value: Option<String>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub input_type: InputType,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<String>,
}

#[function_component(InputText)]
pub fn input_text(props: &Props) -> Html {
    let callback = props.on_change.clone();
    let oninput = Callback::from(move |event: InputEvent| {
        let value = event.target_unchecked_into::<HtmlInputElement>().value();
        callback.emit(value);
    });
    html! {
        <input
            id={props.id.clone()}
            name={props.name.clone()}
            value={props.value.clone()}
            type={props.input_type.as_type()}
            placeholder={props.placeholder.clone()}
            class={props.class.clone()}
            disabled={props.disabled}
            oninput={oninput} />
    }
}
