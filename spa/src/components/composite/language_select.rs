use strum::IntoEnumIterator;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::{persist_locale, use_locale, Locale};
use crate::storage::LocalStorage;

#[function_component(LanguageSelect)]
pub fn language_select() -> Html {
    let locale_handle = use_locale();
    let current = *locale_handle;

    let onchange = {
        let locale_handle = locale_handle.clone();
        Callback::from(move |event: Event| {
            let value = event.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(locale) = value.parse::<Locale>() {
                persist_locale(&LocalStorage, locale);
                locale_handle.set(locale);
            }
        })
    };

    html! {
        <select class="form-select form-select-sm w-auto" aria-label="language" onchange={onchange}>
            { for Locale::iter().map(|locale| html! {
                <option value={locale.code()} selected={locale == current}>
                    { locale.native_name() }
                </option>
            }) }
        </select>
    }
}
