use yew::prelude::*;

use crate::hooks::use_language;
use crate::styles;

/// Cycles through the supported languages.
#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let language = use_language();
    let locale = language.locale;

    let onclick = {
        let set_locale = language.set_locale.clone();
        Callback::from(move |_: MouseEvent| set_locale.emit(locale.next()))
    };

    html! {
        <button
            {onclick}
            class={styles::BUTTON_ICON}
            title={language.t().nav.language}
            aria-label={locale.name()}
        >
            <span class="text-base">{locale.flag()}</span>
            <span class="font-semibold uppercase">{locale.code()}</span>
        </button>
    }
}
