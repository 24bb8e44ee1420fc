use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub label: &'static str,
    pub spinning_label: &'static str,
    #[prop_or_default]
    pub title: Option<&'static str>,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_class = if props.disabled {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON
    };

    let aria_label = if props.is_spinning {
        props.spinning_label
    } else {
        props.label
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            title={props.title}
            class={button_class}
            aria-busy={props.is_spinning.to_string()}
            aria-label={aria_label}
        >
            if props.is_spinning {
                <span class="flex items-center gap-2">
                    <svg class={styles::LOADING_SPINNER} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                        <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                        <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                    </svg>
                    {props.spinning_label}
                </span>
            } else {
                {props.label}
            }
        </button>
    }
}
