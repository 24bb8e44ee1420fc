use spin_shared::locale::Translations;
use spin_shared::validation::{email_hint, is_valid_email};
use web_sys::{FocusEvent, HtmlInputElement, InputEvent};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct EmailField {
    pub value: String,
    pub is_valid: bool,
    pub hint: Option<&'static str>,
    pub oninput: Callback<InputEvent>,
    pub onblur: Callback<FocusEvent>,
}

impl EmailField {
    pub fn input_class(&self) -> &'static str {
        if self.hint.is_some() {
            crate::styles::INPUT_ERROR
        } else {
            crate::styles::INPUT
        }
    }
}

/// Email input state with live validation. The value is trimmed on blur.
#[hook]
pub fn use_email_field(t: &'static Translations) -> EmailField {
    let value = use_state(String::new);

    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    let onblur = {
        let value = value.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value().trim().to_string());
        })
    };

    EmailField {
        is_valid: is_valid_email(&value),
        hint: email_hint(&value, t),
        value: (*value).clone(),
        oninput,
        onblur,
    }
}
