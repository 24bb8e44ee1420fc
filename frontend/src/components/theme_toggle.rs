use gloo_utils::document;
use spin_shared::preferences::{load_theme, save_theme, Theme};
use yew::prelude::*;

use crate::hooks::use_language;
use crate::storage::BrowserStore;
use crate::styles;

fn apply_theme(theme: Theme) {
    if let Some(root) = document().document_element() {
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if let Err(err) = result {
            log::warn!("Could not apply theme: {:?}", err);
        }
    }
}

/// Light/dark switch. Independent of the wheel; only the page colors react.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let t = use_language().t();
    let theme = use_state(|| load_theme(&BrowserStore));

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = theme.toggled();
            if let Err(err) = save_theme(&BrowserStore, next) {
                log::warn!("Could not persist theme: {}", err);
            }
            theme.set(next);
        })
    };

    let icon = if theme.is_dark() { "☀️" } else { "🌙" };

    html! {
        <button {onclick} class={styles::BUTTON_ICON} title={t.nav.theme} aria-label={t.nav.theme}>
            {icon}
        </button>
    }
}
