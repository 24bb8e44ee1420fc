use gloo_utils::document;
use spin_shared::locale::{Locale, Translations, DEFAULT_LOCALE};
use spin_shared::preferences::{load_locale, save_locale};
use yew::prelude::*;

use crate::storage::BrowserStore;

/// Active language plus its persisting setter, handed to every component
/// that renders text.
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub locale: Locale,
    pub set_locale: Callback<Locale>,
}

impl LanguageContext {
    pub fn t(&self) -> &'static Translations {
        self.locale.translations()
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Html,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let locale = use_state(|| load_locale(&BrowserStore));

    // Keep <html lang> in sync for screen readers and hyphenation
    use_effect_with(*locale, |locale| {
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("lang", locale.code());
        }
        || ()
    });

    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            if let Err(err) = save_locale(&BrowserStore, next) {
                log::warn!("Could not persist language preference: {}", err);
            }
            log::info!("Language set to {}", next.code());
            locale.set(next);
        })
    };

    let context = LanguageContext {
        locale: *locale,
        set_locale,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LanguageContext>>
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    match use_context::<LanguageContext>() {
        Some(context) => context,
        None => {
            log::error!("use_language called outside of LanguageProvider");
            LanguageContext {
                locale: DEFAULT_LOCALE,
                set_locale: Callback::noop(),
            }
        }
    }
}
