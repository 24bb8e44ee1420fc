pub mod clipboard;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use crate::hooks::LanguageProvider;
use crate::pages::home::Home;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <LanguageProvider>
            <Home />
        </LanguageProvider>
    }
}
