use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::hooks::use_language;
use crate::styles;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let t = use_language().t();
    let year = Local::now().year();

    html! {
        <footer class={styles::FOOTER}>
            <div class="w-full mx-auto px-4 sm:px-6 lg:px-8 py-4 flex flex-col sm:flex-row items-center justify-between gap-2">
                <p class={styles::TEXT_SMALL}>{format!("© {} {}", year, t.footer.rights)}</p>
                <div class="flex items-center gap-4">
                    <a href="#" class={styles::FOOTER_LINK}>{t.footer.privacy}</a>
                    <a href="#" class={styles::FOOTER_LINK}>{t.footer.terms}</a>
                    <a href="#" class={styles::FOOTER_LINK}>{t.footer.contact}</a>
                </div>
            </div>
        </footer>
    }
}
