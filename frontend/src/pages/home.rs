use spin_shared::prize::{prize_catalog, Prize};
use spin_shared::promo::Outcome;
use yew::prelude::*;

use crate::components::{LanguageToggle, ResultModal, SiteFooter, SpinningWheel, ThemeToggle};
use crate::hooks::{use_email_field, use_language};
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    let language = use_language();
    let t = language.t();
    let email = use_email_field(t);
    let prizes = use_memo(language.locale, |locale| prize_catalog(locale.translations()));
    let outcome = use_state(|| None::<Outcome>);
    let show_result = use_state(|| false);

    let on_spin_complete = {
        let outcome = outcome.clone();
        let show_result = show_result.clone();
        Callback::from(move |prize: Prize| {
            let result = Outcome::new(prize, &mut rand::thread_rng());
            match &result.promo_code {
                Some(code) => log::info!("Won {} with code {}", result.prize.id, code),
                None => log::info!("Spin landed on {}", result.prize.id),
            }
            outcome.set(Some(result));
            show_result.set(true);
        })
    };

    let on_close = {
        let outcome = outcome.clone();
        let show_result = show_result.clone();
        Callback::from(move |_| {
            show_result.set(false);
            outcome.set(None);
        })
    };

    html! {
        <div class={styles::PAGE}>
            <header class={styles::HEADER}>
                <LanguageToggle />
                <ThemeToggle />
            </header>

            <main class={styles::MAIN}>
                <div class={styles::CONTENT}>
                    <section class={styles::HERO}>
                        <h1 class={styles::HERO_TITLE}>{t.hero.title}</h1>
                        <p class={styles::HERO_SUBTITLE}>{t.hero.subtitle}</p>
                    </section>

                    if outcome.is_none() {
                        <div class={styles::EMAIL_BLOCK}>
                            <input
                                type="email"
                                autocomplete="email"
                                autofocus=true
                                placeholder={t.hero.email_placeholder}
                                value={email.value.clone()}
                                oninput={email.oninput.clone()}
                                onblur={email.onblur.clone()}
                                class={email.input_class()}
                                aria-invalid={email.hint.is_some().to_string()}
                            />
                            if let Some(hint) = email.hint {
                                <p class={styles::TEXT_ERROR} role="alert">{hint}</p>
                            }
                        </div>
                    }

                    <SpinningWheel
                        prizes={prizes.clone()}
                        on_spin_complete={on_spin_complete}
                        disabled={!email.is_valid}
                    />

                    <ResultModal
                        open={*show_result}
                        outcome={(*outcome).clone()}
                        on_close={on_close}
                    />

                    <p class={classes!(styles::TEXT_SMALL, "text-center")}>
                        {t.hero.terms_text}{" "}
                        <a href="#" class={styles::LINK}>{t.hero.terms_link}</a>
                    </p>
                </div>
            </main>

            <SiteFooter />
        </div>
    }
}
