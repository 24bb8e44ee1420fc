use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use gloo_utils::document;
use spin_shared::promo::Outcome;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::clipboard::copy_text;
use crate::config::COPY_FEEDBACK_MS;
use crate::hooks::use_language;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub open: bool,
    pub outcome: Option<Outcome>,
    pub on_close: Callback<()>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let t = use_language().t();
    let copied = use_state(|| false);
    let copied_reset = use_mut_ref(|| None::<Timeout>);

    // A new outcome starts without the "Copied!" confirmation
    {
        let copied = copied.clone();
        let copied_reset = copied_reset.clone();
        use_effect_with(props.outcome.clone(), move |_| {
            copied_reset.borrow_mut().take();
            copied.set(false);
            || ()
        });
    }

    // Escape closes the dialog while it is open
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.open, move |open| {
            let listener = open.then(|| {
                EventListener::new(&document(), "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        if event.key() == "Escape" {
                            on_close.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let Some(outcome) = props.outcome.clone() else {
        return html! {};
    };
    if !props.open {
        return html! {};
    }

    let is_no_luck = outcome.is_no_luck();
    let prize = &outcome.prize;

    let handle_copy = {
        let copied = copied.clone();
        let copied_reset = copied_reset.clone();
        let code = outcome.promo_code.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(code) = code.clone() else {
                return;
            };
            let copied = copied.clone();
            let copied_reset = copied_reset.clone();
            spawn_local(async move {
                match copy_text(&code).await {
                    Ok(()) => {
                        copied.set(true);
                        let copied = copied.clone();
                        *copied_reset.borrow_mut() = Some(Timeout::new(COPY_FEEDBACK_MS, move || {
                            copied.set(false);
                        }));
                    }
                    Err(err) => log::error!("Failed to copy: {}", err),
                }
            });
        })
    };

    let handle_close = {
        let on_close = props.on_close.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            copied.set(false);
            on_close.emit(());
        })
    };

    let (title, message, emoji) = if is_no_luck {
        (t.result.no_luck_title, t.result.no_luck_message, "😔")
    } else {
        (t.result.title, t.result.message, "🎉")
    };

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={handle_close.clone()}>
            <div class={styles::MODAL_WRAPPER}>
                <div
                    role="dialog"
                    aria-modal="true"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    class={styles::MODAL_PANEL}
                >
                    <div class="space-y-2">
                        <h2 class={styles::MODAL_TITLE}>{title}</h2>
                        <p class={styles::MODAL_TEXT}>{message}</p>
                    </div>

                    <div class="space-y-6 py-4">
                        <div class="flex flex-col items-center gap-4">
                            <div
                                class={styles::PRIZE_BADGE}
                                style={format!("background-color: {};", prize.color)}
                            >
                                <span
                                    class="text-2xl font-bold text-center px-2"
                                    style={format!("color: {};", prize.text_color())}
                                >
                                    {emoji}
                                </span>
                            </div>

                            <div class="text-center">
                                <p class={classes!(styles::TEXT_SMALL, "mb-2")}>{t.wheel.you_won}</p>
                                <p class="text-2xl font-bold" style={format!("color: {};", prize.color)}>
                                    {prize.label.clone()}
                                </p>
                            </div>
                        </div>

                        if let Some(code) = outcome.promo_code.clone() {
                            <div class="space-y-3">
                                <div class={styles::PROMO_BOX}>
                                    <p class="text-xs text-gray-500 dark:text-gray-400 mb-2 text-center">
                                        {t.result.code}
                                    </p>
                                    <p class={styles::PROMO_CODE}>{code}</p>
                                </div>
                                <button
                                    onclick={handle_copy}
                                    class={styles::BUTTON_SECONDARY}
                                    disabled={*copied}
                                >
                                    {if *copied { t.result.copied } else { t.result.copy_code }}
                                </button>
                            </div>
                        }

                        <div class="space-y-2">
                            <button onclick={handle_close.clone()} class={styles::BUTTON_PRIMARY}>
                                {if is_no_luck { t.wheel.try_again } else { t.result.shop_now }}
                            </button>
                            if !is_no_luck {
                                <button onclick={handle_close} class={styles::BUTTON_GHOST}>
                                    {t.common.close}
                                </button>
                            }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
