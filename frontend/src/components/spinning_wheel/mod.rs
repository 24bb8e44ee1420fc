mod spin_button;
mod wheel_svg;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use spin_shared::prize::Prize;
use spin_shared::wheel::{WheelState, SPIN_DURATION_MS};
use yew::prelude::*;

use crate::hooks::use_language;
use crate::styles;
use spin_button::SpinButton;
use wheel_svg::{WheelPointer, WheelSvg};

#[derive(Properties, PartialEq)]
pub struct SpinningWheelProps {
    pub prizes: Rc<Vec<Prize>>,
    pub on_spin_complete: Callback<Prize>,
    #[prop_or_default]
    pub disabled: bool,
}

/// The wheel, its pointer and the spin button.
///
/// A spin picks the winner up front, animates towards it with a CSS
/// transition, and reports that same winner once the transition is over.
#[function_component(SpinningWheel)]
pub fn spinning_wheel(props: &SpinningWheelProps) -> Html {
    let t = use_language().t();
    let wheel = use_state(WheelState::new);
    let completion = use_mut_ref(|| None::<Timeout>);

    // Dropping the pending timeout cancels it, so an unmounted wheel never
    // reports a result
    {
        let completion = completion.clone();
        use_effect_with((), move |_| {
            move || {
                if completion.borrow_mut().take().is_some() {
                    log::debug!("Wheel unmounted mid-spin, completion cancelled");
                }
            }
        });
    }

    let on_spin = {
        let wheel = wheel.clone();
        let completion = completion.clone();
        let prizes = props.prizes.clone();
        let on_spin_complete = props.on_spin_complete.clone();
        let enabled = !props.disabled;

        Callback::from(move |_: MouseEvent| {
            let mut spinning = (*wheel).clone();
            let Some(plan) = spinning.begin_spin(prizes.len(), enabled, &mut rand::thread_rng()) else {
                return;
            };
            log::info!("Spin started, landing on {}", prizes[plan.index].id);
            wheel.set(spinning.clone());

            let wheel = wheel.clone();
            let prizes = prizes.clone();
            let on_spin_complete = on_spin_complete.clone();
            let timeout = Timeout::new(SPIN_DURATION_MS, move || {
                let mut settled = spinning;
                if let Some(index) = settled.finish_spin(plan.ticket) {
                    let prize = prizes[index].clone();
                    log::info!("Spin finished: {}", prize.id);
                    wheel.set(settled);
                    on_spin_complete.emit(prize);
                }
            });
            *completion.borrow_mut() = Some(timeout);
        })
    };

    let is_spinning = wheel.is_spinning();
    let can_spin = wheel.can_spin(!props.disabled, props.prizes.len());
    let title = (props.disabled && !is_spinning).then_some(t.wheel.email_required);

    html! {
        <div class={styles::WHEEL_COLUMN}>
            <div class={styles::WHEEL_FRAME}>
                <WheelPointer />
                <WheelSvg
                    prizes={props.prizes.clone()}
                    rotation={wheel.rotation()}
                    is_spinning={is_spinning}
                />
            </div>

            <SpinButton
                is_spinning={is_spinning}
                disabled={!can_spin}
                label={t.hero.spin_button}
                spinning_label={t.wheel.spinning}
                title={title}
                onclick={on_spin}
            />
        </div>
    }
}
