use std::rc::Rc;

use spin_shared::geometry::{
    line_offset, wrap_label, WheelLayout, HUB_RATIO, HUB_RING_RATIO, WHEEL_SIZE,
};
use spin_shared::prize::Prize;
use spin_shared::wheel::rotation_style;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub prizes: Rc<Vec<Prize>>,
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let layout = WheelLayout::new(WHEEL_SIZE, props.prizes.len());
    let center_x = layout.center.x.to_string();
    let center_y = layout.center.y.to_string();
    let view_box = format!("0 0 {} {}", WHEEL_SIZE, WHEEL_SIZE);

    let segments = layout.segments().zip(props.prizes.iter()).map(|(segment, prize)| {
        let lines = wrap_label(&prize.label);
        let line_count = lines.len();
        let anchor_x = segment.label_anchor.x.to_string();
        let anchor_y = segment.label_anchor.y.to_string();

        html! {
            <g key={prize.id.clone()}>
                <path
                    d={segment.path.clone()}
                    fill={prize.color.clone()}
                    stroke="rgba(255, 255, 255, 0.5)"
                    stroke-width="3"
                />
                <text
                    x={anchor_x.clone()}
                    y={anchor_y}
                    fill={prize.text_color().to_string()}
                    font-size="14"
                    font-weight="700"
                    text-anchor="middle"
                    dominant-baseline="middle"
                    transform={segment.label_transform()}
                    style="text-shadow: 0 2px 8px rgba(0,0,0,0.5); letter-spacing: 0.3px;"
                >
                    { for lines.into_iter().enumerate().map(|(i, line)| html! {
                        <tspan x={anchor_x.clone()} dy={line_offset(i, line_count).to_string()}>{line}</tspan>
                    }) }
                </text>
            </g>
        }
    });

    let dividers = layout.dividers().into_iter().enumerate().map(|(i, (inner, outer))| {
        html! {
            <line
                key={format!("divider-{}", i)}
                x1={inner.x.to_string()}
                y1={inner.y.to_string()}
                x2={outer.x.to_string()}
                y2={outer.y.to_string()}
                stroke="rgba(255, 255, 255, 0.6)"
                stroke-width="2"
                stroke-linecap="round"
            />
        }
    });

    html! {
        <svg
            width="100%"
            height="100%"
            viewBox={view_box}
            class={styles::WHEEL_SVG}
            style={rotation_style(props.rotation, props.is_spinning)}
        >
            { for segments }
            { for dividers }

            <circle
                cx={center_x.clone()}
                cy={center_y.clone()}
                r={layout.radius.to_string()}
                fill="none"
                stroke="rgba(255, 255, 255, 0.7)"
                stroke-width="4"
            />

            <defs>
                <linearGradient id="centerGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="#FCD34D" />
                    <stop offset="50%" stop-color="#FBBF24" />
                    <stop offset="100%" stop-color="#F59E0B" />
                </linearGradient>
            </defs>

            <circle
                cx={center_x.clone()}
                cy={center_y.clone()}
                r={(layout.radius * HUB_RING_RATIO).to_string()}
                fill="white"
            />
            <circle
                cx={center_x.clone()}
                cy={center_y.clone()}
                r={(layout.radius * HUB_RATIO).to_string()}
                fill="url(#centerGradient)"
                stroke="white"
                stroke-width="3"
            />
            <text
                x={center_x}
                y={center_y}
                font-size="36"
                font-weight="900"
                text-anchor="middle"
                dominant-baseline="middle"
                fill="white"
                style="text-shadow: 0 2px 10px rgba(0,0,0,0.4); letter-spacing: 2px;"
            >
                {"SPIN"}
            </text>
        </svg>
    }
}

/// Fixed triangle at the top of the wheel. Does not rotate.
#[function_component(WheelPointer)]
pub fn wheel_pointer() -> Html {
    html! {
        <div class={styles::WHEEL_POINTER}>
            <svg width="36" height="36" viewBox="0 0 36 36">
                <polygon points="0,0 36,0 18,36" fill="#EAB308" />
                <polygon points="4,0 32,0 18,28" fill="#FACC15" />
            </svg>
        </div>
    }
}
