//! Payload mass range picker with min and max sliders.

use crate::state::AppState;
use dioxus::prelude::*;
use slr_core::payload::{SLIDER_MARKS_KG, SLIDER_MAX_KG, SLIDER_MIN_KG, SLIDER_STEP_KG};

/// Payload range picker for filtering the scatter chart.
///
/// Two range inputs share the slider track bounds; the thumbs are clamped
/// so the window never inverts (min ≤ max).
#[component]
pub fn PayloadRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let min = (state.payload_min)();
    let max = (state.payload_max)();

    let on_min_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let upper = (state.payload_max)();
            state.payload_min.set(value.min(upper));
        }
    };

    let on_max_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let lower = (state.payload_min)();
            state.payload_max.set(value.max(lower));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            p {
                style: "font-weight: bold; margin: 0 0 4px 0;",
                "Payload range (Kg): {min:.0} to {max:.0}"
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                label {
                    style: "font-size: 12px;",
                    "Min: "
                    input {
                        r#type: "range",
                        min: "{SLIDER_MIN_KG}",
                        max: "{SLIDER_MAX_KG}",
                        step: "{SLIDER_STEP_KG}",
                        value: "{min}",
                        onchange: on_min_change,
                    }
                }
                label {
                    style: "font-size: 12px;",
                    "Max: "
                    input {
                        r#type: "range",
                        min: "{SLIDER_MIN_KG}",
                        max: "{SLIDER_MAX_KG}",
                        step: "{SLIDER_STEP_KG}",
                        value: "{max}",
                        onchange: on_max_change,
                    }
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #666; max-width: 420px;",
                for mark in SLIDER_MARKS_KG {
                    span { "{mark:.0}" }
                }
            }
        }
    }
}
