//! Looping EWGF-input loading animation shown while the store hydrates.

use dioxus::prelude::*;

use crate::core::animation::{next_step, STEP_INTERVAL_MS};
use crate::core::timing;

/// The electric wind god fist, one input per step.
const INPUT_SEQUENCE: [&str; 5] = ["f", "n", "d", "d/f", "2"];

/// Cycles through the input sequence, showing the first `step` icons, then
/// wrapping to an empty row. The driving task is scoped to this component,
/// so unmounting (or the loading flag flipping) tears the interval down.
#[component]
pub fn EwgfLoadingAnimation() -> Element {
    let mut step = use_signal(|| 0usize);

    use_future(move || async move {
        loop {
            timing::sleep_ms(STEP_INTERVAL_MS).await;
            step.set(next_step(step(), INPUT_SEQUENCE.len()));
        }
    });

    rsx! {
        div { class: "loading",
            div { class: "loading__inputs",
                for (index, input) in INPUT_SEQUENCE.iter().take(step()).enumerate() {
                    span { key: "{index}", class: "loading__input", "{input}" }
                }
            }
            p { class: "loading__caption", "Loading..." }
        }
    }
}
