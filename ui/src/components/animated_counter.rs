//! Ease-out counter for the header totals.

use dioxus::prelude::*;

use crate::core::animation::{counter_sample, FRAME_MS};
use crate::core::format;

/// Counts from zero to `value` over `duration_ms` on an ease-out quartic
/// curve. Restarting on a new target cancels the previous ticker, and the
/// ticker dies with the component, so no frames leak into a disposed view.
#[component]
pub fn AnimatedCounter(
    value: ReadOnlySignal<u64>,
    #[props(default = 2000)] duration_ms: u64,
) -> Element {
    let mut shown = use_signal(|| 0u64);
    let mut ticker = use_signal(|| None::<Task>);

    use_effect(move || {
        let target = value();
        if let Some(task) = ticker.take() {
            task.cancel();
        }
        if target == 0 {
            shown.set(0);
            return;
        }
        let task = spawn(async move {
            // Measure elapsed time off the clock rather than summing sleep
            // lengths: timers oversleep, and the accumulated drift would make
            // the count run visibly longer than `duration_ms`. The max() keeps
            // the sample index monotone if the wall clock steps backwards.
            let started = crate::core::timing::now_ms();
            let mut elapsed = 0u64;
            loop {
                elapsed = elapsed.max((crate::core::timing::now_ms() - started) as u64);
                shown.set(counter_sample(target, elapsed, duration_ms));
                if elapsed >= duration_ms {
                    break;
                }
                crate::core::timing::sleep_ms(FRAME_MS).await;
            }
        });
        ticker.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = ticker.take() {
            task.cancel();
        }
    });

    rsx! {
        span { class: "stat-counter", "{format::format_compact(shown())}" }
    }
}
