//! Fixed site header: brand, platform-supplied navigation, animated totals.

use dioxus::prelude::*;

use crate::components::AnimatedCounter;
use crate::stats::use_stats_store;

/// Navigation links come in as children so this crate never has to know a
/// platform's `Route` enum.
#[component]
pub fn StatsHeader(children: Element) -> Element {
    let store = use_stats_store();

    rsx! {
        header { class: "header",
            div { class: "header__inner",
                div { class: "header__brand",
                    span { class: "header__mark",
                        "ewgf"
                        span { class: "header__accent", ".gg" }
                    }
                    nav { class: "header__links", {children} }
                }

                div { class: "header__stats",
                    div { class: "header__stat",
                        span { class: "header__stat-label", "Players" }
                        AnimatedCounter { value: store.total_players() }
                    }
                    div { class: "header__divider" }
                    div { class: "header__stat",
                        span { class: "header__stat-label", "Replays" }
                        AnimatedCounter { value: store.total_replays() }
                    }
                }
            }
        }
    }
}
