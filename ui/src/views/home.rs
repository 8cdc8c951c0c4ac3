//! Landing view: hydrates the store, then shows the homepage charts.

use dioxus::prelude::*;

use crate::components::{
    EwgfLoadingAnimation, RankDistributionChart, StatsGrid, WinrateChangesChart,
};
use crate::stats::hydrate::use_statistics_hydration;
use crate::stats::use_stats_store;

#[component]
pub fn Home() -> Element {
    let store = use_stats_store();
    use_statistics_hydration(store);

    rsx! {
        section { class: "page page-home",
            if store.is_loading() {
                div { class: "page-home__loading",
                    EwgfLoadingAnimation {}
                }
            } else {
                // A failed fetch is surfaced apart from per-chart empty
                // states, so "backend down" never masquerades as "no data".
                if let Some(message) = store.hydration_error() {
                    div { class: "page__error",
                        "Statistics are unavailable right now: {message}"
                    }
                }
                StatsGrid {}
                RankDistributionChart {}
                WinrateChangesChart {}
            }
        }
    }
}
