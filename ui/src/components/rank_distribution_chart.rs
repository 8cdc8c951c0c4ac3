//! Rank-distribution bar chart with version and mode selectors.

use dioxus::prelude::*;

use crate::components::ChartCard;
use crate::core::format;
use crate::stats::shape;
use crate::stats::types::{DistributionMode, DEFAULT_VERSION};
use crate::stats::use_stats_store;

/// Tallest bar in pixels; the rest scale against the series maximum.
const MAX_BAR_PX: f64 = 220.0;

#[component]
pub fn RankDistributionChart() -> Element {
    let store = use_stats_store();
    let mut selected_version = use_signal(|| DEFAULT_VERSION.to_string());
    let mut selected_mode = use_signal(|| DistributionMode::Overall);

    let versions = shape::sorted_versions(&store.game_versions());
    let distribution = store.rank_distribution();
    let points =
        shape::shape_rank_distribution(&distribution, &selected_version(), selected_mode());

    let max_pct = points
        .iter()
        .map(|point| point.percentage)
        .fold(0.0_f64, f64::max);
    let bars: Vec<_> = points
        .into_iter()
        .map(|point| {
            let height = if max_pct > 0.0 {
                (point.percentage / max_pct * MAX_BAR_PX).round()
            } else {
                0.0
            };
            (point, height)
        })
        .collect();

    rsx! {
        ChartCard {
            title: "Rank Distribution",
            description: "Showing rank distribution among players",
            selectors: rsx! {
                select {
                    class: "chart-card__select",
                    value: "{selected_version()}",
                    oninput: move |evt| selected_version.set(evt.value()),
                    for version in versions {
                        option { key: "{version}", value: "{version}",
                            {format::version_label(&version)}
                        }
                    }
                }
                select {
                    class: "chart-card__select",
                    value: "{selected_mode().as_key()}",
                    oninput: move |evt| selected_mode.set(DistributionMode::from_key(&evt.value())),
                    option { value: "overall", "Overall" }
                    option { value: "standard", "Standard" }
                }
            },
            if bars.is_empty() {
                div { class: "chart-empty",
                    p { "No data available for this version" }
                }
            } else {
                div { class: "barchart",
                    for (point, height) in bars {
                        div { key: "{point.rank}", class: "barchart__col",
                            span { class: "barchart__value",
                                "{format::format_percent(point.percentage)}"
                            }
                            div {
                                class: "barchart__bar",
                                style: "height: {height}px; background: {point.fill};",
                                title: "{point.rank}: {format::format_percent(point.percentage)}",
                            }
                            span { class: "barchart__label", "{point.rank}" }
                        }
                    }
                }
            }
        }
    }
}
