//! Diverging bar chart of win-rate movement per character, by rank tier.

use dioxus::prelude::*;

use crate::components::ChartCard;
use crate::core::{colors, format};
use crate::stats::shape;
use crate::stats::types::{DEFAULT_TIER, TIERS};
use crate::stats::use_stats_store;

#[component]
pub fn WinrateChangesChart() -> Element {
    let store = use_stats_store();
    let mut selected_tier = use_signal(|| DEFAULT_TIER.to_string());

    let changes = store.winrate_changes();
    let shaped = shape::shape_winrate_changes(&changes, &selected_tier());
    let (domain_min, domain_max) = shaped.domain;

    // Bar geometry against the symmetric domain: each side of the zero line
    // owns 50% of the track.
    let rows: Vec<_> = shaped
        .points
        .into_iter()
        .map(|point| {
            let half = if domain_max > 0.0 {
                point.change.abs() / domain_max * 50.0
            } else {
                0.0
            };
            let left = if point.change < 0.0 { 50.0 - half } else { 50.0 };
            (point, left, half)
        })
        .collect();

    rsx! {
        ChartCard {
            title: "Win Rate Changes",
            description: "Biggest movers since the previous game version",
            selectors: rsx! {
                select {
                    class: "chart-card__select",
                    value: "{selected_tier()}",
                    oninput: move |evt| selected_tier.set(evt.value()),
                    for (key, label) in TIERS.iter().copied() {
                        option { key: "{key}", value: "{key}", "{label}" }
                    }
                }
            },
            if rows.is_empty() {
                div { class: "chart-empty",
                    p { "No win rate changes recorded for this rank" }
                }
            } else {
                div { class: "divergent",
                    for (point, left, half) in rows {
                        div { key: "{point.character_id}", class: "divergent__row",
                            span { class: "divergent__name",
                                "{colors::character_name(point.character_id)}"
                            }
                            div { class: "divergent__track",
                                div { class: "divergent__zero" }
                                div {
                                    class: "divergent__bar",
                                    style: "left: {left:.2}%; width: {half:.2}%; background: {point.fill};",
                                    title: "{format::format_signed_percent(point.change)}",
                                }
                            }
                            span { class: "divergent__delta",
                                "{format::format_signed_percent(point.change)}"
                            }
                        }
                    }
                    div { class: "divergent__axis",
                        span { "{format::format_signed_percent_1dp(domain_min)}" }
                        span { "0.0%" }
                        span { "{format::format_signed_percent_1dp(domain_max)}" }
                    }
                }
            }
        }
    }
}
