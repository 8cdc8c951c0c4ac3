//! Headline cards under the hero: totals plus high-rank highlights.

use dioxus::prelude::*;

use crate::core::format;
use crate::stats::shape;
use crate::stats::types::DEFAULT_TIER;
use crate::stats::use_stats_store;

#[component]
pub fn StatsGrid() -> Element {
    let store = use_stats_store();

    let winrates = store.character_winrates();
    let popularity = store.character_popularity();
    let top_winrate = winrates.get(DEFAULT_TIER).and_then(shape::top_entry);
    let top_popularity = popularity.get(DEFAULT_TIER).and_then(shape::top_entry);

    rsx! {
        section { class: "stats-grid",
            StatCard {
                label: "Total replays",
                value: format::format_compact(store.total_replays()),
                meta: "Ranked matches analyzed",
            }
            StatCard {
                label: "Total players",
                value: format::format_compact(store.total_players()),
                meta: "Unique competitors tracked",
            }
            if let Some((name, value)) = top_winrate {
                StatCard {
                    label: "Top win rate (high rank)",
                    value: name,
                    meta: format::format_percent(value),
                }
            }
            if let Some((name, value)) = top_popularity {
                StatCard {
                    label: "Most played (high rank)",
                    value: name,
                    meta: format::format_percent(value),
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String, meta: String) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-card__label", "{label}" }
            strong { class: "stat-card__value", "{value}" }
            span { class: "stat-card__meta", "{meta}" }
        }
    }
}
