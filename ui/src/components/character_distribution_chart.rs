//! Matchup breakdown: how often a player's character ran into each opponent.

use dioxus::prelude::*;

use crate::components::ChartCard;
use crate::stats::shape;
use crate::stats::types::Battle;

const MAX_BAR_PX: f64 = 200.0;

#[component]
pub fn CharacterDistributionChart(
    battles: Vec<Battle>,
    selected_character_id: u32,
    player_name: String,
) -> Element {
    let points =
        shape::shape_matchup_distribution(&battles, selected_character_id, &player_name);

    if points.is_empty() {
        return rsx! {
            ChartCard {
                title: "Character Matchup Distribution",
                description: "No matchup data available for this character",
                div { class: "chart-empty",
                    p { "No matches found" }
                }
            }
        };
    }

    let max_matches = points
        .first()
        .map(|point| point.total_matches)
        .unwrap_or(0)
        .max(1);
    let bars: Vec<_> = points
        .into_iter()
        .map(|point| {
            let height =
                (point.total_matches as f64 / max_matches as f64 * MAX_BAR_PX).round();
            (point, height)
        })
        .collect();

    rsx! {
        ChartCard {
            title: "Character Matchup Distribution",
            description: "Total matches played against different characters",
            div { class: "barchart barchart--matchups",
                for (point, height) in bars {
                    div { key: "{point.character_id}", class: "barchart__col",
                        span { class: "barchart__value", "{point.total_matches}" }
                        div {
                            class: "barchart__bar barchart__bar--matchup",
                            style: "height: {height}px;",
                            title: "{point.character_name}: {point.total_matches} matches",
                        }
                        span { class: "barchart__label", "{point.character_name}" }
                    }
                }
            }
        }
    }
}
