#![cfg(test)]
//! End-to-end check of the hydration payload: a realistic backend snapshot
//! must deserialize and flow through every shaper without surprises.

use ui::core::colors;
use ui::stats::shape;
use ui::stats::types::{DistributionMode, StatisticsSnapshot};

const SNAPSHOT_JSON: &str = r##"{
    "totalReplays": 2340000,
    "totalPlayers": 48213,
    "gameVersions": ["10701", "10801"],
    "rankDistribution": {
        "10801": {
            "overall": [
                {"rank": "Beginner", "percentage": 8.101},
                {"rank": "Fighter", "percentage": 12.345},
                {"rank": "Garyu", "percentage": 9.874},
                {"rank": "Tekken God", "percentage": 0.42}
            ],
            "standard": [
                {"rank": "Fighter", "percentage": 14.005}
            ]
        },
        "10701": {
            "overall": [],
            "standard": []
        }
    },
    "characterWinrates": {
        "highRank": {"Kazuya": 52.13, "Jin": 50.87}
    },
    "characterPopularity": {
        "highRank": {"Jin": 8.41, "Kazuya": 7.92}
    },
    "winrateChanges": {
        "highRank": [
            {"characterId": 1, "change": 2.0, "trend": "increase"},
            {"characterId": 2, "change": 5.0, "trend": "decrease"},
            {"characterId": 8, "change": 0.3, "trend": "increase"}
        ]
    }
}"##;

fn snapshot() -> StatisticsSnapshot {
    serde_json::from_str(SNAPSHOT_JSON).expect("snapshot fixture should parse")
}

#[test]
fn snapshot_is_complete() {
    assert!(snapshot().missing_slices().is_empty());
}

#[test]
fn rank_pipeline_shapes_the_selected_version() {
    let snapshot = snapshot();
    let points = shape::shape_rank_distribution(
        &snapshot.rank_distribution,
        "10801",
        DistributionMode::Overall,
    );

    assert_eq!(points.len(), 4);
    assert_eq!(points[1].rank, "Fighter");
    assert_eq!(points[1].percentage, 12.35);
    assert_ne!(points[1].fill, colors::FALLBACK_RANK_COLOR);

    // The previous version shipped empty series: explicit empty output.
    let previous = shape::shape_rank_distribution(
        &snapshot.rank_distribution,
        "10701",
        DistributionMode::Overall,
    );
    assert!(previous.is_empty());
}

#[test]
fn winrate_pipeline_orders_movers_and_scales_the_axis() {
    let snapshot = snapshot();
    let shaped = shape::shape_winrate_changes(&snapshot.winrate_changes, "highRank");

    let deltas: Vec<_> = shaped.points.iter().map(|p| p.change).collect();
    assert_eq!(deltas, vec![-5.0, 2.0, 0.3]);
    assert_eq!(shaped.domain, (-5.5, 5.5));
}

#[test]
fn version_selector_order_is_newest_first() {
    let snapshot = snapshot();
    let versions = shape::sorted_versions(&snapshot.game_versions);
    assert_eq!(versions, vec!["10801".to_string(), "10701".to_string()]);
}

#[test]
fn grid_highlights_come_from_the_high_rank_slices() {
    let snapshot = snapshot();
    let top_winrate = snapshot
        .character_winrates
        .get("highRank")
        .and_then(shape::top_entry);
    let top_popularity = snapshot
        .character_popularity
        .get("highRank")
        .and_then(shape::top_entry);

    assert_eq!(top_winrate, Some(("Kazuya".to_string(), 52.13)));
    assert_eq!(top_popularity, Some(("Jin".to_string(), 8.41)));
}
