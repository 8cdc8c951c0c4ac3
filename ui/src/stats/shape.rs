//! Pure shapers: raw statistics slices plus view selections in, ordered,
//! colored, domain-scaled chart series out. Nothing here touches signals.

use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

use crate::core::colors;

use super::types::{Battle, DistributionMode, RankDistribution, WinrateChanges};

/// Render-ready rank bucket: label, percentage at two decimals, bar fill.
#[derive(Debug, Clone, PartialEq)]
pub struct RankPoint {
    pub rank: String,
    pub percentage: f64,
    pub fill: &'static str,
}

/// Render-ready signed win-rate delta.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangePoint {
    pub character_id: u32,
    pub change: f64,
    pub fill: &'static str,
}

/// Sorted signed series plus the symmetric axis bounds it should be drawn in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedChanges {
    pub points: Vec<ChangePoint>,
    pub domain: (f64, f64),
}

/// Render-ready matchup tally against one opponent character.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupPoint {
    pub character_name: String,
    pub character_id: u32,
    pub total_matches: u32,
}

/// Shape one (version, mode) rank-distribution series. A pair with no data
/// yields an empty output; the view owns the "no data" placeholder.
pub fn shape_rank_distribution(
    distribution: &RankDistribution,
    version: &str,
    mode: DistributionMode,
) -> Vec<RankPoint> {
    let Some(modes) = distribution.get(version) else {
        return Vec::new();
    };
    modes
        .series(mode)
        .iter()
        .map(|bucket| RankPoint {
            rank: bucket.rank.clone(),
            percentage: round2(bucket.percentage),
            fill: colors::rank_color(&bucket.rank),
        })
        .collect()
}

/// Shape one tier's win-rate changes: apply the trend sign, order largest
/// movers first (stable on ties), and compute the symmetric domain.
pub fn shape_winrate_changes(changes: &WinrateChanges, tier: &str) -> ShapedChanges {
    let Some(series) = changes.get(tier) else {
        return ShapedChanges::default();
    };

    let mut points: Vec<ChangePoint> = series
        .iter()
        .map(|entry| {
            let signed = match entry.trend {
                super::types::Trend::Decrease => -entry.change,
                super::types::Trend::Increase => entry.change,
            };
            ChangePoint {
                character_id: entry.character_id,
                change: signed,
                fill: colors::trend_color(signed),
            }
        })
        .collect();

    // sort_by is stable, so equal magnitudes keep their source order.
    points.sort_by(|a, b| {
        b.change
            .abs()
            .partial_cmp(&a.change.abs())
            .unwrap_or(Ordering::Equal)
    });

    let domain = symmetric_domain(points.iter().map(|point| point.change));
    ShapedChanges { points, domain }
}

/// Symmetric signed-bar domain: magnitude ceiling of the largest absolute
/// value, padded by 10%, mirrored around zero. Empty input pins to (0, 0).
pub fn symmetric_domain(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let max_abs = values.map(f64::abs).fold(0.0_f64, f64::max);
    if max_abs == 0.0 {
        return (0.0, 0.0);
    }
    let bound = max_abs.ceil();
    let padded = bound + bound * 0.1;
    (-padded, padded)
}

/// Tally the focal player's matches with the focal character against each
/// opponent character, largest tally first. Ties keep first-seen order.
pub fn shape_matchup_distribution(
    battles: &[Battle],
    focal_character_id: u32,
    player_name: &str,
) -> Vec<MatchupPoint> {
    let mut tallies: Vec<MatchupPoint> = Vec::new();

    for battle in battles {
        let as_player1 =
            battle.player1_name == player_name && battle.player1_character_id == focal_character_id;
        let as_player2 =
            battle.player2_name == player_name && battle.player2_character_id == focal_character_id;
        if !as_player1 && !as_player2 {
            continue;
        }

        let opponent_id = if as_player1 {
            battle.player2_character_id
        } else {
            battle.player1_character_id
        };

        match tallies
            .iter_mut()
            .find(|point| point.character_id == opponent_id)
        {
            Some(point) => point.total_matches += 1,
            None => tallies.push(MatchupPoint {
                character_name: colors::character_name(opponent_id),
                character_id: opponent_id,
                total_matches: 1,
            }),
        }
    }

    tallies.sort_by(|a, b| b.total_matches.cmp(&a.total_matches));
    tallies
}

/// Version-selector order: descending by numeric value of the identifier.
pub fn sorted_versions(versions: &[String]) -> Vec<String> {
    let mut sorted = versions.to_vec();
    sorted.sort_by_key(|version| Reverse(version.parse::<u64>().unwrap_or(0)));
    sorted
}

/// Highest-valued entry of a per-character series, name-ascending on ties.
pub fn top_entry(series: &HashMap<String, f64>) -> Option<(String, f64)> {
    series
        .iter()
        .max_by(|a, b| {
            a.1.partial_cmp(b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.0.cmp(a.0))
        })
        .map(|(name, value)| (name.clone(), *value))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::types::{ModeDistribution, RankBucket, Trend, WinrateChange};

    fn distribution_with(version: &str, buckets: Vec<RankBucket>) -> RankDistribution {
        let mut distribution = RankDistribution::new();
        distribution.insert(
            version.to_string(),
            ModeDistribution {
                overall: buckets,
                standard: Vec::new(),
            },
        );
        distribution
    }

    fn change(character_id: u32, magnitude: f64, trend: Trend) -> WinrateChange {
        WinrateChange {
            character_id,
            change: magnitude,
            trend,
        }
    }

    #[test]
    fn rank_shaper_rounds_and_colors() {
        let distribution = distribution_with(
            "10801",
            vec![RankBucket {
                rank: "Fighter".to_string(),
                percentage: 12.345,
            }],
        );

        let points =
            shape_rank_distribution(&distribution, "10801", DistributionMode::Overall);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].rank, "Fighter");
        assert_eq!(points[0].percentage, 12.35);
        assert_eq!(points[0].fill, colors::rank_color("Fighter"));
    }

    #[test]
    fn rank_shaper_preserves_length_and_order() {
        let distribution = distribution_with(
            "10801",
            vec![
                RankBucket {
                    rank: "Beginner".to_string(),
                    percentage: 40.0,
                },
                RankBucket {
                    rank: "Fighter".to_string(),
                    percentage: 35.5,
                },
                RankBucket {
                    rank: "Unheard-of Rank".to_string(),
                    percentage: 24.5,
                },
            ],
        );

        let points =
            shape_rank_distribution(&distribution, "10801", DistributionMode::Overall);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].rank, "Beginner");
        assert_eq!(points[2].fill, colors::FALLBACK_RANK_COLOR);
    }

    #[test]
    fn rank_shaper_returns_empty_for_missing_pair() {
        let distribution = distribution_with("10801", Vec::new());
        assert!(
            shape_rank_distribution(&distribution, "10701", DistributionMode::Overall)
                .is_empty()
        );
        assert!(
            shape_rank_distribution(&distribution, "10801", DistributionMode::Standard)
                .is_empty()
        );
    }

    #[test]
    fn winrate_shaper_signs_sorts_and_scales() {
        let mut changes = WinrateChanges::new();
        changes.insert(
            "highRank".to_string(),
            vec![
                change(1, 2.0, Trend::Increase),
                change(2, 5.0, Trend::Decrease),
            ],
        );

        let shaped = shape_winrate_changes(&changes, "highRank");
        let deltas: Vec<_> = shaped.points.iter().map(|p| p.change).collect();
        assert_eq!(deltas, vec![-5.0, 2.0]);
        assert_eq!(shaped.points[0].character_id, 2);
        assert_eq!(shaped.points[0].fill, colors::DECREASE_COLOR);
        assert_eq!(shaped.points[1].fill, colors::INCREASE_COLOR);
        assert_eq!(shaped.domain, (-5.5, 5.5));
    }

    #[test]
    fn winrate_shaper_order_is_non_increasing_by_magnitude() {
        let mut changes = WinrateChanges::new();
        changes.insert(
            "lowRank".to_string(),
            vec![
                change(1, 0.4, Trend::Increase),
                change(2, 3.1, Trend::Decrease),
                change(3, 1.7, Trend::Increase),
                change(4, 3.1, Trend::Increase),
            ],
        );

        let shaped = shape_winrate_changes(&changes, "lowRank");
        let magnitudes: Vec<_> = shaped.points.iter().map(|p| p.change.abs()).collect();
        for pair in magnitudes.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        // Stable sort: the decrease entry came first, so it stays ahead of
        // the equal-magnitude increase.
        assert_eq!(shaped.points[0].character_id, 2);
        assert_eq!(shaped.points[1].character_id, 4);
    }

    #[test]
    fn winrate_domain_is_symmetric_and_covers_the_series() {
        let mut changes = WinrateChanges::new();
        changes.insert(
            "mediumRank".to_string(),
            vec![change(9, 2.4, Trend::Decrease)],
        );

        let shaped = shape_winrate_changes(&changes, "mediumRank");
        assert_eq!(shaped.domain.1, -shaped.domain.0);
        assert!(shaped.domain.1 >= 2.4);
    }

    #[test]
    fn winrate_shaper_handles_missing_tier() {
        let shaped = shape_winrate_changes(&WinrateChanges::new(), "highRank");
        assert!(shaped.points.is_empty());
        assert_eq!(shaped.domain, (0.0, 0.0));
    }

    fn battle(p1: &str, c1: u32, p2: &str, c2: u32) -> Battle {
        Battle {
            player1_name: p1.to_string(),
            player2_name: p2.to_string(),
            player1_character_id: c1,
            player2_character_id: c2,
        }
    }

    #[test]
    fn matchup_shaper_tallies_opponents_from_either_side() {
        let battles = vec![
            battle("ArslanAsh", 8, "Knee", 15),
            battle("Knee", 7, "ArslanAsh", 8),
            battle("ArslanAsh", 8, "Ulsan", 15),
            // Focal player on a different character: not counted.
            battle("ArslanAsh", 21, "Knee", 15),
            // Focal character used by someone else: not counted.
            battle("Knee", 8, "Ulsan", 15),
        ];

        let points = shape_matchup_distribution(&battles, 8, "ArslanAsh");
        let qualifying = 3;
        let total: u32 = points.iter().map(|p| p.total_matches).sum();
        assert_eq!(total, qualifying);
        assert_eq!(points[0].character_name, "Dragunov");
        assert_eq!(points[0].total_matches, 2);
        assert_eq!(points[1].character_name, "Bryan");
    }

    #[test]
    fn matchup_shaper_labels_unknown_ids() {
        let battles = vec![battle("Knee", 8, "Ulsan", 999)];
        let points = shape_matchup_distribution(&battles, 8, "Knee");
        assert_eq!(points[0].character_name, "Character 999");
    }

    #[test]
    fn matchup_shaper_drops_another_players_battle_list() {
        // A battle list can only describe the player it was fetched for;
        // shaping it under a different name must yield nothing rather than
        // the previous player's matchups.
        let battles = vec![
            battle("ArslanAsh", 8, "Knee", 15),
            battle("Knee", 15, "ArslanAsh", 8),
        ];
        assert!(shape_matchup_distribution(&battles, 8, "Ulsan").is_empty());
        assert_eq!(shape_matchup_distribution(&battles, 8, "ArslanAsh").len(), 1);
    }

    #[test]
    fn matchup_shaper_empty_when_no_qualifying_battles() {
        let battles = vec![battle("Knee", 7, "Ulsan", 15)];
        assert!(shape_matchup_distribution(&battles, 8, "ArslanAsh").is_empty());
        assert!(shape_matchup_distribution(&[], 8, "ArslanAsh").is_empty());
    }

    #[test]
    fn versions_sort_descending_numerically() {
        let versions = vec![
            "10701".to_string(),
            "10801".to_string(),
            "9901".to_string(),
        ];
        assert_eq!(
            sorted_versions(&versions),
            vec!["10801".to_string(), "10701".to_string(), "9901".to_string()]
        );
    }

    #[test]
    fn top_entry_breaks_ties_by_name() {
        let mut series = HashMap::new();
        series.insert("Jin".to_string(), 8.4);
        series.insert("Kazuya".to_string(), 8.4);
        series.insert("Paul".to_string(), 3.0);
        assert_eq!(top_entry(&series), Some(("Jin".to_string(), 8.4)));
        assert_eq!(top_entry(&HashMap::new()), None);
    }
}
