//! Wire and derived types for the statistics dashboard.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-version rank distribution, keyed by game-version identifier.
pub type RankDistribution = HashMap<String, ModeDistribution>;

/// Per-tier, per-character numeric series (win rates or popularity shares).
pub type TierSeries = HashMap<String, HashMap<String, f64>>;

/// Per-tier win-rate delta series.
pub type WinrateChanges = HashMap<String, Vec<WinrateChange>>;

/// One complete hydration payload from the backend. Every field defaults so
/// a partial payload hydrates what it has and leaves zeroed defaults
/// elsewhere; `missing_slices` reports the gaps for the hydration log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    #[serde(default)]
    pub total_replays: u64,
    #[serde(default)]
    pub total_players: u64,
    #[serde(default)]
    pub game_versions: Vec<String>,
    #[serde(default)]
    pub rank_distribution: RankDistribution,
    #[serde(default)]
    pub character_winrates: TierSeries,
    #[serde(default)]
    pub character_popularity: TierSeries,
    #[serde(default)]
    pub winrate_changes: WinrateChanges,
}

impl StatisticsSnapshot {
    /// Names of slices still at their default after deserialization.
    pub fn missing_slices(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.total_replays == 0 {
            missing.push("totalReplays");
        }
        if self.total_players == 0 {
            missing.push("totalPlayers");
        }
        if self.game_versions.is_empty() {
            missing.push("gameVersions");
        }
        if self.rank_distribution.is_empty() {
            missing.push("rankDistribution");
        }
        if self.character_winrates.is_empty() {
            missing.push("characterWinrates");
        }
        if self.character_popularity.is_empty() {
            missing.push("characterPopularity");
        }
        if self.winrate_changes.is_empty() {
            missing.push("winrateChanges");
        }
        missing
    }
}

/// Rank distribution series for both display modes of one game version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeDistribution {
    #[serde(default)]
    pub overall: Vec<RankBucket>,
    #[serde(default)]
    pub standard: Vec<RankBucket>,
}

impl ModeDistribution {
    pub fn series(&self, mode: DistributionMode) -> &[RankBucket] {
        match mode {
            DistributionMode::Overall => &self.overall,
            DistributionMode::Standard => &self.standard,
        }
    }
}

/// One rank's share of the player base, in percent of 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankBucket {
    pub rank: String,
    pub percentage: f64,
}

/// Which distribution series to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistributionMode {
    #[default]
    Overall,
    Standard,
}

impl DistributionMode {
    pub fn as_key(&self) -> &'static str {
        match self {
            DistributionMode::Overall => "overall",
            DistributionMode::Standard => "standard",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "standard" => DistributionMode::Standard,
            _ => DistributionMode::Overall,
        }
    }
}

/// Direction of a stored win-rate delta. The stored `change` is an unsigned
/// magnitude; the trend decides the displayed sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increase,
    Decrease,
}

/// One character's win-rate movement within a rank tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinrateChange {
    pub character_id: u32,
    /// Unsigned magnitude; see [`Trend`].
    pub change: f64,
    pub trend: Trend,
}

/// One recorded match between two players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub player1_name: String,
    pub player2_name: String,
    pub player1_character_id: u32,
    pub player2_character_id: u32,
}

/// Rank tiers used to key win-rate and popularity series, with display labels.
pub const TIERS: &[(&str, &str)] = &[
    ("highRank", "High rank"),
    ("mediumRank", "Medium rank"),
    ("lowRank", "Low rank"),
];

/// Tier the homepage charts open on.
pub const DEFAULT_TIER: &str = "highRank";

/// Version the rank-distribution chart opens on.
pub const DEFAULT_VERSION: &str = "10801";
