//! Page-session statistics store. One typed container of per-slice signals,
//! provided once at the app root and hydrated once from the backend.

use dioxus::prelude::*;

use super::types::{RankDistribution, StatisticsSnapshot, TierSeries, WinrateChanges};

/// Shared, read-mostly statistics state. Each slice is its own signal so a
/// view only re-renders for the slices it reads. Copyable by design: every
/// handle points at the same signals.
#[derive(Clone, Copy)]
pub struct StatsStore {
    total_replays: Signal<u64>,
    total_players: Signal<u64>,
    game_versions: Signal<Vec<String>>,
    rank_distribution: Signal<RankDistribution>,
    character_winrates: Signal<TierSeries>,
    character_popularity: Signal<TierSeries>,
    winrate_changes: Signal<WinrateChanges>,
    is_loading: Signal<bool>,
    hydration_error: Signal<Option<String>>,
}

/// Provide an empty store to the component tree. Call once, in the shell.
pub fn use_stats_store_provider() -> StatsStore {
    use_context_provider(|| StatsStore {
        total_replays: Signal::new(0),
        total_players: Signal::new(0),
        game_versions: Signal::new(Vec::new()),
        rank_distribution: Signal::new(RankDistribution::new()),
        character_winrates: Signal::new(TierSeries::new()),
        character_popularity: Signal::new(TierSeries::new()),
        winrate_changes: Signal::new(WinrateChanges::new()),
        is_loading: Signal::new(true),
        hydration_error: Signal::new(None),
    })
}

/// Grab the store provided by the shell.
pub fn use_stats_store() -> StatsStore {
    use_context()
}

impl StatsStore {
    pub fn total_replays(&self) -> u64 {
        (self.total_replays)()
    }

    pub fn total_players(&self) -> u64 {
        (self.total_players)()
    }

    pub fn game_versions(&self) -> Vec<String> {
        (self.game_versions)()
    }

    pub fn rank_distribution(&self) -> RankDistribution {
        (self.rank_distribution)()
    }

    pub fn character_winrates(&self) -> TierSeries {
        (self.character_winrates)()
    }

    pub fn character_popularity(&self) -> TierSeries {
        (self.character_popularity)()
    }

    pub fn winrate_changes(&self) -> WinrateChanges {
        (self.winrate_changes)()
    }

    pub fn is_loading(&self) -> bool {
        (self.is_loading)()
    }

    pub fn hydration_error(&self) -> Option<String> {
        (self.hydration_error)()
    }

    /// Write all seven slices from one snapshot. Each slice is replaced
    /// whole; there are no partial-slice updates.
    pub fn hydrate(mut self, snapshot: StatisticsSnapshot) {
        self.total_replays.set(snapshot.total_replays);
        self.total_players.set(snapshot.total_players);
        self.game_versions.set(snapshot.game_versions);
        self.rank_distribution.set(snapshot.rank_distribution);
        self.character_winrates.set(snapshot.character_winrates);
        self.character_popularity.set(snapshot.character_popularity);
        self.winrate_changes.set(snapshot.winrate_changes);
    }

    pub fn set_loading(mut self, loading: bool) {
        self.is_loading.set(loading);
    }

    pub fn set_hydration_error(mut self, error: Option<String>) {
        self.hydration_error.set(error);
    }
}
