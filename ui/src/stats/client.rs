//! HTTP client for the backend statistics API.

use thiserror::Error;

use super::types::{Battle, StatisticsSnapshot};

/// Backend the dashboard reads from. Fixed for this layer; the deployment
/// rewrites it at the proxy, not here.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("statistics request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fetch the full statistics snapshot used to hydrate the store.
pub async fn fetch_snapshot(base_url: &str) -> Result<StatisticsSnapshot, ClientError> {
    let snapshot = reqwest::get(format!("{base_url}/statistics/summary"))
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(snapshot)
}

/// Fetch the recorded battles for one player, for the matchup breakdown.
pub async fn fetch_player_battles(
    base_url: &str,
    player: &str,
) -> Result<Vec<Battle>, ClientError> {
    let battles = reqwest::get(format!("{base_url}/player/{player}/battles"))
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(battles)
}
