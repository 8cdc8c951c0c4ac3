//! One-shot store hydration from the backend snapshot endpoint.

use dioxus::prelude::*;

use crate::core::timing;

use super::client;
use super::store::StatsStore;

/// Floor on how long the loading animation stays visible, so a fast fetch
/// never flashes it for an imperceptible moment.
pub const MIN_LOADING_MS: u64 = 1000;

/// Kick off hydration when the owning view mounts. Fire-and-forget: a fetch
/// or parse failure is logged and recorded, the zeroed defaults stay in
/// place, and the loading flag still clears. The future belongs to the view
/// scope, so unmounting cancels an in-flight fetch instead of leaking a
/// write into a disposed tree.
pub fn use_statistics_hydration(store: StatsStore) {
    use_future(move || async move {
        store.set_loading(true);

        match client::fetch_snapshot(client::DEFAULT_BASE_URL).await {
            Ok(snapshot) => {
                let gaps = snapshot.missing_slices();
                if !gaps.is_empty() {
                    tracing::warn!(slices = ?gaps, "snapshot hydrated with missing slices");
                }
                store.hydrate(snapshot);
                store.set_hydration_error(None);
            }
            Err(err) => {
                tracing::warn!(error = %err, "statistics hydration failed");
                store.set_hydration_error(Some(err.to_string()));
            }
        }

        timing::sleep_ms(MIN_LOADING_MS).await;
        store.set_loading(false);
    });
}
