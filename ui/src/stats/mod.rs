//! Statistics data layer: wire types, the hydrated store, the backend
//! client, and the pure shapers that turn slices into chart-ready series.

pub mod client;
pub mod hydrate;
pub mod shape;
pub mod store;
pub mod types;

pub use store::{use_stats_store, use_stats_store_provider, StatsStore};
