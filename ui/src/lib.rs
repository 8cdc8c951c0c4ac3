//! Shared UI crate for the ewgf statistics dashboard. Chart shaping, the
//! hydrated statistics store, and cross-platform views live here.

pub mod components;
pub mod core;
pub mod stats;
pub mod views;
