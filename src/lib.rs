//! # League Rollup
//!
//! Aggregates a League of Legends player's match history into a nested
//! rollup (outcome → champion → role → lane matchup) and renders report views.
//!
//! - **analysis**: the aggregation engine (pure, no I/O)
//! - **api**: Riot API client and match models
//! - **cache** / **store**: raw match cache and saved reports on disk
//! - **rate_limit**: per-player request budget
//! - **display**: terminal report rendering

pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod display;
pub mod error;
pub mod rate_limit;
pub mod store;
