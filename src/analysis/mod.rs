//! Match-statistics aggregation.
//!
//! - **catalog**: which raw fields are summed, averaged or min/max tracked
//! - **stats**: one match's contribution and the merge rules
//! - **opponent**: lane-opponent lookup
//! - **rollup**: the outcome → champion → role → matchup tree and fold loop
//! - **views**: read-only queries over a finished tree

pub mod catalog;
pub mod opponent;
pub mod role;
pub mod rollup;
pub mod stats;
pub mod views;

pub use role::Role;
pub use rollup::{fold_matches, FoldReport, Outcome, Rollup, RollupBuilder, SummonerEntry};
pub use stats::{build_match_stats, Stats};
