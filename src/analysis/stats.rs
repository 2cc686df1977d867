//! Per-match stats bundles and the rules for merging them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::{self, Category};
use crate::api::models::{MatchDto, MatchInfo, MatchMetadata, ParticipantDto};
use crate::error::StatsError;

pub type FieldMap = BTreeMap<String, f64>;

/// Summed fields plus the number of matches folded in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub games: u32,
    #[serde(flatten)]
    pub fields: FieldMap,
}

impl Aggregate {
    pub fn get(&self, name: &str) -> f64 {
        self.fields.get(name).copied().unwrap_or(0.0)
    }

    /// `games` as a divisor. Zero is an error; callers must check before dividing.
    pub fn divisor(&self) -> Result<f64, StatsError> {
        if self.games == 0 {
            Err(StatsError::DivisionGuard)
        } else {
            Ok(self.games as f64)
        }
    }
}

/// One node's worth of statistics.
///
/// `average` holds raw sums until [`Stats::normalize`] divides them by
/// `aggregate.games`. `min` and `max` hold single-match extremes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub aggregate: Aggregate,
    pub average: FieldMap,
    pub min: FieldMap,
    pub max: FieldMap,
}

impl Stats {
    pub fn games(&self) -> u32 {
        self.aggregate.games
    }

    pub fn average(&self, name: &str) -> f64 {
        self.average.get(name).copied().unwrap_or(0.0)
    }

    /// (kills + assists) / max(1, deaths) over the summed fields.
    pub fn kda(&self) -> f64 {
        kda(
            self.aggregate.get(catalog::KILLS),
            self.aggregate.get(catalog::DEATHS),
            self.aggregate.get(catalog::ASSISTS),
        )
    }

    /// Summed `win` over games. Zero when nothing has been folded.
    pub fn win_rate(&self) -> f64 {
        match self.aggregate.divisor() {
            Ok(games) => self.aggregate.get(catalog::WIN) / games,
            Err(_) => 0.0,
        }
    }

    pub fn merge(&mut self, other: &Stats) {
        self.aggregate.games += other.aggregate.games;
        for (name, value) in &other.aggregate.fields {
            *self.aggregate.fields.entry(name.clone()).or_insert(0.0) += value;
        }
        for (name, value) in &other.average {
            *self.average.entry(name.clone()).or_insert(0.0) += value;
        }
        for (name, value) in &other.min {
            let running = self.min.entry(name.clone()).or_insert(0.0);
            *running = merge_min(*running, *value);
        }
        for (name, value) in &other.max {
            match self.max.get_mut(name) {
                Some(running) => *running = running.max(*value),
                None => {
                    self.max.insert(name.clone(), *value);
                }
            }
        }
    }

    /// Divides every averaged field by this node's game count.
    /// A node with no games is left untouched.
    pub fn normalize(&mut self) {
        let Ok(games) = self.aggregate.divisor() else {
            return;
        };
        for value in self.average.values_mut() {
            *value /= games;
            debug_assert!(value.is_finite(), "normalized average is not finite");
        }
    }
}

pub fn kda(kills: f64, deaths: f64, assists: f64) -> f64 {
    (kills + assists) / deaths.max(1.0)
}

/// Zero means "not observed yet": it never replaces a running value and is
/// always replaced by an incoming one.
pub fn merge_min(running: f64, incoming: f64) -> f64 {
    if running == 0.0 {
        incoming
    } else if incoming == 0.0 {
        running
    } else {
        running.min(incoming)
    }
}

/// One participant's contribution from a single match.
pub fn build_match_stats(info: &MatchInfo, participant: &ParticipantDto) -> Stats {
    let read_all = |category| -> FieldMap {
        catalog::fields(category)
            .iter()
            .map(|field| (field.name.to_string(), field.read(info, participant)))
            .collect()
    };

    let extremes = read_all(Category::MinMax);
    Stats {
        aggregate: Aggregate {
            games: 1,
            fields: read_all(Category::Sum),
        },
        average: read_all(Category::Average),
        min: extremes.clone(),
        max: extremes,
    }
}

/// A match record whose required parts have been checked.
#[derive(Debug, Clone, Copy)]
pub struct MatchView<'a> {
    pub match_id: &'a str,
    pub metadata: &'a MatchMetadata,
    pub info: &'a MatchInfo,
}

impl<'a> MatchView<'a> {
    pub fn new(game: &'a MatchDto) -> Result<Self, StatsError> {
        let match_id = game.match_id();
        let metadata = game
            .metadata
            .as_ref()
            .ok_or_else(|| StatsError::malformed(match_id, "missing metadata"))?;
        let info = game
            .info
            .as_ref()
            .ok_or_else(|| StatsError::malformed(match_id, "missing info"))?;

        if info.participants.is_empty() {
            return Err(StatsError::malformed(match_id, "no participants"));
        }
        if metadata.participants.len() != info.participants.len() {
            return Err(StatsError::malformed(
                match_id,
                format!(
                    "{} participant ids but {} participant records",
                    metadata.participants.len(),
                    info.participants.len()
                ),
            ));
        }

        Ok(MatchView {
            match_id,
            metadata,
            info,
        })
    }

    /// The participant record for `puuid`, located through the metadata id list.
    pub fn participant(&self, puuid: &str) -> Result<&'a ParticipantDto, StatsError> {
        self.metadata
            .participants
            .iter()
            .position(|id| id == puuid)
            .and_then(|idx| self.info.participants.get(idx))
            .ok_or_else(|| StatsError::PlayerNotFound {
                match_id: self.match_id.to_string(),
            })
    }
}
