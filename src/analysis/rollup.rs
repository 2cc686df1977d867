//! Four-level rollup: outcome → champion → role → lane opponent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

use super::opponent::find_lane_opponent;
use super::role::Role;
use super::stats::{build_match_stats, MatchView, Stats};
use crate::api::models::MatchDto;
use crate::error::StatsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Wins,
    Losses,
}

impl Outcome {
    pub fn from_win(win: bool) -> Self {
        if win {
            Outcome::Wins
        } else {
            Outcome::Losses
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Wins => write!(f, "wins"),
            Outcome::Losses => write!(f, "losses"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummonerEntry {
    pub wins: OutcomeEntry,
    pub losses: OutcomeEntry,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeEntry {
    pub stats: Stats,
    pub champion: BTreeMap<String, ChampionEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChampionEntry {
    pub stats: Stats,
    pub position: BTreeMap<Role, PositionEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub stats: Stats,
    pub matchup: BTreeMap<String, MatchupEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub player: Stats,
    pub opponent: Stats,
}

/// What a successful fold touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldedMatch {
    pub outcome: Outcome,
    pub matchup: bool,
}

impl SummonerEntry {
    pub fn outcome(&self, outcome: Outcome) -> &OutcomeEntry {
        match outcome {
            Outcome::Wins => &self.wins,
            Outcome::Losses => &self.losses,
        }
    }

    fn outcome_mut(&mut self, outcome: Outcome) -> &mut OutcomeEntry {
        match outcome {
            Outcome::Wins => &mut self.wins,
            Outcome::Losses => &mut self.losses,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins.stats.games() + self.losses.stats.games()
    }

    /// Folds one match into the tree.
    ///
    /// A malformed match or one without `puuid` is rejected before anything
    /// is touched. A missing lane opponent only drops the matchup level.
    pub fn fold_match(&mut self, game: &MatchDto, puuid: &str) -> Result<FoldedMatch, StatsError> {
        let view = MatchView::new(game)?;
        let player = view.participant(puuid)?;

        let opponent = match find_lane_opponent(puuid, &view) {
            Ok(opponent) => Some(opponent),
            Err(err) => {
                warn!(match_id = view.match_id, error = %err, "folding without matchup");
                None
            }
        };

        let outcome = Outcome::from_win(player.win);
        let role = Role::of(player);
        let player_stats = build_match_stats(view.info, player);

        let bucket = self.outcome_mut(outcome);
        bucket.stats.merge(&player_stats);

        let champion = bucket
            .champion
            .entry(player.champion_name.clone())
            .or_default();
        champion.stats.merge(&player_stats);

        let position = champion.position.entry(role).or_default();
        position.stats.merge(&player_stats);

        if let Some(opponent) = opponent {
            let matchup = position
                .matchup
                .entry(opponent.champion_name.clone())
                .or_default();
            matchup.player.merge(&player_stats);
            matchup.opponent.merge(&build_match_stats(view.info, opponent));
        }

        debug!(
            match_id = view.match_id,
            %outcome,
            champion = %player.champion_name,
            %role,
            "folded match"
        );

        Ok(FoldedMatch {
            outcome,
            matchup: opponent.is_some(),
        })
    }

    /// Turns every averaged sum into a per-game value. Call exactly once.
    pub fn normalize(&mut self) {
        for bucket in [&mut self.wins, &mut self.losses] {
            bucket.stats.normalize();
            for champion in bucket.champion.values_mut() {
                champion.stats.normalize();
                for position in champion.position.values_mut() {
                    position.stats.normalize();
                    for matchup in position.matchup.values_mut() {
                        matchup.player.normalize();
                        matchup.opponent.normalize();
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedMatch {
    pub match_id: String,
    pub reason: String,
}

/// Which requested matches made it into the tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoldReport {
    pub folded: Vec<String>,
    pub skipped: Vec<SkippedMatch>,
    /// Folded, but without a lane opponent.
    pub without_matchup: Vec<String>,
}

impl FoldReport {
    pub fn requested(&self) -> usize {
        self.folded.len() + self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Accumulates one player's matches. One builder per analysis.
#[derive(Debug)]
pub struct RollupBuilder {
    puuid: String,
    tree: SummonerEntry,
    report: FoldReport,
}

impl RollupBuilder {
    pub fn new(puuid: impl Into<String>) -> Self {
        RollupBuilder {
            puuid: puuid.into(),
            tree: SummonerEntry::default(),
            report: FoldReport::default(),
        }
    }

    pub fn fold(&mut self, game: &MatchDto) {
        let match_id = game.match_id().to_string();
        match self.tree.fold_match(game, &self.puuid) {
            Ok(folded) => {
                if !folded.matchup {
                    self.report.without_matchup.push(match_id.clone());
                }
                self.report.folded.push(match_id);
            }
            Err(err) => self.skip(match_id, err),
        }
    }

    /// Records a match that never reached the engine (fetch or decode failure).
    pub fn skip(&mut self, match_id: impl Into<String>, reason: impl fmt::Display) {
        let match_id = match_id.into();
        let reason = reason.to_string();
        warn!(match_id = %match_id, %reason, "skipping match");
        self.report.skipped.push(SkippedMatch { match_id, reason });
    }

    pub fn report(&self) -> &FoldReport {
        &self.report
    }

    pub fn finish(mut self) -> Rollup {
        self.tree.normalize();
        Rollup {
            puuid: self.puuid,
            tree: self.tree,
            report: self.report,
        }
    }
}

/// A normalized, read-only rollup and the record of how it was built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollup {
    pub puuid: String,
    pub tree: SummonerEntry,
    pub report: FoldReport,
}

pub fn fold_matches<'a>(puuid: &str, games: impl IntoIterator<Item = &'a MatchDto>) -> Rollup {
    let mut builder = RollupBuilder::new(puuid);
    for game in games {
        builder.fold(game);
    }
    builder.finish()
}
