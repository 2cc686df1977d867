//! Read-only queries over a normalized rollup tree.
//!
//! Several views walk only the win bucket. Their "win rate" is therefore the
//! share of wins among games that are all wins by construction; the numbers
//! are kept this way to match the dashboard they feed. [`head_to_head`]
//! combines both buckets when a true record is needed.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::catalog::{self, MIN_MAX_FIELDS};
use super::role::Role;
use super::rollup::{Outcome, SummonerEntry};
use super::stats::Stats;

/// Matchups and positions with fewer games are not ranked.
pub const MIN_SAMPLE_GAMES: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionSummary {
    pub name: String,
    pub games: u32,
    pub kda: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupSummary {
    pub role: Role,
    pub champion: String,
    pub opponent: String,
    pub games: u32,
    pub win_rate: f64,
    pub kda: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionHighlight {
    pub name: String,
    pub games: u32,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub kda: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePlayed {
    pub games: u32,
    pub total_hours: f64,
    pub average_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionVision {
    pub role: Role,
    pub games: u32,
    pub vision_score: f64,
    pub wards_placed: f64,
    pub wards_killed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSummary {
    pub role: Role,
    pub games: u32,
    pub win_rate: f64,
    pub kda: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveSummary {
    pub games: u32,
    pub dragons: f64,
    pub barons: f64,
    pub heralds: f64,
    pub turrets: f64,
    pub inhibitors: f64,
}

impl ObjectiveSummary {
    pub fn per_game(&self, total: f64) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            total / self.games as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerHigh {
    pub field: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub wins: u32,
    pub losses: u32,
}

impl HeadToHead {
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn win_rate(&self) -> Option<f64> {
        match self.games() {
            0 => None,
            games => Some(self.wins as f64 / games as f64),
        }
    }
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// The `n` most played champions in one bucket. Ties go to the alphabetically
/// first name.
pub fn top_champions_by_games(tree: &SummonerEntry, outcome: Outcome, n: usize) -> Vec<ChampionSummary> {
    let mut champions: Vec<ChampionSummary> = tree
        .outcome(outcome)
        .champion
        .iter()
        .filter(|(_, entry)| entry.stats.games() > 0)
        .map(|(name, entry)| ChampionSummary {
            name: name.clone(),
            games: entry.stats.games(),
            kda: entry.stats.kda(),
        })
        .collect();

    champions.sort_by(|a, b| b.games.cmp(&a.games).then_with(|| a.name.cmp(&b.name)));
    champions.truncate(n);
    champions
}

/// Per role, the matchup with the best win rate among those with at least
/// [`MIN_SAMPLE_GAMES`] games. Walks the win bucket only.
pub fn best_matchup_per_role(tree: &SummonerEntry) -> Vec<MatchupSummary> {
    let mut best: BTreeMap<Role, MatchupSummary> = BTreeMap::new();

    for (champion, champion_entry) in &tree.wins.champion {
        for (role, position) in &champion_entry.position {
            for (opponent, matchup) in &position.matchup {
                let games = matchup.player.games();
                if games < MIN_SAMPLE_GAMES {
                    continue;
                }
                let candidate = MatchupSummary {
                    role: *role,
                    champion: champion.clone(),
                    opponent: opponent.clone(),
                    games,
                    win_rate: matchup.player.win_rate(),
                    kda: matchup.player.kda(),
                };

                let replace = match best.get(role) {
                    None => true,
                    Some(current) => by_score_desc(candidate.win_rate, current.win_rate)
                        .then_with(|| current.games.cmp(&candidate.games))
                        == Ordering::Less,
                };
                if replace {
                    best.insert(*role, candidate);
                }
            }
        }
    }

    best.into_values().collect()
}

/// Champion with the highest aggregate KDA in the win bucket.
///
/// This is a per-champion proxy, not a single game's line.
pub fn best_single_match(tree: &SummonerEntry) -> Option<ChampionHighlight> {
    tree.wins
        .champion
        .iter()
        .filter(|(_, entry)| entry.stats.games() > 0)
        .map(|(name, entry)| {
            let totals = &entry.stats.aggregate;
            ChampionHighlight {
                name: name.clone(),
                games: entry.stats.games(),
                kills: totals.get(catalog::KILLS),
                deaths: totals.get(catalog::DEATHS),
                assists: totals.get(catalog::ASSISTS),
                kda: entry.stats.kda(),
            }
        })
        // min_by on reversed order keeps the alphabetically first champion on ties
        .min_by(|a, b| by_score_desc(a.kda, b.kda))
}

/// Time spent in the win bucket's games.
pub fn total_time_played(tree: &SummonerEntry) -> Option<TimePlayed> {
    let stats = &tree.wins.stats;
    let games = stats.aggregate.divisor().ok()?;
    let seconds = stats.aggregate.get(catalog::GAME_DURATION);

    Some(TimePlayed {
        games: stats.games(),
        total_hours: seconds / 3600.0,
        average_minutes: seconds / games / 60.0,
    })
}

/// Vision totals per role, summed over every champion in the win bucket.
pub fn position_vision_breakdown(tree: &SummonerEntry) -> Vec<PositionVision> {
    let mut by_role: BTreeMap<Role, PositionVision> = BTreeMap::new();

    for champion in tree.wins.champion.values() {
        for (role, position) in &champion.position {
            let totals = &position.stats.aggregate;
            let row = by_role.entry(*role).or_insert(PositionVision {
                role: *role,
                games: 0,
                vision_score: 0.0,
                wards_placed: 0.0,
                wards_killed: 0.0,
            });
            row.games += totals.games;
            row.vision_score += totals.get(catalog::VISION_SCORE);
            row.wards_placed += totals.get(catalog::WARDS_PLACED);
            row.wards_killed += totals.get(catalog::WARDS_KILLED);
        }
    }

    by_role.into_values().filter(|row| row.games > 0).collect()
}

/// Role with the best win rate in the win bucket, at least
/// [`MIN_SAMPLE_GAMES`] games. Ties go to the role with more games.
pub fn best_position(tree: &SummonerEntry) -> Option<PositionSummary> {
    let mut by_role: BTreeMap<Role, Stats> = BTreeMap::new();
    for champion in tree.wins.champion.values() {
        for (role, position) in &champion.position {
            by_role.entry(*role).or_default().merge(&position.stats);
        }
    }

    by_role
        .into_iter()
        .filter(|(_, stats)| stats.games() >= MIN_SAMPLE_GAMES)
        .map(|(role, stats)| PositionSummary {
            role,
            games: stats.games(),
            win_rate: stats.win_rate(),
            kda: stats.kda(),
        })
        .min_by(|a, b| by_score_desc(a.win_rate, b.win_rate).then_with(|| b.games.cmp(&a.games)))
}

pub fn objective_summary(tree: &SummonerEntry, outcome: Outcome) -> Option<ObjectiveSummary> {
    let stats = &tree.outcome(outcome).stats;
    if stats.games() == 0 {
        return None;
    }
    let totals = &stats.aggregate;

    Some(ObjectiveSummary {
        games: stats.games(),
        dragons: totals.get(catalog::DRAGON_KILLS),
        barons: totals.get(catalog::BARON_KILLS),
        heralds: totals.get(catalog::HERALD_TAKEDOWNS),
        turrets: totals.get(catalog::TURRET_TAKEDOWNS),
        inhibitors: totals.get(catalog::INHIBITOR_TAKEDOWNS),
    })
}

/// Highest single-match value of every min/max-tracked field across both buckets.
pub fn career_highs(tree: &SummonerEntry) -> Vec<CareerHigh> {
    if tree.total_games() == 0 {
        return Vec::new();
    }

    MIN_MAX_FIELDS
        .iter()
        .filter_map(|field| {
            let best = [&tree.wins.stats, &tree.losses.stats]
                .iter()
                .filter_map(|stats| stats.max.get(field.name).copied())
                .reduce(f64::max)?;
            Some(CareerHigh {
                field: field.name,
                value: best,
            })
        })
        .collect()
}

/// Record of `champion` against `opponent` over both buckets and every role.
pub fn head_to_head(tree: &SummonerEntry, champion: &str, opponent: &str) -> HeadToHead {
    let games_in = |outcome: Outcome| -> u32 {
        tree.outcome(outcome)
            .champion
            .get(champion)
            .map(|entry| {
                entry
                    .position
                    .values()
                    .filter_map(|position| position.matchup.get(opponent))
                    .map(|matchup| matchup.player.games())
                    .sum()
            })
            .unwrap_or(0)
    };

    HeadToHead {
        wins: games_in(Outcome::Wins),
        losses: games_in(Outcome::Losses),
    }
}
