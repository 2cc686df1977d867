//! Field catalog: which raw per-match values feed which rollup category.
//!
//! Each entry pairs the JSON name a value is reported under with a typed
//! accessor into exactly one source record. The tables are plain `static`
//! data and are never mutated.

use std::fmt;

use crate::api::models::{ChallengesDto, MatchInfo, ParticipantDto};

/// Where a field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Participant,
    Info,
    Challenges,
}

/// How a field is folded across matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sum,
    Average,
    MinMax,
}

#[derive(Clone, Copy)]
pub enum Accessor {
    Participant(fn(&ParticipantDto) -> f64),
    Info(fn(&MatchInfo) -> f64),
    Challenges(fn(&ChallengesDto) -> Option<f64>),
}

#[derive(Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub accessor: Accessor,
}

impl Field {
    const fn participant(name: &'static str, read: fn(&ParticipantDto) -> f64) -> Self {
        Field {
            name,
            accessor: Accessor::Participant(read),
        }
    }

    const fn info(name: &'static str, read: fn(&MatchInfo) -> f64) -> Self {
        Field {
            name,
            accessor: Accessor::Info(read),
        }
    }

    const fn challenge(name: &'static str, read: fn(&ChallengesDto) -> Option<f64>) -> Self {
        Field {
            name,
            accessor: Accessor::Challenges(read),
        }
    }

    pub fn source(&self) -> Source {
        match self.accessor {
            Accessor::Participant(_) => Source::Participant,
            Accessor::Info(_) => Source::Info,
            Accessor::Challenges(_) => Source::Challenges,
        }
    }

    /// Reads this field for one participant. Absent challenge metrics read as 0.
    pub fn read(&self, info: &MatchInfo, participant: &ParticipantDto) -> f64 {
        match self.accessor {
            Accessor::Participant(read) => read(participant),
            Accessor::Info(read) => read(info),
            Accessor::Challenges(read) => participant
                .challenges
                .as_ref()
                .and_then(read)
                .unwrap_or(0.0),
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("source", &self.source())
            .finish()
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

// Names the extractors look up directly.
pub const WIN: &str = "win";
pub const KILLS: &str = "kills";
pub const DEATHS: &str = "deaths";
pub const ASSISTS: &str = "assists";
pub const GAME_DURATION: &str = "gameDuration";
pub const VISION_SCORE: &str = "visionScore";
pub const WARDS_PLACED: &str = "wardsPlaced";
pub const WARDS_KILLED: &str = "wardsKilled";
pub const DRAGON_KILLS: &str = "dragonKills";
pub const BARON_KILLS: &str = "baronKills";
pub const HERALD_TAKEDOWNS: &str = "riftHeraldTakedowns";
pub const TURRET_TAKEDOWNS: &str = "turretTakedowns";
pub const INHIBITOR_TAKEDOWNS: &str = "inhibitorTakedowns";

pub static SUM_FIELDS: &[Field] = &[
    Field::participant(WIN, |p: &ParticipantDto| flag(p.win)),
    Field::participant(KILLS, |p: &ParticipantDto| p.kills as f64),
    Field::participant(DEATHS, |p: &ParticipantDto| p.deaths as f64),
    Field::participant(ASSISTS, |p: &ParticipantDto| p.assists as f64),
    Field::participant("doubleKills", |p: &ParticipantDto| p.double_kills as f64),
    Field::participant("tripleKills", |p: &ParticipantDto| p.triple_kills as f64),
    Field::participant("quadraKills", |p: &ParticipantDto| p.quadra_kills as f64),
    Field::participant("pentaKills", |p: &ParticipantDto| p.penta_kills as f64),
    Field::participant("firstBloodKill", |p: &ParticipantDto| flag(p.first_blood_kill)),
    Field::participant("totalDamageDealtToChampions", |p: &ParticipantDto| {
        p.total_damage_dealt_to_champions as f64
    }),
    Field::participant("totalDamageTaken", |p: &ParticipantDto| p.total_damage_taken as f64),
    Field::participant("damageDealtToObjectives", |p: &ParticipantDto| {
        p.damage_dealt_to_objectives as f64
    }),
    Field::participant("goldEarned", |p: &ParticipantDto| p.gold_earned as f64),
    Field::participant("totalMinionsKilled", |p: &ParticipantDto| p.total_minions_killed as f64),
    Field::participant("neutralMinionsKilled", |p: &ParticipantDto| {
        p.neutral_minions_killed as f64
    }),
    Field::participant("timeCCingOthers", |p: &ParticipantDto| p.time_ccing_others as f64),
    Field::participant(VISION_SCORE, |p: &ParticipantDto| p.vision_score as f64),
    Field::participant(WARDS_PLACED, |p: &ParticipantDto| p.wards_placed as f64),
    Field::participant(WARDS_KILLED, |p: &ParticipantDto| p.wards_killed as f64),
    Field::participant("visionWardsBoughtInGame", |p: &ParticipantDto| {
        p.vision_wards_bought_in_game as f64
    }),
    Field::participant(DRAGON_KILLS, |p: &ParticipantDto| p.dragon_kills as f64),
    Field::participant(BARON_KILLS, |p: &ParticipantDto| p.baron_kills as f64),
    Field::participant(TURRET_TAKEDOWNS, |p: &ParticipantDto| p.turret_takedowns as f64),
    Field::participant(INHIBITOR_TAKEDOWNS, |p: &ParticipantDto| p.inhibitor_takedowns as f64),
    Field::info(GAME_DURATION, |i: &MatchInfo| i.game_duration as f64),
    Field::challenge("soloKills", |c: &ChallengesDto| c.solo_kills),
    Field::challenge("skillshotsDodged", |c: &ChallengesDto| c.skillshots_dodged),
    Field::challenge("epicMonsterSteals", |c: &ChallengesDto| c.epic_monster_steals),
    Field::challenge(HERALD_TAKEDOWNS, |c: &ChallengesDto| c.rift_herald_takedowns),
    Field::challenge("dragonTakedowns", |c: &ChallengesDto| c.dragon_takedowns),
    Field::challenge("baronTakedowns", |c: &ChallengesDto| c.baron_takedowns),
    Field::challenge("controlWardsPlaced", |c: &ChallengesDto| c.control_wards_placed),
];

/// Summed while folding, divided by games once at normalization.
pub static AVERAGE_FIELDS: &[Field] = &[
    Field::participant("champLevel", |p: &ParticipantDto| p.champ_level as f64),
    Field::challenge("kda", |c: &ChallengesDto| c.kda),
    Field::challenge("killParticipation", |c: &ChallengesDto| c.kill_participation),
    Field::challenge("damagePerMinute", |c: &ChallengesDto| c.damage_per_minute),
    Field::challenge("goldPerMinute", |c: &ChallengesDto| c.gold_per_minute),
    Field::challenge("visionScorePerMinute", |c: &ChallengesDto| c.vision_score_per_minute),
    Field::challenge("teamDamagePercentage", |c: &ChallengesDto| c.team_damage_percentage),
    Field::challenge("laneMinionsFirst10Minutes", |c: &ChallengesDto| {
        c.lane_minions_first10_minutes
    }),
    Field::challenge("gameLength", |c: &ChallengesDto| c.game_length),
];

pub static MIN_MAX_FIELDS: &[Field] = &[
    Field::participant("largestKillingSpree", |p: &ParticipantDto| p.largest_killing_spree as f64),
    Field::participant("largestMultiKill", |p: &ParticipantDto| p.largest_multi_kill as f64),
    Field::participant("largestCriticalStrike", |p: &ParticipantDto| {
        p.largest_critical_strike as f64
    }),
    Field::participant("longestTimeSpentLiving", |p: &ParticipantDto| {
        p.longest_time_spent_living as f64
    }),
    Field::participant("totalTimeSpentDead", |p: &ParticipantDto| p.total_time_spent_dead as f64),
    Field::challenge("earliestDragonTakedown", |c: &ChallengesDto| c.earliest_dragon_takedown),
    Field::challenge("earliestBaron", |c: &ChallengesDto| c.earliest_baron),
    Field::challenge("firstTurretKilledTime", |c: &ChallengesDto| c.first_turret_killed_time),
    Field::challenge("maxCsAdvantageOnLaneOpponent", |c: &ChallengesDto| {
        c.max_cs_advantage_on_lane_opponent
    }),
    Field::challenge("maxLevelLeadLaneOpponent", |c: &ChallengesDto| {
        c.max_level_lead_lane_opponent
    }),
];

pub fn fields(category: Category) -> &'static [Field] {
    match category {
        Category::Sum => SUM_FIELDS,
        Category::Average => AVERAGE_FIELDS,
        Category::MinMax => MIN_MAX_FIELDS,
    }
}

/// Every catalog entry with the category it is registered under.
pub fn entries() -> impl Iterator<Item = (Category, &'static Field)> {
    [Category::Sum, Category::Average, Category::MinMax]
        .into_iter()
        .flat_map(|category| fields(category).iter().map(move |field| (category, field)))
}
