use serde::{Deserialize, Serialize};

// Account V1 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

// Summoner V4 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub puuid: String,
    pub summoner_level: i32,
    #[serde(default)]
    pub profile_icon_id: i32,
}

// Match V5 response
//
// `metadata` and `info` are optional so that a structurally broken record still
// decodes and can be reported as malformed by the fold loop instead of failing
// the whole fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchDto {
    #[serde(default)]
    pub metadata: Option<MatchMetadata>,
    #[serde(default)]
    pub info: Option<MatchInfo>,
}

impl MatchDto {
    pub fn match_id(&self) -> &str {
        self.metadata
            .as_ref()
            .map(|m| m.match_id.as_str())
            .filter(|id| !id.is_empty())
            .unwrap_or("<unknown>")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    #[serde(default)]
    pub match_id: String,
    pub participants: Vec<String>,
    #[serde(default)]
    pub data_version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Seconds.
    pub game_duration: i64,
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub game_id: i64,
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub queue_id: i32,
    #[serde(default)]
    pub game_creation: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_id: i32,
    pub champion_name: String,
    pub team_id: i32,
    pub win: bool,
    pub lane: String,          // TOP, JUNGLE, MIDDLE, BOTTOM, NONE
    pub role: String,          // SOLO, CARRY, SUPPORT, NONE
    pub team_position: String, // TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY

    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub double_kills: i32,
    pub triple_kills: i32,
    pub quadra_kills: i32,
    pub penta_kills: i32,
    pub first_blood_kill: bool,
    pub largest_killing_spree: i32,
    pub largest_multi_kill: i32,
    pub largest_critical_strike: i32,
    pub longest_time_spent_living: i32,
    pub total_time_spent_dead: i32,
    #[serde(rename = "timeCCingOthers")]
    pub time_ccing_others: i32,

    pub total_damage_dealt_to_champions: i64,
    pub total_damage_taken: i64,
    pub damage_dealt_to_objectives: i64,
    pub gold_earned: i64,
    pub total_minions_killed: i32,
    pub neutral_minions_killed: i32,
    pub champ_level: i32,

    pub vision_score: i32,
    pub wards_placed: i32,
    pub wards_killed: i32,
    pub vision_wards_bought_in_game: i32,

    pub dragon_kills: i32,
    pub baron_kills: i32,
    pub turret_takedowns: i32,
    pub inhibitor_takedowns: i32,

    pub challenges: Option<ChallengesDto>,
}

/// Supplementary metrics Riot computes per participant. Any of them may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengesDto {
    pub kda: Option<f64>,
    pub kill_participation: Option<f64>,
    pub damage_per_minute: Option<f64>,
    pub gold_per_minute: Option<f64>,
    pub vision_score_per_minute: Option<f64>,
    pub team_damage_percentage: Option<f64>,
    pub lane_minions_first10_minutes: Option<f64>,
    pub game_length: Option<f64>,

    pub solo_kills: Option<f64>,
    pub skillshots_dodged: Option<f64>,
    pub epic_monster_steals: Option<f64>,
    pub rift_herald_takedowns: Option<f64>,
    pub dragon_takedowns: Option<f64>,
    pub baron_takedowns: Option<f64>,
    pub control_wards_placed: Option<f64>,

    pub earliest_dragon_takedown: Option<f64>,
    pub earliest_baron: Option<f64>,
    pub first_turret_killed_time: Option<f64>,
    pub max_cs_advantage_on_lane_opponent: Option<f64>,
    pub max_level_lead_lane_opponent: Option<f64>,
}
