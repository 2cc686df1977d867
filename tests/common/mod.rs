#![allow(dead_code)]

use league_rollup::api::models::MatchDto;
use serde_json::{json, Value};

pub const PLAYER: &str = "player-puuid";

/// A participant with the handful of fields the tests care about.
pub fn participant(puuid: &str, team_id: i32, position: &str, champion: &str, win: bool) -> Value {
    json!({
        "puuid": puuid,
        "teamId": team_id,
        "teamPosition": position,
        "championName": champion,
        "win": win,
        "kills": 0,
        "deaths": 0,
        "assists": 0,
    })
}

pub fn with(mut participant: Value, fields: Value) -> Value {
    if let (Some(target), Some(extra)) = (participant.as_object_mut(), fields.as_object()) {
        for (key, value) in extra {
            target.insert(key.clone(), value.clone());
        }
    }
    participant
}

pub fn game(match_id: &str, duration: i64, participants: Vec<Value>) -> MatchDto {
    let ids: Vec<Value> = participants.iter().map(|p| p["puuid"].clone()).collect();
    serde_json::from_value(json!({
        "metadata": { "matchId": match_id, "participants": ids },
        "info": { "gameDuration": duration, "participants": participants },
    }))
    .expect("valid match fixture")
}

/// Player on `champion` in the middle lane against `opponent`.
pub fn mid_game(match_id: &str, champion: &str, opponent: &str, win: bool, player_fields: Value) -> MatchDto {
    game(
        match_id,
        1800,
        vec![
            with(participant(PLAYER, 100, "MIDDLE", champion, win), player_fields),
            participant("ally-top", 100, "TOP", "Garen", win),
            participant("enemy-top", 200, "TOP", "Darius", !win),
            participant("enemy-mid", 200, "MIDDLE", opponent, !win),
        ],
    )
}
