use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::models::ParticipantDto;

/// Lane assignment as reported by the match itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
    #[default]
    Unknown,
}

impl Role {
    /// `teamPosition` first, then the older `lane` label.
    pub fn of(participant: &ParticipantDto) -> Self {
        match Role::from(participant.team_position.as_str()) {
            Role::Unknown => Role::from(participant.lane.as_str()),
            role => role,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Middle => "MIDDLE",
            Role::Bottom => "BOTTOM",
            Role::Utility => "UTILITY",
            Role::Unknown => "UNKNOWN",
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        // Match to values from Riot API
        match value.to_uppercase().as_str() {
            "TOP" => Role::Top,
            "JUNGLE" => Role::Jungle,
            "MIDDLE" | "MID" => Role::Middle,
            "BOTTOM" | "BOT" => Role::Bottom,
            "UTILITY" | "SUPPORT" => Role::Utility,
            _ => Role::Unknown,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
