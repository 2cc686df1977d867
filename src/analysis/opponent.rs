use super::role::Role;
use super::stats::MatchView;
use crate::api::models::ParticipantDto;
use crate::error::StatsError;

/// Finds the participant on the other team holding the same role as `puuid`.
///
/// Roles come from the match's own labels. A player without a usable label
/// has no lane opponent.
pub fn find_lane_opponent<'a>(
    puuid: &str,
    game: &MatchView<'a>,
) -> Result<&'a ParticipantDto, StatsError> {
    let player = game.participant(puuid)?;
    let role = Role::of(player);

    let not_found = || StatsError::NoOpponentFound {
        match_id: game.match_id.to_string(),
        role,
    };

    if role == Role::Unknown {
        return Err(not_found());
    }

    game.info
        .participants
        .iter()
        .filter(|p| p.puuid != puuid && p.team_id != player.team_id)
        .find(|p| Role::of(p) == role)
        .ok_or_else(not_found)
}
