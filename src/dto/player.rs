use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{dao::store::RosterEntry, state::player::Player};

/// Payload sent by a player joining a game.
///
/// Both fields are free text: empty strings, duplicate names, and team labels
/// unknown to the game's team-name map are all accepted.
#[derive(Debug, Deserialize, ToSchema)]
pub struct JoinGameRequest {
    /// Display name of the player.
    pub name: String,
    /// Team label the player plays for.
    pub team: String,
}

/// Public projection of a player with score and buzz flag.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerSummary {
    /// Player identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Team label.
    pub team: String,
    /// Code of the owning game.
    pub game_id: String,
    /// Current score.
    pub score: i64,
    /// Whether this player holds the buzz.
    pub buzzed: bool,
}

impl From<RosterEntry> for PlayerSummary {
    fn from(value: RosterEntry) -> Self {
        let RosterEntry { player, score } = value;
        Self {
            id: player.id,
            name: player.name,
            team: player.team,
            game_id: player.game_id,
            score,
            buzzed: player.buzzed,
        }
    }
}

impl From<Player> for PlayerSummary {
    fn from(player: Player) -> Self {
        // A bare player record is only projected right after join, before the
        // host could have scored it.
        Self {
            id: player.id,
            name: player.name,
            team: player.team,
            game_id: player.game_id,
            score: 0,
            buzzed: player.buzzed,
        }
    }
}

/// Players of a game in join order.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerListResponse {
    /// One entry per roster member.
    pub players: Vec<PlayerSummary>,
}

/// Absolute score assignment for a player.
///
/// The value replaces the stored score outright; deltas are computed by the
/// host client before sending. Any integer is accepted, negatives included.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetScoreRequest {
    /// New absolute score.
    pub score: i64,
}
