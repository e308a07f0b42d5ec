use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{dao::store::CreatedGame, dto::format_system_time};

/// Response returned when a new game has been created.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameCreatedResponse {
    /// Short game code players type to join.
    pub id: String,
    /// RFC3339 creation timestamp.
    pub created_at: String,
}

impl From<CreatedGame> for GameCreatedResponse {
    fn from(value: CreatedGame) -> Self {
        Self {
            id: value.id,
            created_at: format_system_time(value.created_at),
        }
    }
}

/// Patch payload merging entries into a game's team-name map.
///
/// Keys absent from the patch keep their current value; new keys are added.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TeamNamesPatch {
    /// Team label to display name entries to merge.
    pub team_names: IndexMap<String, String>,
}

/// Current team-name map of a game.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamNamesResponse {
    /// Team label to display name.
    pub team_names: IndexMap<String, String>,
}

/// Scores of every player in a game, in roster order.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoresResponse {
    /// Player identifier to current score.
    pub scores: IndexMap<Uuid, i64>,
}

/// Team score totals derived from the players' current scores.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamScoresResponse {
    /// Team label to summed member scores. Labels missing from the team-name
    /// map appear as their own bucket.
    pub totals: IndexMap<String, i64>,
}

/// Which player currently holds the buzz, if any.
#[derive(Debug, Serialize, ToSchema)]
pub struct BuzzStateResponse {
    /// Identifier of the holding player, or `null` when the round is open.
    pub held_by: Option<Uuid>,
}
