//! Facade exposing the session operations the transport layer calls.
//!
//! Holds no state of its own: every function delegates to the store installed
//! in [`SharedState`] and converts the result into a DTO. Clients poll these
//! operations on a fixed interval; a mutation becomes visible from the next
//! poll onward, there is no push delivery.

use uuid::Uuid;

use crate::{
    dto::{
        game::{
            BuzzStateResponse, GameCreatedResponse, ScoresResponse, TeamNamesPatch,
            TeamNamesResponse, TeamScoresResponse,
        },
        player::{JoinGameRequest, PlayerListResponse, PlayerSummary},
    },
    state::{SessionError, SharedState, arbiter::BuzzOutcome},
};

/// Create a fresh game with a generated code and the default team names.
pub async fn create_game(state: &SharedState) -> Result<GameCreatedResponse, SessionError> {
    let created = state.store().create_game().await?;
    Ok(created.into())
}

/// Current team-name map of a game.
pub async fn team_names(
    state: &SharedState,
    game_id: String,
) -> Result<TeamNamesResponse, SessionError> {
    let team_names = state.store().team_names(game_id).await?;
    Ok(TeamNamesResponse { team_names })
}

/// Merge a patch into a game's team-name map and return the merged result.
pub async fn merge_team_names(
    state: &SharedState,
    game_id: String,
    patch: TeamNamesPatch,
) -> Result<TeamNamesResponse, SessionError> {
    let team_names = state
        .store()
        .merge_team_names(game_id, patch.team_names)
        .await?;
    Ok(TeamNamesResponse { team_names })
}

/// Register a new player in a game.
pub async fn join_game(
    state: &SharedState,
    game_id: String,
    request: JoinGameRequest,
) -> Result<PlayerSummary, SessionError> {
    let player = state
        .store()
        .join_game(game_id, request.name, request.team)
        .await?;
    Ok(player.into())
}

/// Overwrite a player's score with an absolute value.
pub async fn set_score(
    state: &SharedState,
    player_id: Uuid,
    score: i64,
) -> Result<(), SessionError> {
    state.store().set_score(player_id, score).await
}

/// Scores of every player in a game.
pub async fn scores(state: &SharedState, game_id: String) -> Result<ScoresResponse, SessionError> {
    let scores = state.store().scores(game_id).await?;
    Ok(ScoresResponse { scores })
}

/// Team totals derived from the players' current scores.
pub async fn team_scores(
    state: &SharedState,
    game_id: String,
) -> Result<TeamScoresResponse, SessionError> {
    let totals = state.store().team_totals(game_id).await?;
    Ok(TeamScoresResponse { totals })
}

/// Every player of a game with score and buzz flag, in join order.
pub async fn list_players(
    state: &SharedState,
    game_id: String,
) -> Result<PlayerListResponse, SessionError> {
    let players = state
        .store()
        .list_players(game_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(PlayerListResponse { players })
}

/// Reopen a game's round by clearing every buzz flag.
pub async fn reset_buzzers(state: &SharedState, game_id: String) -> Result<(), SessionError> {
    state.store().reset_buzzers(game_id).await
}

/// Attempt to claim the buzz for a player.
pub async fn attempt_buzz(
    state: &SharedState,
    player_id: Uuid,
) -> Result<BuzzOutcome, SessionError> {
    state.store().attempt_buzz(player_id).await
}

/// The player currently holding a game's buzz, if any.
pub async fn buzz_state(
    state: &SharedState,
    game_id: String,
) -> Result<BuzzStateResponse, SessionError> {
    let held_by = state.store().first_held(game_id).await?;
    Ok(BuzzStateResponse { held_by })
}

/// Remove a player from a game, cascading over roster, score, and record.
pub async fn remove_player(
    state: &SharedState,
    game_id: String,
    player_id: Uuid,
) -> Result<(), SessionError> {
    state.store().remove_player(game_id, player_id).await
}
