use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::{
        common::SuccessResponse,
        game::{
            BuzzStateResponse, GameCreatedResponse, ScoresResponse, TeamNamesPatch,
            TeamNamesResponse, TeamScoresResponse,
        },
        player::{JoinGameRequest, PlayerListResponse, PlayerSummary},
    },
    error::AppError,
    services::session_service,
    state::SharedState,
};

/// Routes handling game lifecycle and per-game reads.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", post(create_game))
        .route(
            "/games/{id}/team-names",
            get(get_team_names).patch(patch_team_names),
        )
        .route("/games/{id}/join", post(join_game))
        .route("/games/{id}/players", get(list_players))
        .route("/games/{id}/scores", get(get_scores))
        .route("/games/{id}/team-scores", get(get_team_scores))
        .route("/games/{id}/buzzer", get(get_buzz_state))
        .route("/games/{id}/reset-buzzers", post(reset_buzzers))
        .route("/games/{id}/players/{player_id}", delete(remove_player))
}

/// Create a fresh game and return its generated code.
#[utoipa::path(
    post,
    path = "/api/games",
    tag = "game",
    responses(
        (status = 200, description = "Game created", body = GameCreatedResponse),
        (status = 503, description = "Game code space exhausted")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
) -> Result<Json<GameCreatedResponse>, AppError> {
    let created = session_service::create_game(&state).await?;
    Ok(Json(created))
}

/// Return the current team-name map of a game.
#[utoipa::path(
    get,
    path = "/api/games/{id}/team-names",
    tag = "game",
    params(("id" = String, Path, description = "Game code")),
    responses(
        (status = 200, description = "Current team names", body = TeamNamesResponse),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn get_team_names(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<TeamNamesResponse>, AppError> {
    let team_names = session_service::team_names(&state, id).await?;
    Ok(Json(team_names))
}

/// Merge new entries into a game's team-name map.
#[utoipa::path(
    patch,
    path = "/api/games/{id}/team-names",
    tag = "game",
    params(("id" = String, Path, description = "Game code")),
    request_body = TeamNamesPatch,
    responses(
        (status = 200, description = "Merged team names", body = TeamNamesResponse),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn patch_team_names(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(patch): Json<TeamNamesPatch>,
) -> Result<Json<TeamNamesResponse>, AppError> {
    let team_names = session_service::merge_team_names(&state, id, patch).await?;
    Ok(Json(team_names))
}

/// Join a game as a new player.
#[utoipa::path(
    post,
    path = "/api/games/{id}/join",
    tag = "game",
    params(("id" = String, Path, description = "Game code")),
    request_body = JoinGameRequest,
    responses(
        (status = 200, description = "Player registered", body = PlayerSummary),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn join_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(request): Json<JoinGameRequest>,
) -> Result<Json<PlayerSummary>, AppError> {
    let player = session_service::join_game(&state, id, request).await?;
    Ok(Json(player))
}

/// List every player of a game with score and buzz flag.
#[utoipa::path(
    get,
    path = "/api/games/{id}/players",
    tag = "game",
    params(("id" = String, Path, description = "Game code")),
    responses(
        (status = 200, description = "Players in join order", body = PlayerListResponse),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn list_players(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerListResponse>, AppError> {
    let players = session_service::list_players(&state, id).await?;
    Ok(Json(players))
}

/// Return the scores of every player in a game.
#[utoipa::path(
    get,
    path = "/api/games/{id}/scores",
    tag = "game",
    params(("id" = String, Path, description = "Game code")),
    responses(
        (status = 200, description = "Scores by player", body = ScoresResponse),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn get_scores(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ScoresResponse>, AppError> {
    let scores = session_service::scores(&state, id).await?;
    Ok(Json(scores))
}

/// Return the per-team score totals of a game, derived on read.
#[utoipa::path(
    get,
    path = "/api/games/{id}/team-scores",
    tag = "game",
    params(("id" = String, Path, description = "Game code")),
    responses(
        (status = 200, description = "Totals by team label", body = TeamScoresResponse),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn get_team_scores(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<TeamScoresResponse>, AppError> {
    let totals = session_service::team_scores(&state, id).await?;
    Ok(Json(totals))
}

/// Return which player currently holds the buzz, if any.
#[utoipa::path(
    get,
    path = "/api/games/{id}/buzzer",
    tag = "game",
    params(("id" = String, Path, description = "Game code")),
    responses(
        (status = 200, description = "Current buzz holder", body = BuzzStateResponse),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn get_buzz_state(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<BuzzStateResponse>, AppError> {
    let buzz = session_service::buzz_state(&state, id).await?;
    Ok(Json(buzz))
}

/// Clear every buzz flag of a game, reopening the round.
#[utoipa::path(
    post,
    path = "/api/games/{id}/reset-buzzers",
    tag = "game",
    params(("id" = String, Path, description = "Game code")),
    responses(
        (status = 200, description = "Buzzers reset", body = SuccessResponse),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn reset_buzzers(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    session_service::reset_buzzers(&state, id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Remove a player from a game.
#[utoipa::path(
    delete,
    path = "/api/games/{id}/players/{player_id}",
    tag = "game",
    params(
        ("id" = String, Path, description = "Game code"),
        ("player_id" = Uuid, Path, description = "Player identifier")
    ),
    responses(
        (status = 200, description = "Player removed", body = SuccessResponse),
        (status = 404, description = "Unknown game or player")
    )
)]
pub async fn remove_player(
    State(state): State<SharedState>,
    Path((id, player_id)): Path<(String, Uuid)>,
) -> Result<Json<SuccessResponse>, AppError> {
    session_service::remove_player(&state, id, player_id).await?;
    Ok(Json(SuccessResponse::ok()))
}
