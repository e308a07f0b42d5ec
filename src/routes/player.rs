use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{patch, post},
};
use uuid::Uuid;

use crate::{
    dto::{common::SuccessResponse, player::SetScoreRequest},
    error::AppError,
    services::session_service,
    state::{SharedState, arbiter::BuzzOutcome},
};

/// Routes addressed by player identifier (score updates and buzz attempts).
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/players/{id}/score", patch(set_score))
        .route("/players/{id}/buzz", post(buzz))
}

/// Overwrite a player's score with an absolute value.
#[utoipa::path(
    patch,
    path = "/api/players/{id}/score",
    tag = "player",
    params(("id" = Uuid, Path, description = "Player identifier")),
    request_body = SetScoreRequest,
    responses(
        (status = 200, description = "Score updated", body = SuccessResponse),
        (status = 404, description = "Unknown player")
    )
)]
pub async fn set_score(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetScoreRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    session_service::set_score(&state, id, request.score).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Attempt to claim the buzz for a player.
///
/// The losing side of the race gets a 409 so clients can tell "someone already
/// buzzed" apart from a stale game code.
#[utoipa::path(
    post,
    path = "/api/players/{id}/buzz",
    tag = "player",
    params(("id" = Uuid, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Buzz won", body = SuccessResponse),
        (status = 404, description = "Unknown player"),
        (status = 409, description = "Buzz already held")
    )
)]
pub async fn buzz(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponse>, AppError> {
    match session_service::attempt_buzz(&state, id).await? {
        BuzzOutcome::Won => Ok(Json(SuccessResponse::ok())),
        BuzzOutcome::Rejected => Err(AppError::Conflict("buzz already held".into())),
    }
}
