use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Quiz Buzz Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::create_game,
        crate::routes::game::get_team_names,
        crate::routes::game::patch_team_names,
        crate::routes::game::join_game,
        crate::routes::game::list_players,
        crate::routes::game::get_scores,
        crate::routes::game::get_team_scores,
        crate::routes::game::get_buzz_state,
        crate::routes::game::reset_buzzers,
        crate::routes::game::remove_player,
        crate::routes::player::set_score,
        crate::routes::player::buzz,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::SuccessResponse,
            crate::dto::game::GameCreatedResponse,
            crate::dto::game::TeamNamesPatch,
            crate::dto::game::TeamNamesResponse,
            crate::dto::game::ScoresResponse,
            crate::dto::game::TeamScoresResponse,
            crate::dto::game::BuzzStateResponse,
            crate::dto::player::JoinGameRequest,
            crate::dto::player::PlayerSummary,
            crate::dto::player::PlayerListResponse,
            crate::dto::player::SetScoreRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "game", description = "Game lifecycle, rosters, and scores"),
        (name = "player", description = "Player-addressed operations (score, buzz)"),
    )
)]
pub struct ApiDoc;
