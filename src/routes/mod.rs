use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod game;
pub mod health;
pub mod player;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = Router::new().nest("/api", game::router().merge(player::router()));

    let docs_router = docs::router(state.clone());

    health::router()
        .merge(api_router)
        .merge(docs_router)
        .with_state(state)
}
