//! In-memory session core: registries, buzz arbitration, and the shared
//! application state handed to the HTTP layer.

pub mod arbiter;
pub mod code;
pub mod game;
pub mod player;
pub mod score;

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::{config::AppConfig, dao::memory::MemorySessionStore, dao::store::SessionStore};

/// Shared handle to the application state.
pub type SharedState = Arc<AppState>;

/// Errors raised by the session core.
///
/// A lost buzz race is deliberately not in this list; it is reported as
/// [`arbiter::BuzzOutcome::Rejected`] because it is an expected outcome, not a
/// fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No game is registered under the given code.
    #[error("game `{0}` not found")]
    GameNotFound(String),
    /// No player is registered under the given identifier.
    #[error("player `{0}` not found")]
    PlayerNotFound(Uuid),
    /// Code generation failed to find a free game code.
    #[error("no free game code after {0} attempts")]
    CodesExhausted(usize),
}

/// Central application state owning the session store.
///
/// Constructed once at process start and passed by handle to every route; there
/// is no ambient global state.
pub struct AppState {
    store: Arc<dyn SessionStore>,
}

impl AppState {
    /// Build the state around the in-memory store, wrapped in an [`Arc`] so it
    /// can be cloned cheaply into the router.
    pub fn new(config: &AppConfig) -> SharedState {
        Self::with_store(Arc::new(MemorySessionStore::new(config)))
    }

    /// Build the state around an arbitrary store implementation.
    pub fn with_store(store: Arc<dyn SessionStore>) -> SharedState {
        Arc::new(Self { store })
    }

    /// Handle to the session store backing all operations.
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }
}
