//! Abstraction over the session state backend.
//!
//! The shipped backend keeps everything in volatile process memory, matching
//! the session lifetime the system promises; the trait is the seam where a
//! persistent backend could be plugged in later.

use std::time::SystemTime;

use futures::future::BoxFuture;
use indexmap::IndexMap;
use uuid::Uuid;

use crate::state::{SessionError, arbiter::BuzzOutcome, player::Player};

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, SessionError>;

/// A freshly created game.
#[derive(Debug, Clone)]
pub struct CreatedGame {
    /// Generated game code.
    pub id: String,
    /// Creation timestamp.
    pub created_at: SystemTime,
}

/// A roster member joined with its current score.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    /// The player record, including its buzz flag.
    pub player: Player,
    /// Current score, 0 until the host sets one.
    pub score: i64,
}

/// Operations every session store must provide.
///
/// Mutations touching one game's state are serialized per game by the
/// implementation; operations on different games never block one another.
/// Clients observe changes by polling: a mutation is visible from the next
/// read onward, with no push notification.
pub trait SessionStore: Send + Sync {
    /// Allocate a free game code and register a game under it with the default
    /// team names. Fails with [`SessionError::CodesExhausted`] only when no
    /// free code is found within a bounded number of draws.
    fn create_game(&self) -> BoxFuture<'_, StoreResult<CreatedGame>>;

    /// Current team-name map of a game.
    fn team_names(&self, game_id: String) -> BoxFuture<'_, StoreResult<IndexMap<String, String>>>;

    /// Merge `patch` into a game's team-name map (shallow key-wise overwrite)
    /// and return the merged map.
    fn merge_team_names(
        &self,
        game_id: String,
        patch: IndexMap<String, String>,
    ) -> BoxFuture<'_, StoreResult<IndexMap<String, String>>>;

    /// Register a new player in a game with a zeroed score and a cleared buzz
    /// flag. Name and team are accepted verbatim.
    fn join_game(
        &self,
        game_id: String,
        name: String,
        team: String,
    ) -> BoxFuture<'_, StoreResult<Player>>;

    /// Overwrite a player's score with an absolute value.
    fn set_score(&self, player_id: Uuid, score: i64) -> BoxFuture<'_, StoreResult<()>>;

    /// Scores of every player in a game, keyed by player id, in roster order.
    fn scores(&self, game_id: String) -> BoxFuture<'_, StoreResult<IndexMap<Uuid, i64>>>;

    /// Scores summed per team label, derived on read.
    fn team_totals(&self, game_id: String) -> BoxFuture<'_, StoreResult<IndexMap<String, i64>>>;

    /// Every player of a game with score and buzz flag, in join order.
    fn list_players(&self, game_id: String) -> BoxFuture<'_, StoreResult<Vec<RosterEntry>>>;

    /// Clear every buzz flag of a game, reopening the round. Idempotent.
    fn reset_buzzers(&self, game_id: String) -> BoxFuture<'_, StoreResult<()>>;

    /// Attempt to claim the buzz for a player in its game. The check and the
    /// flag update run as one unit; concurrent attempts serialize so at most
    /// one wins and every loser observes the rejection.
    fn attempt_buzz(&self, player_id: Uuid) -> BoxFuture<'_, StoreResult<BuzzOutcome>>;

    /// The player currently holding the buzz of a game, if any.
    fn first_held(&self, game_id: String) -> BoxFuture<'_, StoreResult<Option<Uuid>>>;

    /// Remove a player from a game, cascading over roster, score, and record,
    /// atomically with respect to readers.
    fn remove_player(&self, game_id: String, player_id: Uuid) -> BoxFuture<'_, StoreResult<()>>;

    /// Cheap liveness probe for the health endpoint.
    fn health_check(&self) -> BoxFuture<'_, StoreResult<()>>;
}
