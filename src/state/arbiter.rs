//! Buzz arbitration: decides which buzz attempt wins a round.
//!
//! Per game the buzz is either open (no flag set) or held by exactly one
//! player. The functions here implement the transitions over the registries;
//! they do not serialize access themselves. Callers performing a mutation must
//! hold the owning game's gate (see [`crate::dao::memory::MemorySessionStore`])
//! so the check-and-set below executes as one indivisible unit per game.

use uuid::Uuid;

use crate::state::{SessionError, game::GameRegistry, player::PlayerRegistry};

/// Result of a buzz attempt. A rejection is the designed losing outcome of the
/// race, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzOutcome {
    /// The attempt won the round; the player now holds the buzz.
    Won,
    /// Someone already holds the buzz (possibly the requester itself).
    Rejected,
}

/// Attempt to claim the buzz of `game_id` for `player_id`.
///
/// If any roster member holds the buzz the attempt is rejected with no state
/// change, including when the requester is the current holder (no re-buzz).
/// Otherwise every roster flag is cleared first and then exactly the
/// requester's flag is set, so two flags are never simultaneously true.
pub fn attempt_buzz(
    games: &GameRegistry,
    players: &PlayerRegistry,
    game_id: &str,
    player_id: Uuid,
) -> Result<BuzzOutcome, SessionError> {
    let roster = games
        .roster(game_id)
        .ok_or_else(|| SessionError::GameNotFound(game_id.to_owned()))?;

    if !players.contains(player_id) {
        return Err(SessionError::PlayerNotFound(player_id));
    }

    let held = roster
        .iter()
        .any(|id| players.get(*id).is_some_and(|player| player.buzzed));
    if held {
        return Ok(BuzzOutcome::Rejected);
    }

    // Clear-then-set: the flag of everyone else must be false before the
    // winner's goes true.
    for id in &roster {
        players.set_buzzed(*id, false);
    }
    players.set_buzzed(player_id, true);

    Ok(BuzzOutcome::Won)
}

/// Return a game to the open state by clearing every roster member's flag.
///
/// Idempotent: resetting an already open game is a no-op in effect.
pub fn reset(
    games: &GameRegistry,
    players: &PlayerRegistry,
    game_id: &str,
) -> Result<(), SessionError> {
    let roster = games
        .roster(game_id)
        .ok_or_else(|| SessionError::GameNotFound(game_id.to_owned()))?;

    for id in &roster {
        players.set_buzzed(*id, false);
    }

    Ok(())
}

/// The player currently holding the buzz, if any.
///
/// At most one flag is legitimately set; should that invariant ever be broken
/// the first flagged player in roster order is reported, deterministically.
pub fn first_held(
    games: &GameRegistry,
    players: &PlayerRegistry,
    game_id: &str,
) -> Result<Option<Uuid>, SessionError> {
    let roster = games
        .roster(game_id)
        .ok_or_else(|| SessionError::GameNotFound(game_id.to_owned()))?;

    Ok(roster
        .into_iter()
        .find(|id| players.get(*id).is_some_and(|player| player.buzzed)))
}
