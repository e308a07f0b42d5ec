//! Registry owning player identity, team assignment, and buzz flags.

use dashmap::DashMap;
use uuid::Uuid;

/// A player who joined a game.
///
/// Name and team label are free text by design: empty strings, duplicate names,
/// and labels missing from the game's team-name map are all legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Unique identifier allocated at join time.
    pub id: Uuid,
    /// Display name chosen by the player.
    pub name: String,
    /// Team label the player plays for.
    pub team: String,
    /// Code of the game this player belongs to.
    pub game_id: String,
    /// Whether this player currently holds the buzz.
    pub buzzed: bool,
}

impl Player {
    /// Build a record for a player joining `game_id`, with a fresh identifier
    /// and the buzz flag cleared.
    pub fn join(game_id: String, name: String, team: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            team,
            game_id,
            buzzed: false,
        }
    }
}

/// Exclusive owner of all [`Player`] records, keyed by player identifier.
///
/// Buzz flags are only ever flipped through this registry, and callers mutating
/// them must hold the owning game's gate.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: DashMap<Uuid, Player>,
}

impl PlayerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player record.
    pub fn insert(&self, player: Player) {
        self.players.insert(player.id, player);
    }

    /// Clone a player record.
    pub fn get(&self, id: Uuid) -> Option<Player> {
        self.players.get(&id).map(|entry| entry.value().clone())
    }

    /// Whether a player is registered.
    pub fn contains(&self, id: Uuid) -> bool {
        self.players.contains_key(&id)
    }

    /// Delete a player record, returning it if it existed.
    pub fn remove(&self, id: Uuid) -> Option<Player> {
        self.players.remove(&id).map(|(_, player)| player)
    }

    /// Code of the game a player belongs to.
    pub fn game_of(&self, id: Uuid) -> Option<String> {
        self.players.get(&id).map(|player| player.game_id.clone())
    }

    /// Set or clear a player's buzz flag. Returns `false` for unknown players.
    pub fn set_buzzed(&self, id: Uuid, buzzed: bool) -> bool {
        match self.players.get_mut(&id) {
            Some(mut player) => {
                player.buzzed = buzzed;
                true
            }
            None => false,
        }
    }

    /// Clone the records for a roster, preserving its order.
    ///
    /// Identifiers without a record are skipped; under the per-game gate the
    /// roster and the records cannot disagree, so nothing goes missing.
    pub fn snapshot(&self, roster: &[Uuid]) -> Vec<Player> {
        roster.iter().filter_map(|id| self.get(*id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_starts_with_buzz_cleared() {
        let player = Player::join("ABC234".into(), "Alice".into(), "Team A".into());
        assert!(!player.buzzed);
        assert_eq!(player.game_id, "ABC234");
    }

    #[test]
    fn buzz_flag_round_trip() {
        let registry = PlayerRegistry::new();
        let player = Player::join("ABC234".into(), "Alice".into(), "Team A".into());
        let id = player.id;
        registry.insert(player);

        assert!(registry.set_buzzed(id, true));
        assert!(registry.get(id).unwrap().buzzed);
        assert!(registry.set_buzzed(id, false));
        assert!(!registry.get(id).unwrap().buzzed);
    }

    #[test]
    fn snapshot_preserves_roster_order() {
        let registry = PlayerRegistry::new();
        let alice = Player::join("ABC234".into(), "Alice".into(), "Team A".into());
        let bob = Player::join("ABC234".into(), "Bob".into(), "Team B".into());
        let roster = vec![alice.id, bob.id];
        registry.insert(alice);
        registry.insert(bob);

        let names: Vec<_> = registry
            .snapshot(&roster)
            .into_iter()
            .map(|player| player.name)
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn unknown_player_is_reported() {
        let registry = PlayerRegistry::new();
        let id = Uuid::new_v4();
        assert!(!registry.contains(id));
        assert!(!registry.set_buzzed(id, true));
        assert!(registry.remove(id).is_none());
    }
}
