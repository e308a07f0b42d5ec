//! Registry owning game records and their team-name configuration.

use std::time::SystemTime;

use dashmap::{DashMap, mapref::entry::Entry};
use indexmap::IndexMap;
use uuid::Uuid;

/// A live quiz session tracked for the lifetime of the process.
///
/// The roster holds player identifiers only; the player records themselves are
/// owned by [`crate::state::player::PlayerRegistry`]. Removing a player removes
/// its identifier from the roster, never the other way around.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Creation timestamp, exposed for auditing/debugging.
    pub created_at: SystemTime,
    /// Player identifiers in join order.
    pub players: Vec<Uuid>,
    /// Team label to display name. Labels are free text; players may reference
    /// labels that are not present here.
    pub team_names: IndexMap<String, String>,
}

/// Exclusive owner of all [`GameRecord`]s, keyed by game code.
///
/// Games are never deleted; the registry grows for the lifetime of the process.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: DashMap<String, GameRecord>,
}

impl GameRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh game under `code` with an empty roster.
    ///
    /// Returns the inserted record, or `None` when the code is already taken so
    /// the caller can draw another one instead of overwriting a live game.
    pub fn try_insert(
        &self,
        code: &str,
        team_names: IndexMap<String, String>,
    ) -> Option<GameRecord> {
        match self.games.entry(code.to_owned()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                let record = GameRecord {
                    created_at: SystemTime::now(),
                    players: Vec::new(),
                    team_names,
                };
                slot.insert(record.clone());
                Some(record)
            }
        }
    }

    /// Whether a game is registered under `code`.
    pub fn contains(&self, code: &str) -> bool {
        self.games.contains_key(code)
    }

    /// Clone the team-name map of a game.
    pub fn team_names(&self, code: &str) -> Option<IndexMap<String, String>> {
        self.games.get(code).map(|game| game.team_names.clone())
    }

    /// Merge `patch` into a game's team-name map and return the merged result.
    ///
    /// The merge is a shallow key-wise overwrite: keys absent from the patch
    /// keep their current value, new keys are appended.
    pub fn merge_team_names(
        &self,
        code: &str,
        patch: IndexMap<String, String>,
    ) -> Option<IndexMap<String, String>> {
        let mut game = self.games.get_mut(code)?;
        game.team_names.extend(patch);
        Some(game.team_names.clone())
    }

    /// Snapshot the roster of a game in join order.
    pub fn roster(&self, code: &str) -> Option<Vec<Uuid>> {
        self.games.get(code).map(|game| game.players.clone())
    }

    /// Append a player identifier to a game's roster.
    ///
    /// Returns `false` when the game is unknown.
    pub fn push_player(&self, code: &str, player_id: Uuid) -> bool {
        match self.games.get_mut(code) {
            Some(mut game) => {
                game.players.push(player_id);
                true
            }
            None => false,
        }
    }

    /// Drop a player identifier from a game's roster.
    ///
    /// Removing an identifier that is not on the roster is a no-op; returns
    /// `false` only when the game itself is unknown.
    pub fn remove_player(&self, code: &str, player_id: Uuid) -> bool {
        match self.games.get_mut(code) {
            Some(mut game) => {
                game.players.retain(|id| *id != player_id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_teams() -> IndexMap<String, String> {
        IndexMap::from([
            ("Team A".to_owned(), "Team A".to_owned()),
            ("Team B".to_owned(), "Team B".to_owned()),
        ])
    }

    #[test]
    fn insert_rejects_colliding_codes() {
        let registry = GameRegistry::new();
        assert!(registry.try_insert("ABC234", default_teams()).is_some());
        assert!(registry.try_insert("ABC234", default_teams()).is_none());
        assert!(registry.contains("ABC234"));
    }

    #[test]
    fn team_name_merge_preserves_untouched_keys() {
        let registry = GameRegistry::new();
        registry.try_insert("ABC234", default_teams()).unwrap();

        let merged = registry
            .merge_team_names(
                "ABC234",
                IndexMap::from([("Team A".to_owned(), "Reds".to_owned())]),
            )
            .unwrap();

        assert_eq!(merged.get("Team A").unwrap(), "Reds");
        assert_eq!(merged.get("Team B").unwrap(), "Team B");
    }

    #[test]
    fn team_name_merge_appends_new_keys() {
        let registry = GameRegistry::new();
        registry.try_insert("ABC234", default_teams()).unwrap();

        let merged = registry
            .merge_team_names(
                "ABC234",
                IndexMap::from([("Team C".to_owned(), "Greens".to_owned())]),
            )
            .unwrap();

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("Team C").unwrap(), "Greens");
    }

    #[test]
    fn roster_keeps_join_order() {
        let registry = GameRegistry::new();
        registry.try_insert("ABC234", default_teams()).unwrap();

        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        assert!(registry.push_player("ABC234", first));
        assert!(registry.push_player("ABC234", second));

        assert_eq!(registry.roster("ABC234").unwrap(), vec![first, second]);

        assert!(registry.remove_player("ABC234", first));
        assert_eq!(registry.roster("ABC234").unwrap(), vec![second]);
    }

    #[test]
    fn unknown_game_returns_none() {
        let registry = GameRegistry::new();
        assert!(registry.team_names("NOPE22").is_none());
        assert!(registry.roster("NOPE22").is_none());
        assert!(!registry.push_player("NOPE22", Uuid::new_v4()));
    }
}
