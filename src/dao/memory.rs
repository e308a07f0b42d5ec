//! Volatile in-memory session store.
//!
//! All state lives in process memory and is lost on restart. Every operation
//! that touches one game's mutable state, the buzz check-and-set included,
//! runs under that game's gate, a per-game mutex; games never contend with each
//! other. Reads that join the roster with per-player data take the gate too, so
//! a player removal is observed either fully applied or not at all.

use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;
use indexmap::IndexMap;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    dao::store::{CreatedGame, RosterEntry, SessionStore, StoreResult},
    state::{
        SessionError, arbiter,
        arbiter::BuzzOutcome,
        code::{MAX_CODE_ATTEMPTS, new_game_code},
        game::GameRegistry,
        player::{Player, PlayerRegistry},
        score::{ScoreLedger, team_totals},
    },
};

/// In-memory store composing the registries behind per-game gates.
pub struct MemorySessionStore {
    default_team_names: IndexMap<String, String>,
    games: GameRegistry,
    players: PlayerRegistry,
    scores: ScoreLedger,
    gates: DashMap<String, Arc<Mutex<()>>>,
}

impl MemorySessionStore {
    /// Create an empty store using the configured default team names.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            default_team_names: config.default_team_names().clone(),
            games: GameRegistry::new(),
            players: PlayerRegistry::new(),
            scores: ScoreLedger::new(),
            gates: DashMap::new(),
        }
    }

    /// Gate serializing all mutations of one game. A gate exists exactly as
    /// long as its game, so a missing gate means an unknown code.
    fn gate(&self, game_id: &str) -> StoreResult<Arc<Mutex<()>>> {
        self.gates
            .get(game_id)
            .map(|gate| Arc::clone(gate.value()))
            .ok_or_else(|| SessionError::GameNotFound(game_id.to_owned()))
    }
}

impl SessionStore for MemorySessionStore {
    fn create_game(&self) -> BoxFuture<'_, StoreResult<CreatedGame>> {
        Box::pin(async move {
            for _ in 0..MAX_CODE_ATTEMPTS {
                let code = new_game_code();
                let Some(record) = self
                    .games
                    .try_insert(&code, self.default_team_names.clone())
                else {
                    continue;
                };
                self.gates.insert(code.clone(), Arc::new(Mutex::new(())));
                debug!(game = %code, "created game");
                return Ok(CreatedGame {
                    id: code,
                    created_at: record.created_at,
                });
            }
            Err(SessionError::CodesExhausted(MAX_CODE_ATTEMPTS))
        })
    }

    fn team_names(&self, game_id: String) -> BoxFuture<'_, StoreResult<IndexMap<String, String>>> {
        Box::pin(async move {
            self.games
                .team_names(&game_id)
                .ok_or(SessionError::GameNotFound(game_id))
        })
    }

    fn merge_team_names(
        &self,
        game_id: String,
        patch: IndexMap<String, String>,
    ) -> BoxFuture<'_, StoreResult<IndexMap<String, String>>> {
        Box::pin(async move {
            let gate = self.gate(&game_id)?;
            let _guard = gate.lock().await;

            self.games
                .merge_team_names(&game_id, patch)
                .ok_or(SessionError::GameNotFound(game_id))
        })
    }

    fn join_game(
        &self,
        game_id: String,
        name: String,
        team: String,
    ) -> BoxFuture<'_, StoreResult<Player>> {
        Box::pin(async move {
            let gate = self.gate(&game_id)?;
            let _guard = gate.lock().await;

            let player = Player::join(game_id.clone(), name, team);
            self.players.insert(player.clone());
            self.games.push_player(&game_id, player.id);
            self.scores.init(player.id);

            debug!(game = %game_id, player = %player.id, "player joined");
            Ok(player)
        })
    }

    fn set_score(&self, player_id: Uuid, score: i64) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let game_id = self
                .players
                .game_of(player_id)
                .ok_or(SessionError::PlayerNotFound(player_id))?;
            let gate = self.gate(&game_id)?;
            let _guard = gate.lock().await;

            // The player may have been removed while we waited for the gate;
            // writing then would resurrect a score entry without an owner.
            if !self.players.contains(player_id) {
                return Err(SessionError::PlayerNotFound(player_id));
            }
            self.scores.set(player_id, score);
            Ok(())
        })
    }

    fn scores(&self, game_id: String) -> BoxFuture<'_, StoreResult<IndexMap<Uuid, i64>>> {
        Box::pin(async move {
            let gate = self.gate(&game_id)?;
            let _guard = gate.lock().await;

            let roster = self
                .games
                .roster(&game_id)
                .ok_or(SessionError::GameNotFound(game_id))?;
            Ok(roster
                .into_iter()
                .map(|id| (id, self.scores.get(id).unwrap_or(0)))
                .collect())
        })
    }

    fn team_totals(&self, game_id: String) -> BoxFuture<'_, StoreResult<IndexMap<String, i64>>> {
        Box::pin(async move {
            let gate = self.gate(&game_id)?;
            let _guard = gate.lock().await;

            let roster = self
                .games
                .roster(&game_id)
                .ok_or(SessionError::GameNotFound(game_id))?;
            let members = self.players.snapshot(&roster);
            Ok(team_totals(members.iter().map(|player| {
                (player.team.as_str(), self.scores.get(player.id).unwrap_or(0))
            })))
        })
    }

    fn list_players(&self, game_id: String) -> BoxFuture<'_, StoreResult<Vec<RosterEntry>>> {
        Box::pin(async move {
            let gate = self.gate(&game_id)?;
            let _guard = gate.lock().await;

            let roster = self
                .games
                .roster(&game_id)
                .ok_or(SessionError::GameNotFound(game_id))?;
            Ok(self
                .players
                .snapshot(&roster)
                .into_iter()
                .map(|player| {
                    let score = self.scores.get(player.id).unwrap_or(0);
                    RosterEntry { player, score }
                })
                .collect())
        })
    }

    fn reset_buzzers(&self, game_id: String) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let gate = self.gate(&game_id)?;
            let _guard = gate.lock().await;

            arbiter::reset(&self.games, &self.players, &game_id)
        })
    }

    fn attempt_buzz(&self, player_id: Uuid) -> BoxFuture<'_, StoreResult<BuzzOutcome>> {
        Box::pin(async move {
            let game_id = self
                .players
                .game_of(player_id)
                .ok_or(SessionError::PlayerNotFound(player_id))?;
            let gate = self.gate(&game_id)?;
            let _guard = gate.lock().await;

            arbiter::attempt_buzz(&self.games, &self.players, &game_id, player_id)
        })
    }

    fn first_held(&self, game_id: String) -> BoxFuture<'_, StoreResult<Option<Uuid>>> {
        Box::pin(async move {
            let gate = self.gate(&game_id)?;
            let _guard = gate.lock().await;

            arbiter::first_held(&self.games, &self.players, &game_id)
        })
    }

    fn remove_player(&self, game_id: String, player_id: Uuid) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let gate = self.gate(&game_id)?;
            let _guard = gate.lock().await;

            let belongs = self
                .players
                .get(player_id)
                .is_some_and(|player| player.game_id == game_id);
            if !belongs {
                return Err(SessionError::PlayerNotFound(player_id));
            }

            self.games.remove_player(&game_id, player_id);
            self.players.remove(player_id);
            self.scores.remove(player_id);

            debug!(game = %game_id, player = %player_id, "player removed");
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::future::join_all;

    use super::*;

    fn store() -> Arc<MemorySessionStore> {
        Arc::new(MemorySessionStore::new(&AppConfig::default()))
    }

    #[tokio::test]
    async fn join_then_list_shows_fresh_player() {
        let store = store();
        let game = store.create_game().await.unwrap();
        let alice = store
            .join_game(game.id.clone(), "Alice".into(), "Team A".into())
            .await
            .unwrap();

        let players = store.list_players(game.id).await.unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].player.id, alice.id);
        assert_eq!(players[0].score, 0);
        assert!(!players[0].player.buzzed);
    }

    #[tokio::test]
    async fn buzz_round_trip_scenario() {
        let store = store();
        let game = store.create_game().await.unwrap();
        let alice = store
            .join_game(game.id.clone(), "Alice".into(), "Team A".into())
            .await
            .unwrap();
        let bob = store
            .join_game(game.id.clone(), "Bob".into(), "Team B".into())
            .await
            .unwrap();

        assert_eq!(store.attempt_buzz(alice.id).await.unwrap(), BuzzOutcome::Won);
        assert_eq!(
            store.attempt_buzz(bob.id).await.unwrap(),
            BuzzOutcome::Rejected
        );
        assert_eq!(
            store.first_held(game.id.clone()).await.unwrap(),
            Some(alice.id)
        );

        store.reset_buzzers(game.id.clone()).await.unwrap();
        for entry in store.list_players(game.id.clone()).await.unwrap() {
            assert!(!entry.player.buzzed);
        }

        assert_eq!(store.attempt_buzz(bob.id).await.unwrap(), BuzzOutcome::Won);
        assert_eq!(store.first_held(game.id).await.unwrap(), Some(bob.id));
    }

    #[tokio::test]
    async fn concurrent_buzz_attempts_have_one_winner() {
        let store = store();
        let game = store.create_game().await.unwrap();

        let mut ids = Vec::new();
        for n in 0..16 {
            let player = store
                .join_game(game.id.clone(), format!("p{n}"), "Team A".into())
                .await
                .unwrap();
            ids.push(player.id);
        }

        let attempts = ids.iter().map(|id| {
            let store = store.clone();
            let id = *id;
            tokio::spawn(async move { store.attempt_buzz(id).await.unwrap() })
        });
        let outcomes = join_all(attempts).await;

        let winners = outcomes
            .into_iter()
            .filter(|outcome| *outcome.as_ref().unwrap() == BuzzOutcome::Won)
            .count();
        assert_eq!(winners, 1);
        assert!(store.first_held(game.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn scores_are_absolute_overwrites() {
        let store = store();
        let game = store.create_game().await.unwrap();
        let alice = store
            .join_game(game.id.clone(), "Alice".into(), "Team A".into())
            .await
            .unwrap();

        store.set_score(alice.id, 30).await.unwrap();
        store.set_score(alice.id, 25).await.unwrap();
        let scores = store.scores(game.id.clone()).await.unwrap();
        assert_eq!(scores.get(&alice.id), Some(&25));

        store.set_score(alice.id, -10).await.unwrap();
        let scores = store.scores(game.id).await.unwrap();
        assert_eq!(scores.get(&alice.id), Some(&-10));
    }

    #[tokio::test]
    async fn team_totals_join_players_and_scores() {
        let store = store();
        let game = store.create_game().await.unwrap();
        let alice = store
            .join_game(game.id.clone(), "Alice".into(), "Team A".into())
            .await
            .unwrap();
        let bob = store
            .join_game(game.id.clone(), "Bob".into(), "Team A".into())
            .await
            .unwrap();
        let carol = store
            .join_game(game.id.clone(), "Carol".into(), "outsiders".into())
            .await
            .unwrap();

        store.set_score(alice.id, 10).await.unwrap();
        store.set_score(bob.id, 15).await.unwrap();
        store.set_score(carol.id, 7).await.unwrap();

        let totals = store.team_totals(game.id).await.unwrap();
        assert_eq!(totals.get("Team A"), Some(&25));
        // Labels unknown to the team-name map still get their own bucket.
        assert_eq!(totals.get("outsiders"), Some(&7));
    }

    #[tokio::test]
    async fn remove_player_cascades() {
        let store = store();
        let game = store.create_game().await.unwrap();
        let alice = store
            .join_game(game.id.clone(), "Alice".into(), "Team A".into())
            .await
            .unwrap();
        let bob = store
            .join_game(game.id.clone(), "Bob".into(), "Team B".into())
            .await
            .unwrap();

        store
            .remove_player(game.id.clone(), alice.id)
            .await
            .unwrap();

        let players = store.list_players(game.id.clone()).await.unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].player.id, bob.id);

        let scores = store.scores(game.id.clone()).await.unwrap();
        assert!(!scores.contains_key(&alice.id));

        assert!(matches!(
            store.set_score(alice.id, 5).await,
            Err(SessionError::PlayerNotFound(_))
        ));
        assert!(matches!(
            store.remove_player(game.id, alice.id).await,
            Err(SessionError::PlayerNotFound(_))
        ));
    }

    #[tokio::test]
    async fn team_name_patch_merges_shallowly() {
        let store = store();
        let game = store.create_game().await.unwrap();

        let merged = store
            .merge_team_names(
                game.id.clone(),
                IndexMap::from([("Team A".to_owned(), "Reds".to_owned())]),
            )
            .await
            .unwrap();
        assert_eq!(merged.get("Team A").unwrap(), "Reds");
        assert_eq!(merged.get("Team B").unwrap(), "Team B");

        let read_back = store.team_names(game.id).await.unwrap();
        assert_eq!(read_back, merged);
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let store = store();
        assert!(matches!(
            store.team_names("NOPE22".into()).await,
            Err(SessionError::GameNotFound(_))
        ));
        assert!(matches!(
            store
                .join_game("NOPE22".into(), "Alice".into(), "Team A".into())
                .await,
            Err(SessionError::GameNotFound(_))
        ));
        assert!(matches!(
            store.reset_buzzers("NOPE22".into()).await,
            Err(SessionError::GameNotFound(_))
        ));
    }
}
