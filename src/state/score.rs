//! Ledger owning per-player scores and deriving team aggregates.

use dashmap::DashMap;
use indexmap::IndexMap;
use uuid::Uuid;

/// Exclusive owner of per-player scores.
///
/// A score entry exists exactly as long as the player does: it is seeded with 0
/// at join and deleted when the player is removed. Values are absolute, set by
/// the host; the ledger never clamps or bounds them.
#[derive(Debug, Default)]
pub struct ScoreLedger {
    scores: DashMap<Uuid, i64>,
}

impl ScoreLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a freshly joined player's score with 0.
    pub fn init(&self, player_id: Uuid) {
        self.scores.insert(player_id, 0);
    }

    /// Overwrite a player's score unconditionally. Any integer is accepted.
    pub fn set(&self, player_id: Uuid, score: i64) {
        self.scores.insert(player_id, score);
    }

    /// Current score of a player.
    pub fn get(&self, player_id: Uuid) -> Option<i64> {
        self.scores.get(&player_id).map(|score| *score)
    }

    /// Delete a player's score entry.
    pub fn remove(&self, player_id: Uuid) -> Option<i64> {
        self.scores.remove(&player_id).map(|(_, score)| score)
    }
}

/// Sum scores grouped by team label, in first-seen label order.
///
/// The grouping keys on the label string attached to each player: a label that
/// matches no entry in the game's team-name map still forms its own bucket,
/// which is intentional (teams are free-form).
pub fn team_totals<'a>(entries: impl IntoIterator<Item = (&'a str, i64)>) -> IndexMap<String, i64> {
    let mut totals = IndexMap::new();
    for (team, score) in entries {
        *totals.entry(team.to_owned()).or_insert(0) += score;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_absolutely() {
        let ledger = ScoreLedger::new();
        let player = Uuid::new_v4();
        ledger.init(player);
        assert_eq!(ledger.get(player), Some(0));

        ledger.set(player, 30);
        ledger.set(player, 25);
        assert_eq!(ledger.get(player), Some(25));
    }

    #[test]
    fn negative_scores_are_not_clamped() {
        let ledger = ScoreLedger::new();
        let player = Uuid::new_v4();
        ledger.init(player);
        ledger.set(player, -40);
        assert_eq!(ledger.get(player), Some(-40));
    }

    #[test]
    fn remove_deletes_the_entry() {
        let ledger = ScoreLedger::new();
        let player = Uuid::new_v4();
        ledger.init(player);
        assert_eq!(ledger.remove(player), Some(0));
        assert_eq!(ledger.get(player), None);
    }

    #[test]
    fn totals_group_by_team_label() {
        let totals = team_totals([("Team A", 10), ("Team B", 5), ("Team A", 20)]);
        assert_eq!(totals.get("Team A"), Some(&30));
        assert_eq!(totals.get("Team B"), Some(&5));
    }

    #[test]
    fn unknown_labels_form_their_own_bucket() {
        let totals = team_totals([("Team A", 10), ("les intrus", 7)]);
        assert_eq!(totals.get("les intrus"), Some(&7));
        assert_eq!(totals.len(), 2);
    }
}
