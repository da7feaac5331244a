//! Persistent win/loss statistics per player.
//!
//! The document on disk is a JSON object mapping player names to
//! `{"wins": n, "games_played": m}`. Entry order is kept as it appears in the
//! file so that ties in the ranking fall back to insertion order.

use crate::error::StoreError;
use crate::storage::{read_document, write_document};
use crate::{debug_log, info_log};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardEntry {
    pub wins: u32,
    pub games_played: u32,
}

impl ScoreboardEntry {
    pub fn losses(&self) -> u32 {
        self.games_played.saturating_sub(self.wins)
    }
}

/// Insertion-ordered player -> entry mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    entries: Vec<(String, ScoreboardEntry)>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: &str) -> Option<&ScoreboardEntry> {
        self.entries
            .iter()
            .find(|(name, _)| name == player)
            .map(|(_, entry)| entry)
    }

    /// Insert or replace an entry, keeping the original position if present.
    pub fn insert(&mut self, player: &str, entry: ScoreboardEntry) {
        match self.entries.iter().position(|(name, _)| name == player) {
            Some(i) => self.entries[i].1 = entry,
            None => self.entries.push((player.to_string(), entry)),
        }
    }

    /// Count one finished game for `player`. Returns `None` and leaves the
    /// standings unchanged when a counter is already at its maximum.
    pub fn record(&mut self, player: &str, won: bool) -> Option<ScoreboardEntry> {
        let current = self.get(player).copied().unwrap_or_default();
        let entry = ScoreboardEntry {
            wins: if won {
                current.wins.checked_add(1)?
            } else {
                current.wins
            },
            games_played: current.games_played.checked_add(1)?,
        };
        self.insert(player, entry);
        Some(entry)
    }

    /// Entries by wins, highest first; equal wins keep insertion order.
    pub fn ranked(&self) -> Vec<(String, ScoreboardEntry)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.wins.cmp(&a.1.wins));
        ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScoreboardEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check(&self) -> Result<(), String> {
        match self.iter().find(|(_, e)| e.wins > e.games_played) {
            Some((name, e)) => Err(format!(
                "{name} has {} wins in {} games",
                e.wins, e.games_played
            )),
            None => Ok(()),
        }
    }
}

impl Serialize for Standings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

struct StandingsVisitor;

impl<'de> Visitor<'de> for StandingsVisitor {
    type Value = Standings;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of player names to scoreboard entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Standings, A::Error> {
        let mut standings = Standings::new();
        while let Some((name, entry)) = access.next_entry::<String, ScoreboardEntry>()? {
            standings.insert(&name, entry);
        }
        Ok(standings)
    }
}

impl<'de> Deserialize<'de> for Standings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StandingsVisitor)
    }
}

/// The scoreboard document at a fixed path.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    path: PathBuf,
}

impl Scoreboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the standings; a scoreboard that was never written is empty.
    pub fn load(&self) -> Result<Standings, StoreError> {
        let Some(contents) = read_document(&self.path)? else {
            info_log!("no scoreboard at {}, starting empty", self.path.display());
            return Ok(Standings::new());
        };
        let standings: Standings =
            serde_json::from_str(&contents).map_err(|e| self.invalid(e.to_string()))?;
        standings.check().map_err(|reason| self.invalid(reason))?;
        debug_log!("loaded {} scoreboard entries", standings.len());
        Ok(standings)
    }

    /// Count a finished game for `player` and persist the whole mapping.
    pub fn update(&self, player: &str, won: bool) -> Result<ScoreboardEntry, StoreError> {
        let mut standings = self.load()?;
        let entry = standings
            .record(player, won)
            .ok_or_else(|| StoreError::ScoreOverflow {
                player: player.to_string(),
            })?;
        let json = serde_json::to_string_pretty(&standings)?;
        write_document(&self.path, &json)?;
        log::info!(
            "scoreboard: {player} now {}/{} (won: {won})",
            entry.wins,
            entry.games_played
        );
        Ok(entry)
    }

    pub fn ranked_view(&self) -> Result<Vec<(String, ScoreboardEntry)>, StoreError> {
        Ok(self.load()?.ranked())
    }

    fn invalid(&self, reason: String) -> StoreError {
        StoreError::InvalidScoreboardFormat {
            path: self.path.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entry(wins: u32, games_played: u32) -> ScoreboardEntry {
        ScoreboardEntry { wins, games_played }
    }

    fn scoreboard_in(dir: &tempfile::TempDir) -> Scoreboard {
        Scoreboard::new(dir.path().join("scoreboard.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let standings = scoreboard_in(&dir).load().unwrap();
        assert!(standings.is_empty());
    }

    #[test]
    fn test_win_then_loss() {
        let dir = tempfile::tempdir().unwrap();
        let scoreboard = scoreboard_in(&dir);
        assert_eq!(scoreboard.update("p", true).unwrap(), entry(1, 1));
        assert_eq!(scoreboard.update("p", false).unwrap(), entry(1, 2));
        assert_eq!(scoreboard.load().unwrap().get("p"), Some(&entry(1, 2)));
    }

    #[test]
    fn test_update_keeps_other_players() {
        let dir = tempfile::tempdir().unwrap();
        let scoreboard = scoreboard_in(&dir);
        scoreboard.update("ann", true).unwrap();
        scoreboard.update("ben", false).unwrap();
        scoreboard.update("ann", false).unwrap();

        let standings = scoreboard.load().unwrap();
        assert_eq!(standings.len(), 2);
        assert_eq!(standings.get("ann"), Some(&entry(1, 2)));
        assert_eq!(standings.get("ben"), Some(&entry(0, 1)));
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let mut standings = Standings::new();
        standings.insert("A", entry(3, 4));
        standings.insert("B", entry(5, 5));
        standings.insert("C", entry(3, 9));
        let names: Vec<String> = standings.ranked().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_ranked_view_preserves_file_order_for_ties() {
        let dir = tempfile::tempdir().unwrap();
        let scoreboard = scoreboard_in(&dir);
        fs::write(
            scoreboard.path(),
            r#"{"zed": {"wins": 2, "games_played": 2},
                "amy": {"wins": 2, "games_played": 3},
                "bob": {"wins": 4, "games_played": 4}}"#,
        )
        .unwrap();
        let names: Vec<String> = scoreboard
            .ranked_view()
            .unwrap()
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names, ["bob", "zed", "amy"]);
    }

    #[test]
    fn test_document_format() {
        let dir = tempfile::tempdir().unwrap();
        let scoreboard = scoreboard_in(&dir);
        scoreboard.update("tarik", true).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(scoreboard.path()).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"tarik": {"wins": 1, "games_played": 1}})
        );
    }

    #[test]
    fn test_corrupt_scoreboard_is_reported_and_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let scoreboard = scoreboard_in(&dir);
        fs::write(scoreboard.path(), "not json").unwrap();

        let err = scoreboard.update("p", true).unwrap_err();
        assert!(matches!(err, StoreError::InvalidScoreboardFormat { .. }));
        assert_eq!(fs::read_to_string(scoreboard.path()).unwrap(), "not json");
    }

    #[test]
    fn test_more_wins_than_games_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let scoreboard = scoreboard_in(&dir);
        fs::write(scoreboard.path(), r#"{"p": {"wins": 3, "games_played": 1}}"#).unwrap();
        assert!(matches!(
            scoreboard.load(),
            Err(StoreError::InvalidScoreboardFormat { .. })
        ));
    }

    #[test]
    fn test_update_at_counter_limit_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let scoreboard = scoreboard_in(&dir);
        let full = r#"{"p": {"wins": 0, "games_played": 4294967295}}"#;
        fs::write(scoreboard.path(), full).unwrap();

        let err = scoreboard.update("p", false).unwrap_err();
        assert!(matches!(err, StoreError::ScoreOverflow { ref player } if player == "p"));
        assert_eq!(fs::read_to_string(scoreboard.path()).unwrap(), full);
    }

    #[test]
    fn test_record_leaves_standings_alone_on_overflow() {
        let mut standings = Standings::new();
        standings.insert("p", entry(u32::MAX, u32::MAX));
        assert_eq!(standings.record("p", true), None);
        assert_eq!(standings.get("p"), Some(&entry(u32::MAX, u32::MAX)));
        assert_eq!(standings.record("q", true), Some(entry(1, 1)));
    }

    #[test]
    fn test_losses() {
        assert_eq!(entry(2, 5).losses(), 3);
        assert_eq!(entry(0, 0).losses(), 0);
    }
}
