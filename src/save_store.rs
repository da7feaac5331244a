use crate::error::StoreError;
use crate::game_state::GameState;
use crate::info_log;
use crate::storage::{read_document, remove_document, write_document};
use std::path::{Path, PathBuf};

/// The single resumable game slot.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the slot with `state`.
    pub fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)?;
        write_document(&self.path, &json)?;
        log::info!(
            "saved game for {} to {}",
            state.player(),
            self.path.display()
        );
        Ok(())
    }

    /// Restore the slot. `Ok(None)` means nothing has been saved.
    pub fn load(&self) -> Result<Option<GameState>, StoreError> {
        let Some(contents) = read_document(&self.path)? else {
            info_log!("no saved game at {}", self.path.display());
            return Ok(None);
        };
        let state: GameState =
            serde_json::from_str(&contents).map_err(|e| self.invalid(e.to_string()))?;
        state.validate().map_err(|reason| self.invalid(reason))?;
        if state.is_finished() {
            return Err(self.invalid("the saved game is already over".to_string()));
        }
        Ok(Some(state))
    }

    /// Empty the slot.
    pub fn clear(&self) -> Result<(), StoreError> {
        remove_document(&self.path)
    }

    fn invalid(&self, reason: String) -> StoreError {
        StoreError::InvalidSaveFormat {
            path: self.path.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::apply_guess;
    use std::fs;

    fn store_in(dir: &tempfile::TempDir) -> SaveStore {
        SaveStore::new(dir.path().join("save.json"))
    }

    #[test]
    fn test_load_without_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let state = GameState::new("dana", "fantasy").unwrap();
        let (state, _) = apply_guess(state, "a");
        let (state, _) = apply_guess(state, "q");

        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));
    }

    #[test]
    fn test_save_overwrites_previous_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&GameState::new("one", "ruby").unwrap()).unwrap();
        let second = GameState::new("two", "planet").unwrap();
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap(), Some(second));
    }

    #[test]
    fn test_reads_hand_written_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"player": "tarik", "word": "ruby", "placeholder": "r___",
                "guessed_letters": ["z", "r"], "lives": 5}"#,
        )
        .unwrap();
        let state = store.load().unwrap().unwrap();
        assert_eq!(state.player(), "tarik");
        assert_eq!(state.mask(), "r___");
        assert_eq!(state.guessed_letters(), &['z', 'r']);
        assert_eq!(state.lives(), 5);
    }

    #[test]
    fn test_malformed_json_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ truncated").unwrap();
        assert!(matches!(
            store.load(),
            Err(StoreError::InvalidSaveFormat { .. })
        ));
    }

    #[test]
    fn test_multi_char_letter_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"player": "p", "word": "ruby", "placeholder": "____",
                "guessed_letters": ["zz"], "lives": 5}"#,
        )
        .unwrap();
        assert!(matches!(
            store.load(),
            Err(StoreError::InvalidSaveFormat { .. })
        ));
    }

    #[test]
    fn test_inconsistent_snapshot_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"player": "p", "word": "ruby", "placeholder": "ruby",
                "guessed_letters": [], "lives": 6}"#,
        )
        .unwrap();
        assert!(matches!(
            store.load(),
            Err(StoreError::InvalidSaveFormat { .. })
        ));
    }

    #[test]
    fn test_lives_not_matching_misses_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"player": "p", "word": "ruby", "placeholder": "r___",
                "guessed_letters": ["r"], "lives": 1}"#,
        )
        .unwrap();
        assert!(matches!(
            store.load(),
            Err(StoreError::InvalidSaveFormat { .. })
        ));
    }

    #[test]
    fn test_finished_snapshot_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let (won, _) = apply_guess(GameState::new("p", "a").unwrap(), "a");
        store.save(&won).unwrap();
        assert!(matches!(
            store.load(),
            Err(StoreError::InvalidSaveFormat { .. })
        ));
    }

    #[test]
    fn test_clear_removes_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&GameState::new("p", "ruby").unwrap()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }
}
