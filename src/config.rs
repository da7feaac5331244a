use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "hangman";
pub const SCOREBOARD_FILE: &str = "scoreboard.json";
pub const SAVE_FILE: &str = "save.json";
pub const LOG_FILE: &str = "hangman.log";

/// Locations of every file the game touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub scoreboard_path: PathBuf,
    pub save_path: PathBuf,
    pub log_path: PathBuf,
}

/// The per-user data directory, or the working directory when the platform
/// has none.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    /// All files side by side in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            scoreboard_path: dir.join(SCOREBOARD_FILE),
            save_path: dir.join(SAVE_FILE),
            log_path: dir.join(LOG_FILE),
        }
    }

    /// Start from `data_dir` (or the platform default) and apply per-file
    /// overrides.
    #[must_use]
    pub fn resolve(
        data_dir: Option<PathBuf>,
        scoreboard: Option<PathBuf>,
        save: Option<PathBuf>,
    ) -> Self {
        let mut config = Self::in_dir(data_dir.unwrap_or_else(default_data_dir));
        if let Some(path) = scoreboard {
            config.scoreboard_path = path;
        }
        if let Some(path) = save {
            config.save_path = path;
        }
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::in_dir(default_data_dir())
    }
}
