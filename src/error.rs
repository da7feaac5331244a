use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the scoreboard and save-slot documents.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or replacing a file failed
    #[error("could not access {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The save slot exists but does not hold a usable game
    #[error("saved game at {} is unreadable: {reason}", path.display())]
    InvalidSaveFormat { path: PathBuf, reason: String },

    /// The scoreboard exists but is not a valid player -> stats mapping
    #[error("scoreboard at {} is unreadable: {reason}", path.display())]
    InvalidScoreboardFormat { path: PathBuf, reason: String },

    /// A player's counters cannot grow any further
    #[error("scoreboard counters for {player} are at their limit")]
    ScoreOverflow { player: String },

    #[error("could not encode document: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

/// Reasons a new round cannot be set up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("player name must not be empty")]
    EmptyPlayer,

    #[error("the word must contain letters a-z only")]
    InvalidWord,
}

#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("word bank contains no usable words")]
    Empty,

    #[error("failed to read word bank: {0}")]
    Io(#[from] io::Error),
}
