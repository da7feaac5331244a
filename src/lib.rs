// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod interface;
pub mod logging;
pub mod save_store;
pub mod scoreboard;
pub mod session;
pub mod stages;
pub mod storage;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use config::Config;
pub use engine::{Outcome, apply_guess};
pub use error::{SetupError, StoreError, WordBankError};
pub use game_state::{GameState, MAX_LIVES, Status};
pub use save_store::SaveStore;
pub use scoreboard::{Scoreboard, ScoreboardEntry, Standings};
pub use session::{MenuCommand, SessionController, run_session};
pub use wordbank::{WordBank, load_wordbank_from_file, load_wordbank_from_str};
