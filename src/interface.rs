//! Capabilities the session needs from a frontend.
//!
//! The session only emits events (`BoardView`, `Message`, scoreboard rows)
//! and asks for lines of text. How they look on screen is up to the
//! implementation: `cli::CliInterface` prints coloured lines, while
//! `tui::TuiInterface` redraws a full-screen layout.

use crate::game_state::GameState;
use crate::scoreboard::ScoreboardEntry;
use std::fmt;

/// Everything needed to draw the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub player: &'a str,
    pub mask: &'a str,
    pub lives: u8,
    pub guessed_letters: &'a [char],
    /// Lives lost, used to pick the gallows stage
    pub stage: usize,
}

impl<'a> BoardView<'a> {
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            player: state.player(),
            mask: state.mask(),
            lives: state.lives(),
            guessed_letters: state.guessed_letters(),
            stage: state.stage_index(),
        }
    }

    /// The mask with a space between positions, e.g. `_ a _ _`.
    pub fn spaced_mask(&self) -> String {
        let chars: Vec<String> = self.mask.chars().map(String::from).collect();
        chars.join(" ")
    }

    pub fn guessed_list(&self) -> String {
        let letters: Vec<String> = self.guessed_letters.iter().map(char::to_string).collect();
        letters.join(", ")
    }
}

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    GameStarted { player: String },
    Correct,
    Incorrect,
    InvalidGuess,
    DuplicateGuess,
    Won { word: String },
    Lost { word: String },
    GameSaved,
    /// Input ended or was cancelled mid-round
    RoundAbandoned,
    NoSavedGame,
    InvalidOption,
    InvalidWord,
    EmptyName,
    NoScores,
    ReturningToMenu,
    Goodbye,
    /// A storage problem; the triggering action was abandoned
    Error(String),
}

impl Message {
    pub fn tone(&self) -> Tone {
        match self {
            Self::Correct | Self::Won { .. } => Tone::Success,
            Self::Incorrect
            | Self::Lost { .. }
            | Self::NoSavedGame
            | Self::InvalidOption
            | Self::Error(_) => Tone::Failure,
            Self::InvalidGuess
            | Self::DuplicateGuess
            | Self::InvalidWord
            | Self::EmptyName
            | Self::RoundAbandoned => Tone::Warning,
            Self::GameStarted { .. }
            | Self::GameSaved
            | Self::NoScores
            | Self::ReturningToMenu
            | Self::Goodbye => Tone::Info,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameStarted { player } => write!(f, "Game started! Good luck, {player}!"),
            Self::Correct => f.write_str("Correct!"),
            Self::Incorrect => f.write_str("Wrong!"),
            Self::InvalidGuess => f.write_str("Please enter a valid letter!"),
            Self::DuplicateGuess => f.write_str("You already guessed that!"),
            Self::Won { word } => write!(f, "YOU WIN! The word was '{word}'"),
            Self::Lost { word } => write!(f, "YOU LOST! The word was '{word}'"),
            Self::GameSaved => f.write_str("Game saved successfully!"),
            Self::RoundAbandoned => f.write_str("Round abandoned, nothing was saved."),
            Self::NoSavedGame => f.write_str("No saved game found."),
            Self::InvalidOption => f.write_str("Invalid option!"),
            Self::InvalidWord => f.write_str("The word must contain letters a-z only."),
            Self::EmptyName => f.write_str("Name must not be empty."),
            Self::NoScores => f.write_str("No scores yet!"),
            Self::ReturningToMenu => f.write_str("Returning to main menu..."),
            Self::Goodbye => f.write_str("Goodbye!"),
            Self::Error(reason) => write!(f, "Error: {reason}"),
        }
    }
}

/// Output side of a frontend.
pub trait Display {
    fn display_menu(&mut self);
    fn display_board(&mut self, board: &BoardView<'_>);
    fn display_message(&mut self, message: &Message);
    fn display_scoreboard(&mut self, ranked: &[(String, ScoreboardEntry)]);
}

/// Input side of a frontend. `None` means input has ended.
pub trait Input {
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Like `read_line`, but the typed text is not echoed where the
    /// frontend can prevent it.
    fn read_hidden(&mut self, prompt: &str) -> Option<String>;
}

pub trait GameInterface: Display + Input {}

impl<T: Display + Input> GameInterface for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_view_from_state() {
        let state = GameState::new("eve", "ruby").unwrap();
        let (state, _) = crate::engine::apply_guess(state, "u");
        let (state, _) = crate::engine::apply_guess(state, "k");
        let board = BoardView::from_state(&state);
        assert_eq!(board.player, "eve");
        assert_eq!(board.spaced_mask(), "_ u _ _");
        assert_eq!(board.guessed_list(), "u, k");
        assert_eq!(board.lives, 5);
        assert_eq!(board.stage, 1);
    }

    #[test]
    fn test_message_text_and_tone() {
        let won = Message::Won {
            word: "ruby".to_string(),
        };
        assert_eq!(won.to_string(), "YOU WIN! The word was 'ruby'");
        assert_eq!(won.tone(), Tone::Success);
        assert_eq!(Message::DuplicateGuess.tone(), Tone::Warning);
        assert_eq!(Message::RoundAbandoned.tone(), Tone::Warning);
        assert_eq!(Message::Error("disk full".into()).to_string(), "Error: disk full");
    }
}
