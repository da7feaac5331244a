//! One round of Hangman: the secret word, what has been revealed, and how
//! many lives the guesser has left.

use crate::error::SetupError;
use crate::wordbank::is_valid_word;
use serde::{Deserialize, Serialize};

pub const MAX_LIVES: u8 = 6;
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// Snapshot of a round. The field names double as the save-file schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    player: String,
    word: String,
    #[serde(rename = "placeholder")]
    mask: String,
    guessed_letters: Vec<char>,
    lives: u8,
}

fn build_mask(word: &str, guessed: &[char]) -> String {
    word.chars()
        .map(|c| if guessed.contains(&c) { c } else { PLACEHOLDER })
        .collect()
}

impl GameState {
    /// Start a fresh round for `player` guessing `word`.
    pub fn new(player: &str, word: &str) -> Result<Self, SetupError> {
        let player = player.trim();
        if player.is_empty() {
            return Err(SetupError::EmptyPlayer);
        }
        let word = word.trim().to_lowercase();
        if !is_valid_word(&word) {
            return Err(SetupError::InvalidWord);
        }
        Ok(Self {
            player: player.to_string(),
            mask: build_mask(&word, &[]),
            word,
            guessed_letters: Vec::new(),
            lives: MAX_LIVES,
        })
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn mask(&self) -> &str {
        &self.mask
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Lives lost so far, which is also the stage to draw.
    pub fn stage_index(&self) -> usize {
        usize::from(MAX_LIVES.saturating_sub(self.lives))
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    pub fn status(&self) -> Status {
        if self.mask == self.word {
            Status::Won
        } else if self.lives == 0 {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status() != Status::InProgress
    }

    /// Record a letter that occurs in the word and re-derive the mask.
    pub(crate) fn reveal(&mut self, letter: char) {
        self.guessed_letters.push(letter);
        self.mask = build_mask(&self.word, &self.guessed_letters);
    }

    /// Record a letter that does not occur in the word.
    pub(crate) fn miss(&mut self, letter: char) {
        self.guessed_letters.push(letter);
        self.lives = self.lives.saturating_sub(1);
    }

    /// Check every invariant of a round; used when a snapshot comes from disk.
    pub fn validate(&self) -> Result<(), String> {
        if self.player.trim().is_empty() {
            return Err("player name is empty".to_string());
        }
        if !is_valid_word(&self.word) || self.word != self.word.to_lowercase() {
            return Err(format!("'{}' is not a lowercase word", self.word));
        }
        if self.lives > MAX_LIVES {
            return Err(format!("lives {} exceed {MAX_LIVES}", self.lives));
        }
        for (i, letter) in self.guessed_letters.iter().enumerate() {
            if !letter.is_ascii_lowercase() {
                return Err(format!("guessed letter '{letter}' is not a-z"));
            }
            if self.guessed_letters[..i].contains(letter) {
                return Err(format!("letter '{letter}' guessed twice"));
            }
        }
        if self.mask != build_mask(&self.word, &self.guessed_letters) {
            return Err("placeholder does not match guessed letters".to_string());
        }
        let misses = self
            .guessed_letters
            .iter()
            .filter(|c| !self.word.contains(**c))
            .count();
        if misses + usize::from(self.lives) != usize::from(MAX_LIVES) {
            return Err(format!(
                "{misses} wrong guesses do not leave {} lives",
                self.lives
            ));
        }
        Ok(())
    }
}
