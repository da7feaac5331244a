use crate::game_state::{GameState, Status};

/// Result of feeding one line of guesser input to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    Won,
    Lost,
    /// Not exactly one letter a-z
    InvalidGuess,
    DuplicateGuess,
}

impl Outcome {
    /// The round is over and should be scored.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// The guess was recorded; `false` means the caller must re-prompt.
    #[must_use]
    pub fn consumed_guess(self) -> bool {
        !matches!(self, Self::InvalidGuess | Self::DuplicateGuess)
    }
}

/// Turn raw input into a guess letter if it is exactly one ASCII letter.
#[must_use]
pub fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Apply one guess to a round.
///
/// The state is returned unchanged for invalid or repeated guesses, and for
/// rounds that are already over.
#[must_use]
pub fn apply_guess(mut state: GameState, guess: &str) -> (GameState, Outcome) {
    match state.status() {
        Status::Won => return (state, Outcome::Won),
        Status::Lost => return (state, Outcome::Lost),
        Status::InProgress => {}
    }

    let Some(letter) = parse_letter(guess) else {
        return (state, Outcome::InvalidGuess);
    };
    if state.has_guessed(letter) {
        return (state, Outcome::DuplicateGuess);
    }

    let outcome = if state.word().contains(letter) {
        state.reveal(letter);
        if state.status() == Status::Won {
            Outcome::Won
        } else {
            Outcome::Correct
        }
    } else {
        state.miss(letter);
        if state.status() == Status::Lost {
            Outcome::Lost
        } else {
            Outcome::Incorrect
        }
    };
    (state, outcome)
}
