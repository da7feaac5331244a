//! Menu navigation and the guess loop.
//!
//! The controller owns the stores and the word bank and talks to the player
//! only through a `GameInterface`, so the whole session can be driven from a
//! script in tests.

use crate::config::Config;
use crate::engine::{Outcome, apply_guess};
use crate::error::StoreError;
use crate::game_state::GameState;
use crate::interface::{BoardView, GameInterface, Message};
use crate::save_store::SaveStore;
use crate::scoreboard::Scoreboard;
use crate::wordbank::{WordBank, is_valid_word};
use crate::{debug_log, info_log};
use rand::Rng;

/// Typed at the guess prompt to store the round and leave it.
pub const SAVE_COMMAND: &str = ":save";

pub const MENU_PROMPT: &str = "Choose option: ";
pub const GUESS_PROMPT: &str = "Enter a letter (or ':save'): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    NewGame,
    Continue,
    ViewScoreboard,
    Exit,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "new" | "new game" => Some(Self::NewGame),
            "2" | "continue" | "load" => Some(Self::Continue),
            "3" | "scores" | "scoreboard" => Some(Self::ViewScoreboard),
            "4" | "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn outcome_message(outcome: Outcome, state: &GameState) -> Message {
    match outcome {
        Outcome::Correct => Message::Correct,
        Outcome::Incorrect => Message::Incorrect,
        Outcome::InvalidGuess => Message::InvalidGuess,
        Outcome::DuplicateGuess => Message::DuplicateGuess,
        Outcome::Won => Message::Won {
            word: state.word().to_string(),
        },
        Outcome::Lost => Message::Lost {
            word: state.word().to_string(),
        },
    }
}

pub struct SessionController<'a, G: GameInterface + ?Sized, R: Rng> {
    scoreboard: Scoreboard,
    save_store: SaveStore,
    wordbank: WordBank,
    interface: &'a mut G,
    rng: R,
}

impl<'a, G: GameInterface + ?Sized, R: Rng> SessionController<'a, G, R> {
    pub fn new(config: &Config, wordbank: WordBank, interface: &'a mut G, rng: R) -> Self {
        Self {
            scoreboard: Scoreboard::new(&config.scoreboard_path),
            save_store: SaveStore::new(&config.save_path),
            wordbank,
            interface,
            rng,
        }
    }

    /// Show the menu until the player exits or input runs out.
    pub fn run(&mut self) {
        info_log!(
            "session started (scoreboard: {}, save: {})",
            self.scoreboard.path().display(),
            self.save_store.path().display()
        );
        loop {
            self.interface.display_menu();
            let Some(choice) = self.interface.read_line(MENU_PROMPT) else {
                info_log!("input closed at menu");
                break;
            };
            debug_log!("menu choice: {:?}", choice);
            match MenuCommand::parse(&choice) {
                Some(MenuCommand::NewGame) => self.new_game(),
                Some(MenuCommand::Continue) => self.continue_saved(),
                Some(MenuCommand::ViewScoreboard) => self.show_scoreboard(),
                Some(MenuCommand::Exit) => break,
                None => self.interface.display_message(&Message::InvalidOption),
            }
        }
        self.interface.display_message(&Message::Goodbye);
    }

    fn new_game(&mut self) {
        let Some(mode) = self.interface.read_line("Multiplayer? (yes/no): ") else {
            return;
        };
        let Some(player1) = self.read_name("Enter Player 1 name: ") else {
            return;
        };

        let (player, word) = if is_yes(&mode) {
            let Some(player2) = self.read_name("Enter Player 2 name: ") else {
                return;
            };
            let Some(chooser) = self
                .interface
                .read_line("Should Player 1 choose the word? (yes/no): ")
            else {
                return;
            };
            let word = if is_yes(&chooser) {
                let Some(word) = self.read_secret_word() else {
                    return;
                };
                word
            } else {
                self.random_word()
            };
            (player2, word)
        } else {
            (player1, self.random_word())
        };

        let state = match GameState::new(&player, &word) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("could not set up game: {e}");
                self.interface.display_message(&Message::Error(e.to_string()));
                return;
            }
        };
        log::info!(
            "new game for {} ({} letters)",
            state.player(),
            state.word().len()
        );
        self.interface.display_message(&Message::GameStarted {
            player: state.player().to_string(),
        });
        self.play(state, false);
    }

    fn continue_saved(&mut self) {
        match self.save_store.load() {
            Ok(Some(state)) => {
                log::info!("resuming saved game for {}", state.player());
                self.interface.display_message(&Message::GameStarted {
                    player: state.player().to_string(),
                });
                self.play(state, true);
            }
            Ok(None) => self.interface.display_message(&Message::NoSavedGame),
            Err(e) => {
                self.report(&e);
                self.interface.display_message(&Message::NoSavedGame);
            }
        }
    }

    fn show_scoreboard(&mut self) {
        match self.scoreboard.ranked_view() {
            Ok(ranked) if ranked.is_empty() => self.interface.display_message(&Message::NoScores),
            Ok(ranked) => self.interface.display_scoreboard(&ranked),
            Err(e) => {
                self.report(&e);
                return;
            }
        }
        let _ = self.interface.read_line("Press Enter to return to menu...");
    }

    /// Run the guess loop until the round ends, is saved, or input runs out.
    fn play(&mut self, mut state: GameState, resumed: bool) {
        loop {
            self.interface.display_board(&BoardView::from_state(&state));
            let Some(input) = self.interface.read_line(GUESS_PROMPT) else {
                info_log!("input closed during a round; nothing saved");
                self.interface.display_message(&Message::RoundAbandoned);
                return;
            };

            if input.trim().eq_ignore_ascii_case(SAVE_COMMAND) {
                match self.save_store.save(&state) {
                    Ok(()) => {
                        self.interface.display_message(&Message::GameSaved);
                        self.interface.display_message(&Message::ReturningToMenu);
                        return;
                    }
                    Err(e) => {
                        self.report(&e);
                        continue;
                    }
                }
            }

            let outcome;
            (state, outcome) = apply_guess(state, &input);
            debug_log!("guess {:?} -> {:?}", input.trim(), outcome);
            if outcome.is_terminal() {
                self.finish(&state, outcome, resumed);
                return;
            }
            self.interface
                .display_message(&outcome_message(outcome, &state));
        }
    }

    fn finish(&mut self, state: &GameState, outcome: Outcome, resumed: bool) {
        let won = outcome == Outcome::Won;
        self.interface.display_board(&BoardView::from_state(state));
        self.interface.display_message(&outcome_message(outcome, state));

        match self.scoreboard.update(state.player(), won) {
            // The slot goes only once the result is on the scoreboard
            Ok(_) if resumed => {
                if let Err(e) = self.save_store.clear() {
                    self.report(&e);
                }
            }
            Ok(_) => {}
            Err(e) => self.report(&e),
        }
        self.interface.display_message(&Message::ReturningToMenu);
    }

    fn read_name(&mut self, prompt: &str) -> Option<String> {
        loop {
            let name = self.interface.read_line(prompt)?;
            let name = name.trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
            self.interface.display_message(&Message::EmptyName);
        }
    }

    fn read_secret_word(&mut self) -> Option<String> {
        loop {
            let word = self
                .interface
                .read_hidden("Player 1, enter the word: ")?
                .trim()
                .to_lowercase();
            if is_valid_word(&word) {
                return Some(word);
            }
            self.interface.display_message(&Message::InvalidWord);
        }
    }

    fn random_word(&mut self) -> String {
        self.wordbank.pick_random(&mut self.rng).to_string()
    }

    fn report(&mut self, error: &StoreError) {
        log::error!("{error}");
        self.interface
            .display_message(&Message::Error(error.to_string()));
    }
}

/// Build a controller for `config` and run it to completion.
pub fn run_session<G, R>(config: &Config, wordbank: WordBank, interface: &mut G, rng: R)
where
    G: GameInterface + ?Sized,
    R: Rng,
{
    SessionController::new(config, wordbank, interface, rng).run();
}
