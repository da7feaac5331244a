use crate::config::Config;
use crate::debug_log;
use crate::interface::{BoardView, Display, Input, Message, Tone};
use crate::scoreboard::ScoreboardEntry;
use crate::stages::stage;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::fmt;
use std::io::{self, BufRead, IsTerminal, Stdin, StdinLock, Stdout, Write};
use std::path::PathBuf;

/// Hangman: guess the word before the gallows is complete
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Directory holding the scoreboard and the saved game
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Scoreboard file (overrides --data-dir)
    #[arg(long)]
    pub scoreboard: Option<PathBuf>,

    /// Saved-game file (overrides --data-dir)
    #[arg(long = "save-file")]
    pub save_file: Option<PathBuf>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> Config {
        Config::resolve(
            self.data_dir.clone(),
            self.scoreboard.clone(),
            self.save_file.clone(),
        )
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Read a line from the terminal in raw mode so the keys are not echoed.
fn read_line_without_echo() -> io::Result<Option<String>> {
    enable_raw_mode()?;
    let mut line = String::new();
    let result = loop {
        let key = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(e) => break Err(e),
        };
        match key.code {
            KeyCode::Enter => break Ok(Some(line)),
            KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                break Ok(None);
            }
            KeyCode::Backspace => {
                line.pop();
            }
            KeyCode::Char(c) => line.push(c),
            _ => {}
        }
    };
    disable_raw_mode()?;
    result
}

/// Line-based frontend over any reader/writer pair.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    color: bool,
    hide_secrets: bool,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    /// Plain output, secrets read from `reader` like any other line.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            color: false,
            hide_secrets: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Read secret words straight from the terminal with echo off.
    #[must_use]
    pub fn with_hidden_secrets(mut self, hide: bool) -> Self {
        self.hide_secrets = hide;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: impl fmt::Display) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            debug_log!("write failed: {}", e);
        }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        let text = text.to_string();
        if !self.color {
            return text;
        }
        match tone {
            Tone::Success => text.green().bold().to_string(),
            Tone::Failure => text.red().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Info => text.blue().to_string(),
        }
    }

    fn prompt(&mut self, prompt: &str) {
        if let Err(e) = write!(self.writer, "{prompt}").and_then(|()| self.writer.flush()) {
            debug_log!("prompt write failed: {}", e);
        }
    }

    fn read_from_reader(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("failed to read input: {e}");
                None
            }
        }
    }
}

impl CliInterface<StdinLock<'static>, Stdout> {
    /// Interactive frontend on the process's terminal.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        let interactive = stdin.is_terminal();
        Self::new(stdin.lock(), io::stdout())
            .with_color(interactive)
            .with_hidden_secrets(interactive)
    }
}

impl<R: BufRead, W: Write> Display for CliInterface<R, W> {
    fn display_menu(&mut self) {
        self.emit("");
        self.emit("╔════════════════════════╗");
        let title = if self.color {
            "║      HANGMAN GAME      ║".cyan().bold().to_string()
        } else {
            "║      HANGMAN GAME      ║".to_string()
        };
        self.emit(title);
        self.emit("╚════════════════════════╝");
        self.emit("1. New Game");
        self.emit("2. Continue Saved Game");
        self.emit("3. View Scoreboard");
        self.emit("4. Exit");
    }

    fn display_board(&mut self, board: &BoardView<'_>) {
        self.emit("");
        self.emit(stage(board.stage));
        self.emit("");
        self.emit(format!("Word: {}", board.spaced_mask()));
        let lives = self.paint(&board.lives.to_string(), Tone::Failure);
        self.emit(format!("Lives remaining: {lives}"));
        self.emit(format!("Guessed letters: {}", board.guessed_list()));
    }

    fn display_message(&mut self, message: &Message) {
        let text = self.paint(&message.to_string(), message.tone());
        self.emit(text);
    }

    fn display_scoreboard(&mut self, ranked: &[(String, ScoreboardEntry)]) {
        let header = self.paint("==== SCOREBOARD ====", Tone::Success);
        self.emit("");
        self.emit(header);
        for (name, entry) in ranked {
            let name = self.paint(name, Tone::Warning);
            self.emit(format!(
                "{name}: {} wins | {} games played | {} losses",
                entry.wins,
                entry.games_played,
                entry.losses()
            ));
        }
        let footer = self.paint("=====================", Tone::Success);
        self.emit(footer);
    }
}

impl<R: BufRead, W: Write> Input for CliInterface<R, W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompt(prompt);
        self.read_from_reader()
    }

    fn read_hidden(&mut self, prompt: &str) -> Option<String> {
        self.prompt(prompt);
        if !self.hide_secrets {
            return self.read_from_reader();
        }
        let secret = read_line_without_echo();
        self.emit("");
        match secret {
            Ok(secret) => secret,
            Err(e) => {
                log::warn!("hidden input unavailable ({e}), reading with echo");
                self.read_from_reader()
            }
        }
    }
}
