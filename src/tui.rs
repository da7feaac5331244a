//! TUI (Terminal User Interface) frontend for Hangman
//!
//! A full-screen implementation of the `Display` and `Input` capabilities
//! using Ratatui. The session drives it exactly like the line-based CLI:
//! every `display_*` call updates what is on screen and every `read_*` call
//! blocks on key events until Enter.
//!
//! # Screens
//! - `Menu`: the four main options
//! - `Board`: gallows stage, mask, lives and guessed letters
//! - `Scoreboard`: ranked player statistics

use crate::interface::{BoardView, Display, Input, Message, Tone};
use crate::scoreboard::ScoreboardEntry;
use crate::stages::stage;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_MESSAGES: usize = 4;
const HIDDEN_CHAR: char = '*';
const STAGE_WIDTH: u16 = 16;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const WARNING_STYLE: Style = Style::new().fg(Color::Yellow);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Blue);
const MASK_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Success => SUCCESS_STYLE,
        Tone::Failure => ERROR_STYLE,
        Tone::Warning => WARNING_STYLE,
        Tone::Info => MESSAGE_STYLE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Screen {
    Menu,
    Board,
    Scoreboard,
}

/// Owned copy of the last board the session showed.
#[derive(Debug, Clone)]
struct BoardSnapshot {
    player: String,
    mask: String,
    lives: u8,
    guessed: String,
    stage: usize,
}

impl BoardSnapshot {
    fn from_view(board: &BoardView<'_>) -> Self {
        Self {
            player: board.player.to_string(),
            mask: board.spaced_mask(),
            lives: board.lives,
            guessed: board.guessed_list(),
            stage: board.stage,
        }
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    screen: Screen,
    board: Option<&'a BoardSnapshot>,
    scoreboard: &'a [(String, ScoreboardEntry)],
    messages: &'a [(String, Tone)],
    prompt: &'a str,
    input: &'a str,
    hidden: bool,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    screen: Screen,
    board: Option<BoardSnapshot>,
    scoreboard: Vec<(String, ScoreboardEntry)>,
    messages: Vec<(String, Tone)>,
    prompt: String,
    input: String,
    hidden: bool,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            screen: Screen::Menu,
            board: None,
            scoreboard: Vec::new(),
            messages: Vec::new(),
            prompt: String::new(),
            input: String::new(),
            hidden: false,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            screen: self.screen,
            board: self.board.as_ref(),
            scoreboard: &self.scoreboard,
            messages: &self.messages,
            prompt: &self.prompt,
            input: &self.input,
            hidden: self.hidden,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn push_message(&mut self, text: String, tone: Tone) {
        self.messages.push((text, tone));
        if self.messages.len() > MAX_MESSAGES {
            let excess = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..excess);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(9),
                Constraint::Length(MAX_MESSAGES as u16 + 2),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        match ctx.screen {
            Screen::Menu => Self::render_menu(f, chunks[1]),
            Screen::Board => Self::render_board(f, chunks[1], ctx.board),
            Screen::Scoreboard => Self::render_scoreboard(f, chunks[1], ctx.scoreboard),
        }
        Self::render_messages(f, chunks[2], ctx.messages);
        Self::render_input(f, chunks[3], ctx);
        Self::render_instructions(f, chunks[4]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled("HANGMAN GAME", HEADER_STYLE)))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_menu(f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = [
            "1. New Game",
            "2. Continue Saved Game",
            "3. View Scoreboard",
            "4. Exit",
        ]
        .into_iter()
        .map(Line::from)
        .collect();
        let menu = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Menu"));
        f.render_widget(menu, area);
    }

    fn render_board(f: &mut Frame, area: Rect, board: Option<&BoardSnapshot>) {
        let Some(board) = board else {
            f.render_widget(Block::default().borders(Borders::ALL), area);
            return;
        };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(STAGE_WIDTH), Constraint::Min(20)])
            .split(area);

        let gallows = Paragraph::new(stage(board.stage))
            .block(Block::default().borders(Borders::ALL).title("Gallows"));
        f.render_widget(gallows, columns[0]);

        let lives_style = if board.lives <= 2 { ERROR_STYLE } else { WARNING_STYLE };
        let info = vec![
            Line::from(vec![Span::raw("Player: "), Span::styled(board.player.clone(), HEADER_STYLE)]),
            Line::from(""),
            Line::from(vec![Span::raw("Word: "), Span::styled(board.mask.clone(), MASK_STYLE)]),
            Line::from(""),
            Line::from(vec![
                Span::raw("Lives remaining: "),
                Span::styled(board.lives.to_string(), lives_style),
            ]),
            Line::from(format!("Guessed letters: {}", board.guessed)),
        ];
        let info = Paragraph::new(info)
            .block(Block::default().borders(Borders::ALL).title("Round"))
            .wrap(Wrap { trim: false });
        f.render_widget(info, columns[1]);
    }

    fn render_scoreboard(f: &mut Frame, area: Rect, ranked: &[(String, ScoreboardEntry)]) {
        let lines: Vec<Line> = ranked
            .iter()
            .enumerate()
            .map(|(i, (name, entry))| {
                Line::from(vec![
                    Span::raw(format!("{:>2}. ", i + 1)),
                    Span::styled(name.clone(), WARNING_STYLE),
                    Span::raw(format!(
                        ": {} wins | {} games played | {} losses",
                        entry.wins,
                        entry.games_played,
                        entry.losses()
                    )),
                ])
            })
            .collect();
        let table = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Scoreboard"));
        f.render_widget(table, area);
    }

    fn render_messages(f: &mut Frame, area: Rect, messages: &[(String, Tone)]) {
        let lines: Vec<Line> = messages
            .iter()
            .map(|(text, tone)| Line::from(Span::styled(text.clone(), tone_style(*tone))))
            .collect();
        let panel = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Messages"))
            .wrap(Wrap { trim: true });
        f.render_widget(panel, area);
    }

    fn render_input(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let shown: String = if ctx.hidden {
            ctx.input.chars().map(|_| HIDDEN_CHAR).collect()
        } else {
            ctx.input.to_string()
        };
        let line = Line::from(vec![
            Span::styled(ctx.prompt.to_string(), HEADER_STYLE),
            Span::raw(shown),
            Span::styled("_", Style::new().add_modifier(Modifier::SLOW_BLINK)),
        ]);
        let input = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(input, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect) {
        let help = Paragraph::new(Line::from(Span::styled(
            "ENTER: submit | BACKSPACE: delete | ESC: quit | :save during a round",
            Style::new().fg(Color::DarkGray),
        )));
        f.render_widget(help, area);
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
    }

    /// Block on key events until Enter (line) or Esc/Ctrl-C (end of input).
    fn read_input(&mut self, prompt: &str, hidden: bool) -> Option<String> {
        self.prompt = prompt.to_string();
        self.input.clear();
        self.hidden = hidden;

        let result = loop {
            if self.draw().is_err() {
                info_log!("read_input() - Draw failed, ending input");
                break None;
            }
            let key = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
                Ok(_) => continue,
                Err(e) => {
                    debug_log!("read_input() - Event error: {}", e);
                    break None;
                }
            };
            match key.code {
                KeyCode::Enter => break Some(std::mem::take(&mut self.input)),
                KeyCode::Esc => {
                    info_log!("read_input() - ESC pressed, ending input");
                    break None;
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break None,
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) if !Self::has_modifier_keys(&key) => self.input.push(c),
                _ => {
                    debug_log!("read_input() - Ignoring key: {:?}", key.code);
                }
            }
        };

        self.prompt.clear();
        self.input.clear();
        self.hidden = false;
        result
    }
}

impl Display for TuiInterface {
    fn display_menu(&mut self) {
        self.screen = Screen::Menu;
        self.draw_or_log();
    }

    fn display_board(&mut self, board: &BoardView<'_>) {
        self.screen = Screen::Board;
        self.board = Some(BoardSnapshot::from_view(board));
        self.draw_or_log();
    }

    fn display_message(&mut self, message: &Message) {
        self.push_message(message.to_string(), message.tone());
        self.draw_or_log();
    }

    fn display_scoreboard(&mut self, ranked: &[(String, ScoreboardEntry)]) {
        self.screen = Screen::Scoreboard;
        self.scoreboard = ranked.to_vec();
        self.draw_or_log();
    }
}

impl Input for TuiInterface {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.read_input(prompt, false)
    }

    fn read_hidden(&mut self, prompt: &str) -> Option<String> {
        self.read_input(prompt, true)
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
