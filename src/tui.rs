//! TUI (Terminal User Interface) for Mastermind
//!
//! Full-screen alternative to the line console, built on Ratatui.
//!
//! # Layout
//! Title, the board with colored pegs next to its hint markers, the legend,
//! the input line, a status line and the key bindings.
//!
//! # States
//! - `EnteringGuess`: keystrokes edit the input line, ENTER submits it
//! - `GameOver`: result shown until any key is pressed

use crate::board::{Board, BoardRow};
use crate::cli::{legend_lines, result_message};
use crate::error::{GameError, InvalidGuessFormat};
use crate::game_state::{GameInterface, GameReport};
use crate::symbols::{CODE_LENGTH, ColorCode};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
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

// "G-Y-B-K" plus a little slack for stray spaces
const MAX_INPUT_LEN: usize = CODE_LENGTH * 2 + 4;
const BOARD_HEIGHT: u16 = crate::board::MAX_ATTEMPTS as u16 + 2;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const EMPTY_STYLE: Style = Style::new().fg(Color::DarkGray);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    GameOver,
}

/// What a key press means while the player is typing a guess.
#[derive(Debug, PartialEq, Eq)]
enum InputAction {
    Submit,
    Abort,
    Edited,
    Ignored,
}

/// Background color of a playable peg.
fn peg_color(code: ColorCode) -> Option<Color> {
    match code {
        ColorCode::GREEN => Some(Color::Green),
        ColorCode::ORANGE => Some(Color::Rgb(255, 165, 0)),
        ColorCode::YELLOW => Some(Color::Yellow),
        ColorCode::BLUE => Some(Color::Blue),
        ColorCode::BLACK => Some(Color::Black),
        ColorCode::RED => Some(Color::Red),
        ColorCode::CYAN => Some(Color::Cyan),
        ColorCode::VIOLET => Some(Color::Magenta),
        _ => None,
    }
}

fn peg_style(code: ColorCode) -> Style {
    match peg_color(code) {
        Some(Color::Black) => Style::new().fg(Color::White).bg(Color::Black),
        Some(bg) => Style::new().fg(Color::Black).bg(bg),
        None => EMPTY_STYLE,
    }
}

fn marker_style(marker: ColorCode) -> Style {
    match marker {
        ColorCode::EXACT => SUCCESS_STYLE,
        ColorCode::COLOR_ONLY => INFO_STYLE,
        _ => EMPTY_STYLE,
    }
}

fn board_line(row: &BoardRow<'_>) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{:>2}: ", row.label))];
    for &peg in row.guess {
        spans.push(Span::styled(format!(" {peg} "), peg_style(peg)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(" | "));
    for &marker in row.hint {
        spans.push(Span::styled(format!("{marker} "), marker_style(marker)));
    }
    Line::from(spans)
}

fn board_lines(board: &Board) -> Vec<Line<'static>> {
    board.rows().map(|row| board_line(&row)).collect()
}

/// Apply a key press to the input buffer.
fn apply_key(input: &mut String, key: KeyEvent) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => InputAction::Abort,
        KeyCode::Char('c') if ctrl => InputAction::Abort,
        KeyCode::Enter if !input.trim().is_empty() => InputAction::Submit,
        KeyCode::Backspace if !input.is_empty() => {
            input.pop();
            InputAction::Edited
        }
        KeyCode::Char(c)
            if !ctrl
                && !key.modifiers.contains(KeyModifiers::ALT)
                && (c.is_ascii_alphabetic() || c == '-' || c == ' ')
                && input.len() < MAX_INPUT_LEN =>
        {
            input.push(c.to_ascii_uppercase());
            InputAction::Edited
        }
        _ => InputAction::Ignored,
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    board: &'a Board,
    attempt: usize,
    input: &'a str,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
}

/// Full-screen game interface.
///
/// Owns the terminal for its lifetime; the terminal is restored on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Board,
    attempt: usize,
    input: String,
    state: TuiState,
    message: String,
    error_message: String,
    restored: bool,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            board: Board::new(),
            attempt: 1,
            input: String::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
            restored: false,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
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
            board: &self.board,
            attempt: self.attempt,
            input: &self.input,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
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

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(BOARD_HEIGHT), // Board
                Constraint::Min(6),               // Legend
                Constraint::Length(3),            // Input
                Constraint::Length(3),            // Status
                Constraint::Length(3),            // Key bindings
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.board);
        Self::render_legend(f, chunks[2]);
        Self::render_input(f, chunks[3], ctx);
        Self::render_status(f, chunks[4], ctx.message, ctx.error_message);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("MASTERMIND")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, board: &Board) {
        let paragraph = Paragraph::new(board_lines(board))
            .block(Block::default().title("Board").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_legend(f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = legend_lines().into_iter().map(Line::from).collect();
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Legend").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let text = match ctx.state {
            TuiState::EnteringGuess => format!("{}_", ctx.input),
            TuiState::GameOver => String::new(),
        };
        let title = format!("Attempt #{}", ctx.attempt);
        let paragraph = Paragraph::new(text)
            .style(INFO_STYLE)
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let line = if !error_message.is_empty() {
            Line::from(Span::styled(error_message.to_string(), ERROR_STYLE))
        } else if !message.is_empty() {
            Line::from(Span::styled(message.to_string(), SUCCESS_STYLE))
        } else {
            Line::from("Ready")
        };
        let paragraph = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type e.g. G-Y-B-K | ENTER: Submit | BACKSPACE: Edit | ESC: Quit",
            TuiState::GameOver => "Press any key to exit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Block until the next key press, ignoring releases and non-key events.
    fn next_key(&mut self) -> Result<KeyEvent, GameError> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => return Ok(key),
                Event::Resize(..) => self.draw_or_log(),
                other => {
                    debug_log!("next_key() - Ignoring event: {:?}", other);
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_board(&mut self, board: &Board) {
        self.board = *board;
        self.draw_or_log();
    }

    fn display_attempt_prompt(&mut self, attempt: usize) {
        self.attempt = attempt;
        self.state = TuiState::EnteringGuess;
        self.draw_or_log();
    }

    fn read_guess_line(&mut self) -> Result<String, GameError> {
        loop {
            self.draw_or_log();
            let key = self.next_key()?;
            match apply_key(&mut self.input, key) {
                InputAction::Submit => {
                    self.error_message.clear();
                    let line = std::mem::take(&mut self.input);
                    info_log!("TuiInterface::read_guess_line() - Submitted {:?}", line);
                    return Ok(line);
                }
                InputAction::Abort => {
                    info_log!("TuiInterface::read_guess_line() - Aborted");
                    return Err(GameError::Aborted);
                }
                InputAction::Edited | InputAction::Ignored => {}
            }
        }
    }

    fn display_invalid_guess(&mut self, error: &InvalidGuessFormat) {
        self.error_message = format!("Invalid guess: {error}");
        self.draw_or_log();
    }

    fn display_result(&mut self, report: &GameReport) {
        self.board = report.board;
        self.state = TuiState::GameOver;
        self.message = format!("{} The secret is: {}", result_message(report), report.secret);
        self.draw_or_log();
        if let Err(e) = self.next_key() {
            debug_log!("display_result() - Failed waiting for key: {}", e);
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Hint;
    use crate::symbols::parse_code;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_every_playable_color_has_a_peg_color() {
        for color in ColorCode::playable() {
            assert!(peg_color(color).is_some(), "no color for {color}");
        }
        assert_eq!(peg_color(ColorCode::EMPTY), None);
        assert_eq!(peg_color(ColorCode::EXACT), None);
    }

    #[test]
    fn test_black_peg_is_readable() {
        let style = peg_style(ColorCode::BLACK);
        assert_eq!(style.bg, Some(Color::Black));
        assert_eq!(style.fg, Some(Color::White));
    }

    #[test]
    fn test_board_lines_show_symbols() {
        let mut board = Board::new();
        let hint = Hint::from_counts(1, 2);
        board
            .record(1, &parse_code("Y-G-B-R").unwrap(), hint.markers())
            .unwrap();

        let lines = board_lines(&board);
        assert_eq!(lines.len(), crate::board::MAX_ATTEMPTS);

        let last: String = lines[8].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(last, " 1:  Y   G   B   R   | o x x _ ");
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.starts_with(" 9:  _ "));
    }

    #[test]
    fn test_apply_key_typing_and_submit() {
        let mut input = String::new();
        assert_eq!(apply_key(&mut input, key(KeyCode::Enter)), InputAction::Ignored);
        for c in "g-y".chars() {
            assert_eq!(apply_key(&mut input, key(KeyCode::Char(c))), InputAction::Edited);
        }
        assert_eq!(input, "G-Y");
        assert_eq!(apply_key(&mut input, key(KeyCode::Backspace)), InputAction::Edited);
        assert_eq!(input, "G-");
        assert_eq!(apply_key(&mut input, key(KeyCode::Char('1'))), InputAction::Ignored);
        assert_eq!(apply_key(&mut input, key(KeyCode::Enter)), InputAction::Submit);
    }

    #[test]
    fn test_apply_key_abort() {
        let mut input = String::new();
        assert_eq!(apply_key(&mut input, key(KeyCode::Esc)), InputAction::Abort);

        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert_eq!(apply_key(&mut input, ctrl_c), InputAction::Abort);
        assert!(input.is_empty());
    }

    #[test]
    fn test_apply_key_length_limit() {
        let mut input = "G".repeat(MAX_INPUT_LEN);
        assert_eq!(apply_key(&mut input, key(KeyCode::Char('Y'))), InputAction::Ignored);
        assert_eq!(input.len(), MAX_INPUT_LEN);
    }
}
