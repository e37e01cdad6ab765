//! TUI application state and logic

use crate::controller::{GameController, SubmitStatus};
use crate::core::Verdict;
use crate::daily::until_rollover;
use crate::render::Renderer;
use crate::storage::KeyValueStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;

/// How often the loop wakes up without input to check the clock
const TICK: Duration = Duration::from_millis(500);

/// Messages kept on screen
const MESSAGE_HISTORY: usize = 5;

/// One letter cell of the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub verdict: Option<Verdict>,
    /// Revealed hint letters cannot be edited
    pub locked: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Screen state driven by the game controller
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub rows: Vec<Vec<Cell>>,
    pub editable: Vec<bool>,
    pub cursor: Option<(usize, usize)>,
    pub messages: Vec<Message>,
    pub attempts_left: usize,
    pub score: u64,
    pub word_length: usize,
}

impl Board {
    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_HISTORY {
            self.messages.remove(0);
        }
    }

    fn restyle_last_message(&mut self, style: MessageStyle) {
        if let Some(last) = self.messages.last_mut() {
            last.style = style;
        }
    }

    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(column))
    }

    /// Cursor position, only while its row accepts input
    fn editable_cursor(&self) -> Option<(usize, usize)> {
        self.cursor
            .filter(|&(row, _)| self.editable.get(row).copied().unwrap_or(false))
    }

    fn is_locked(&self, row: usize, column: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .is_none_or(|cell| cell.locked)
    }

    /// Type a letter at the cursor and move to the next cell
    pub fn type_letter(&mut self, letter: char) {
        let Some((row, column)) = self.editable_cursor() else {
            return;
        };
        if self.is_locked(row, column) {
            return;
        }

        let upper = letter.to_uppercase().next().unwrap_or(letter);
        if let Some(cell) = self.cell_mut(row, column) {
            cell.letter = Some(upper);
        }

        if column + 1 < self.word_length {
            self.cursor = Some((row, column + 1));
        }
    }

    /// Clear the cell at the cursor, or step back and clear the previous one
    pub fn erase(&mut self) {
        let Some((row, column)) = self.editable_cursor() else {
            return;
        };

        let current_filled = self
            .rows
            .get(row)
            .and_then(|r| r.get(column))
            .is_some_and(|cell| cell.letter.is_some() && !cell.locked);

        if current_filled {
            if let Some(cell) = self.cell_mut(row, column) {
                cell.letter = None;
            }
        } else if column > 0 && !self.is_locked(row, column - 1) {
            self.cursor = Some((row, column - 1));
            if let Some(cell) = self.cell_mut(row, column - 1) {
                cell.letter = None;
            }
        }
    }

    /// Move the cursor within its row, skipping locked cells
    pub fn move_cursor(&mut self, forward: bool) {
        let Some((row, column)) = self.editable_cursor() else {
            return;
        };

        let target = if forward {
            (column + 1 < self.word_length).then_some(column + 1)
        } else {
            column.checked_sub(1)
        };

        if let Some(target) = target
            && !self.is_locked(row, target)
        {
            self.cursor = Some((row, target));
        }
    }
}

impl Renderer for Board {
    fn render_grid(&mut self, rows: usize, columns: usize) {
        self.rows = vec![vec![Cell::default(); columns]; rows];
        self.editable = vec![false; rows];
        self.cursor = None;
    }

    fn set_cell_verdict(&mut self, row: usize, column: usize, verdict: Verdict) {
        if let Some(cell) = self.cell_mut(row, column) {
            cell.verdict = Some(verdict);
        }
    }

    fn read_row_text(&self, row: usize) -> String {
        self.rows
            .get(row)
            .map(|cells| cells.iter().filter_map(|cell| cell.letter).collect())
            .unwrap_or_default()
    }

    fn set_row_editable(&mut self, row: usize, editable: bool) {
        if let Some(flag) = self.editable.get_mut(row) {
            *flag = editable;
        }
        if !editable && self.cursor.is_some_and(|(r, _)| r == row) {
            self.cursor = None;
        }
    }

    fn focus_cell(&mut self, row: usize, column: usize) {
        self.cursor = Some((row, column));
    }

    fn reveal_letter(&mut self, row: usize, column: usize, letter: char) {
        if let Some(cell) = self.cell_mut(row, column) {
            cell.letter = Some(letter);
            cell.locked = true;
        }
    }

    fn show_message(&mut self, text: &str) {
        self.add_message(text, MessageStyle::Info);
    }

    fn display_attempts_left(&mut self, attempts_left: usize) {
        self.attempts_left = attempts_left;
    }

    fn display_score(&mut self, score: u64) {
        self.score = score;
    }

    fn display_word_length(&mut self, length: usize) {
        self.word_length = length;
    }
}

/// Application state
pub struct App<S: KeyValueStore> {
    pub controller: GameController<S>,
    pub board: Board,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Wrap a controller whose dictionary load has already been attempted
    #[must_use]
    pub fn new(controller: GameController<S>) -> Self {
        let mut board = Board::default();
        board.add_message(
            "Bienvenue! Guess today's French word. Accents are optional.",
            MessageStyle::Info,
        );

        if !controller.dictionary().is_ready() {
            board.add_message(
                "The dictionary could not be loaded; guesses cannot be checked.",
                MessageStyle::Error,
            );
        }

        Self {
            controller,
            board,
            should_quit: false,
        }
    }

    /// Start today's game, or a new one if the day has changed
    pub fn refresh_day(&mut self) {
        self.refresh_day_at(Local::now().date_naive());
    }

    /// [`App::refresh_day`] for a given local date
    pub fn refresh_day_at(&mut self, today: NaiveDate) {
        if !self.controller.needs_restart(today) {
            return;
        }

        let first_start = self.controller.day().is_none();
        self.controller.start(&mut self.board, today);

        if !first_start {
            info!(%today, "Day rolled over");
            self.board
                .add_message("A new day, a new word!", MessageStyle::Success);
        }
    }

    pub fn submit(&mut self) {
        match self.controller.submit_active_row(&mut self.board) {
            SubmitStatus::Rejected(_) | SubmitStatus::Lost => {
                self.board.restyle_last_message(MessageStyle::Error);
            }
            SubmitStatus::Won { points, .. } => {
                self.board.restyle_last_message(MessageStyle::Success);
                self.board
                    .add_message(&format!("+{points} points"), MessageStyle::Success);
            }
            SubmitStatus::Continue | SubmitStatus::Ignored => {}
        }
    }

    /// Time until the next word, for the status panel
    #[must_use]
    pub fn next_word_in(&self) -> Duration {
        until_rollover(&Local::now())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.controller
            .session()
            .is_some_and(crate::game::GameSession::is_terminated)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
{
    loop {
        app.refresh_day();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) if c.is_alphabetic() => {
                    app.board.type_letter(c);
                }
                KeyCode::Backspace => {
                    app.board.erase();
                }
                KeyCode::Left => {
                    app.board.move_cursor(false);
                }
                KeyCode::Right => {
                    app.board.move_cursor(true);
                }
                KeyCode::Enter => {
                    app.submit();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::daily::{SecretWordRecord, save_record};
    use crate::dictionary::Dictionary;
    use crate::storage::MemoryStore;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn board_with_row(word_length: usize) -> Board {
        let mut board = Board::default();
        board.display_word_length(word_length);
        board.render_grid(6, word_length);
        board.set_row_editable(0, true);
        board
    }

    #[test]
    fn typing_fills_cells_and_advances() {
        let mut board = board_with_row(4);
        board.focus_cell(0, 0);
        for c in "lune".chars() {
            board.type_letter(c);
        }

        assert_eq!(board.read_row_text(0), "LUNE");
        // Cursor stays on the last cell
        assert_eq!(board.cursor, Some((0, 3)));
    }

    #[test]
    fn typing_keeps_accents_for_display() {
        let mut board = board_with_row(3);
        board.focus_cell(0, 0);
        for c in "été".chars() {
            board.type_letter(c);
        }
        assert_eq!(board.read_row_text(0), "ÉTÉ");
    }

    #[test]
    fn revealed_letter_is_read_but_not_editable() {
        let mut board = board_with_row(4);
        board.reveal_letter(0, 0, 'L');
        board.focus_cell(0, 1);

        board.erase();
        assert_eq!(board.cursor, Some((0, 1)));
        assert_eq!(board.read_row_text(0), "L");

        board.move_cursor(false);
        assert_eq!(board.cursor, Some((0, 1)));

        for c in "une".chars() {
            board.type_letter(c);
        }
        assert_eq!(board.read_row_text(0), "LUNE");
    }

    #[test]
    fn erase_steps_back_over_empty_cells() {
        let mut board = board_with_row(4);
        board.focus_cell(0, 0);
        board.type_letter('a');
        board.type_letter('b');
        assert_eq!(board.cursor, Some((0, 2)));

        board.erase();
        assert_eq!(board.cursor, Some((0, 1)));
        assert_eq!(board.read_row_text(0), "A");
    }

    #[test]
    fn locked_rows_ignore_typing() {
        let mut board = board_with_row(4);
        board.focus_cell(0, 0);
        board.set_row_editable(0, false);
        board.type_letter('x');

        assert_eq!(board.read_row_text(0), "");
        assert_eq!(board.cursor, None);
    }

    #[test]
    fn message_history_is_bounded() {
        let mut board = Board::default();
        for i in 0..10 {
            board.show_message(&format!("message {i}"));
        }
        assert_eq!(board.messages.len(), MESSAGE_HISTORY);
        assert_eq!(board.messages[0].text, "message 5");
    }

    #[test]
    fn app_plays_a_winning_row() {
        let today = day();
        let mut store = MemoryStore::new();
        save_record(
            &mut store,
            &SecretWordRecord {
                date: today,
                word: "LUNE".to_string(),
            },
        )
        .unwrap();

        let controller = GameController::new(GameConfig::default(), store)
            .with_dictionary(Dictionary::from_words(["lune", "lion"]));
        let mut app = App::new(controller);
        app.refresh_day_at(day());

        // L is revealed, the cursor sits on the second cell
        for c in "une".chars() {
            app.board.type_letter(c);
        }
        app.submit();

        assert!(app.is_over());
        assert_eq!(app.board.score, 4 * 10 + 6 * 5);
        assert_eq!(
            app.board.messages.last().map(|m| m.style),
            Some(MessageStyle::Success)
        );
    }

    #[test]
    fn app_flags_unknown_words_as_errors() {
        let today = day();
        let mut store = MemoryStore::new();
        save_record(
            &mut store,
            &SecretWordRecord {
                date: today,
                word: "LUNE".to_string(),
            },
        )
        .unwrap();

        let controller = GameController::new(GameConfig::default(), store)
            .with_dictionary(Dictionary::from_words(["lune"]));
        let mut app = App::new(controller);
        app.refresh_day_at(day());

        for c in "xyz".chars() {
            app.board.type_letter(c);
        }
        app.submit();

        assert!(!app.is_over());
        let last = app.board.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.controller.session().unwrap().attempts_used(), 0);
    }

    #[test]
    fn app_restarts_on_the_next_day() {
        let mut store = MemoryStore::new();
        save_record(
            &mut store,
            &SecretWordRecord {
                date: day(),
                word: "LUNE".to_string(),
            },
        )
        .unwrap();

        let controller = GameController::new(GameConfig::default(), store)
            .with_dictionary(Dictionary::from_words(["lune", "lion"]));
        let mut app = App::new(controller);
        app.refresh_day_at(day());
        app.refresh_day_at(day());
        assert_eq!(app.controller.day(), Some(day()));

        let tomorrow = day().succ_opt().unwrap();
        app.refresh_day_at(tomorrow);

        assert_eq!(app.controller.day(), Some(tomorrow));
        assert_eq!(
            app.board.messages.last().map(|m| m.text.as_str()),
            Some("A new day, a new word!")
        );
    }
}
