//! Simple console mode
//!
//! Line-based game without the TUI: one line of input per row.

use crate::controller::{GameController, SubmitStatus};
use crate::core::Verdict;
use crate::output::formatters::{canonical_letters, colored_row, row_template};
use crate::output::{print_banner, print_game_summary, print_total_score};
use crate::render::Renderer;
use crate::storage::KeyValueStore;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::io::{self, BufRead, Write};

pub const MSG_HINT_MISMATCH: &str = "The word must start with the revealed letter";

/// [`Renderer`] that keeps the grid in memory and prints as the game goes
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    letters: Vec<Vec<Option<char>>>,
    verdicts: Vec<Vec<Option<Verdict>>>,
    hints: Vec<Option<char>>,
    editable: Vec<bool>,
    pending: Vec<String>,
    attempts_left: usize,
    score: u64,
    word_length: usize,
}

impl ConsoleRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a row from one line of input
    ///
    /// When the row shows a hint letter, that letter stays in the first cell:
    /// the player types either the letters after it or a whole word starting
    /// with it. A whole word with another first letter leaves the row
    /// untouched and returns `false`.
    pub fn type_row(&mut self, row: usize, input: &str) -> bool {
        let Some(cells) = self.letters.get_mut(row) else {
            return false;
        };

        let mut typed = canonical_letters(input);
        if let Some(hint) = self.hints.get(row).copied().flatten() {
            if typed.len() == self.word_length {
                if typed.first() != Some(&hint) {
                    return false;
                }
            } else {
                typed.insert(0, hint);
            }
        }

        cells.clear();
        cells.extend(typed.into_iter().map(Some));
        true
    }

    /// The hint letter of a row, if one was revealed
    #[must_use]
    pub fn hint(&self, row: usize) -> Option<char> {
        self.hints.get(row).copied().flatten()
    }

    /// Colored tiles of a scored row
    #[must_use]
    pub fn row_display(&self, row: usize) -> String {
        let letters: Vec<char> = self
            .letters
            .get(row)
            .map(|cells| cells.iter().flatten().copied().collect())
            .unwrap_or_default();
        let verdicts = self.verdicts.get(row).cloned().unwrap_or_default();
        colored_row(&letters, &verdicts)
    }

    /// Prompt for an open row, showing the hint letter if any
    #[must_use]
    pub fn prompt(&self, row: usize) -> String {
        let hint = self.hints.get(row).copied().flatten();
        format!(
            "Essai {}/{} [{}]",
            row + 1,
            self.letters.len(),
            row_template(self.word_length, hint)
        )
    }

    /// Messages shown since the last call
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.attempts_left
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn is_editable(&self, row: usize) -> bool {
        self.editable.get(row).copied().unwrap_or(false)
    }
}

impl Renderer for ConsoleRenderer {
    fn render_grid(&mut self, rows: usize, columns: usize) {
        self.letters = vec![Vec::with_capacity(columns); rows];
        self.verdicts = vec![vec![None; columns]; rows];
        self.hints = vec![None; rows];
        self.editable = vec![false; rows];
    }

    fn set_cell_verdict(&mut self, row: usize, column: usize, verdict: Verdict) {
        if let Some(cell) = self.verdicts.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = Some(verdict);
        }
    }

    fn read_row_text(&self, row: usize) -> String {
        self.letters
            .get(row)
            .map(|cells| cells.iter().flatten().collect())
            .unwrap_or_default()
    }

    fn set_row_editable(&mut self, row: usize, editable: bool) {
        if let Some(flag) = self.editable.get_mut(row) {
            *flag = editable;
        }
    }

    // The console has no cursor
    fn focus_cell(&mut self, _row: usize, _column: usize) {}

    fn reveal_letter(&mut self, row: usize, column: usize, letter: char) {
        if column == 0
            && let Some(hint) = self.hints.get_mut(row)
        {
            *hint = Some(letter);
        }
    }

    fn show_message(&mut self, text: &str) {
        self.pending.push(text.to_string());
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

/// Run the simple console mode on stdin for today's word
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<S: KeyValueStore>(controller: &mut GameController<S>) -> io::Result<()> {
    print_banner();

    let today = Local::now().date_naive();
    let stdin = io::stdin();
    play(controller, &mut ConsoleRenderer::new(), stdin.lock(), today)?;

    if let Some(session) = controller.session()
        && session.is_terminated()
    {
        print_game_summary(session, today);
    }
    print_total_score(controller.score_total());

    Ok(())
}

/// Play one game reading guesses from `input` until it ends, `quit` or EOF
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn play<S, I>(
    controller: &mut GameController<S>,
    renderer: &mut ConsoleRenderer,
    mut input: I,
    today: NaiveDate,
) -> io::Result<()>
where
    S: KeyValueStore,
    I: BufRead,
{
    controller.start(renderer, today);
    println!(
        "Le mot du jour a {} lettres. {} essais.\n",
        renderer.word_length, renderer.attempts_left
    );

    while let Some(row) = controller.active_row() {
        print!("{}: ", renderer.prompt(row));
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            println!("\nÀ demain !");
            break;
        }

        if !renderer.type_row(row, line) {
            let hint = renderer.hint(row).unwrap_or('?');
            println!("{}", format!("{MSG_HINT_MISMATCH} {hint}").yellow());
            continue;
        }
        let status = controller.submit_active_row(renderer);

        match status {
            SubmitStatus::Continue | SubmitStatus::Won { .. } | SubmitStatus::Lost => {
                println!("        {}", renderer.row_display(row));
            }
            SubmitStatus::Rejected(_) | SubmitStatus::Ignored => {}
        }

        for message in renderer.take_messages() {
            match status {
                SubmitStatus::Won { .. } => println!("\n{}", message.green().bold()),
                SubmitStatus::Lost => println!("\n{}", message.red().bold()),
                _ => println!("{}", message.yellow()),
            }
        }

        if let SubmitStatus::Won { points, total } = status {
            println!("+{points} points (total {total})");
        }
        if status == SubmitStatus::Ignored {
            break;
        }
    }

    Ok(())
}
