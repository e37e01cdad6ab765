//! Rendering collaborator
//!
//! The game core drives any front end through [`Renderer`]. Rows and columns
//! are zero-based; the grid has one row per attempt and one column per letter
//! of the secret word.

use crate::core::Verdict;

/// What the game needs from a user interface
pub trait Renderer {
    /// Build an empty grid of `rows` x `columns` cells
    fn render_grid(&mut self, rows: usize, columns: usize);

    /// Mark one cell with its verdict
    fn set_cell_verdict(&mut self, row: usize, column: usize, verdict: Verdict);

    /// Letters currently typed in a row, in column order
    fn read_row_text(&self, row: usize) -> String;

    /// Allow or forbid typing in a row
    fn set_row_editable(&mut self, row: usize, editable: bool);

    /// Move the typing cursor
    fn focus_cell(&mut self, row: usize, column: usize);

    /// Put a read-only letter in a cell (the opening hint of a row)
    fn reveal_letter(&mut self, row: usize, column: usize, letter: char);

    /// Show an alert or error to the player
    fn show_message(&mut self, text: &str);

    fn display_attempts_left(&mut self, attempts_left: usize);

    fn display_score(&mut self, score: u64);

    fn display_word_length(&mut self, length: usize);
}
