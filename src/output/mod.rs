//! Terminal output formatting
//!
//! Display utilities for the console game and the `score` command.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_game_summary, print_total_score};
