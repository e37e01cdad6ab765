//! Interactive TUI interface
//!
//! Full-screen grid built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Board, Cell, Message, MessageStyle, run_tui};
