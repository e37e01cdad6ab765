//! Command implementations

pub mod simple;

pub use simple::{ConsoleRenderer, run_simple};
