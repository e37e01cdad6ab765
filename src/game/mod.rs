//! Game session and scoring
//!
//! A [`GameSession`] is one day's game: it validates and evaluates guesses
//! and tracks attempts until the word is found or the attempts run out.
//! [`ScoreBoard`] carries the cumulative score across sessions.

mod score;
mod session;

pub use score::{ScoreBoard, read_total, win_score};
pub use session::{GameSession, GuessError, GuessOutcome, GuessRecord, Outcome};
