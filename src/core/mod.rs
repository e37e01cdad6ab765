//! Core domain types for the game
//!
//! Canonical words, accent folding and guess feedback. Nothing here touches
//! storage or rendering.

mod feedback;
mod normalize;
mod word;

pub use feedback::{Feedback, Verdict};
pub use normalize::normalize;
pub use word::{Word, WordError};
