//! Mot du Jour
//!
//! A daily French word-guessing game: one secret word per calendar day, six
//! attempts, accent-insensitive matching and a persistent score.
//!
//! # Quick Start
//!
//! ```rust
//! use mot_du_jour::core::{Feedback, Verdict, Word};
//! use mot_du_jour::dictionary::Dictionary;
//! use mot_du_jour::game::{GameSession, Outcome};
//!
//! let dict = Dictionary::from_words(["maison", "animal", "élève"]);
//! let mut session = GameSession::new(Word::new("maison").unwrap());
//!
//! let result = session.submit_guess("animal", &dict).unwrap();
//! assert_eq!(result.feedback.verdicts()[2], Verdict::Correct);
//! assert_eq!(result.outcome, Outcome::InProgress);
//!
//! // Accents and case are folded away
//! assert_eq!(Word::new("Élève").unwrap().text(), "ELEVE");
//! ```

// Configuration and constants
pub mod config;

// Core domain types
pub mod core;

// Word list loading and lookup
pub mod dictionary;

// Key-value persistence
pub mod storage;

// Secret word of the day
pub mod daily;

// Session state machine and scoring
pub mod game;

// Front-end contract
pub mod render;

// Glue between the game and a front end
pub mod controller;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
