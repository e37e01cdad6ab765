//! Game session state machine
//!
//! `InProgress` is the only state that accepts guesses; `Won` and `Lost` are
//! terminal. Rejected guesses never consume an attempt.

use super::win_score;
use crate::config::MAX_ATTEMPTS;
use crate::core::{Feedback, Word};
use crate::dictionary::Dictionary;
use thiserror::Error;
use tracing::debug;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a guess was refused
///
/// All variants are recoverable: the player is asked again, nothing changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess has {actual} letters, expected {expected}")]
    Validation { expected: usize, actual: usize },

    #[error("'{0}' is not in the dictionary")]
    UnknownWord(String),

    #[error("the game is already over")]
    Finished,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub outcome: Outcome,
}

/// An accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// One game against one secret word
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    attempts_used: usize,
    max_attempts: usize,
    outcome: Outcome,
    history: Vec<GuessRecord>,
}

impl GameSession {
    /// Start a session with the standard number of attempts
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self::with_max_attempts(secret, MAX_ATTEMPTS)
    }

    #[must_use]
    pub const fn with_max_attempts(secret: Word, max_attempts: usize) -> Self {
        Self {
            secret,
            attempts_used: 0,
            max_attempts,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Validate, evaluate and record a guess
    ///
    /// The guess is canonicalized before its length is compared, so accents
    /// typed as combining marks do not count as extra letters.
    ///
    /// # Errors
    ///
    /// - `GuessError::Finished` if the session is already won or lost
    /// - `GuessError::Validation` if the guess length differs from the secret's
    /// - `GuessError::UnknownWord` if the dictionary does not contain the guess
    ///
    /// # Examples
    /// ```
    /// use mot_du_jour::core::Word;
    /// use mot_du_jour::dictionary::Dictionary;
    /// use mot_du_jour::game::{GameSession, Outcome};
    ///
    /// let dict = Dictionary::from_words(["maison", "animal"]);
    /// let mut session = GameSession::new(Word::new("maison").unwrap());
    ///
    /// let result = session.submit_guess("animal", &dict).unwrap();
    /// assert_eq!(result.outcome, Outcome::InProgress);
    ///
    /// let result = session.submit_guess("Maison", &dict).unwrap();
    /// assert_eq!(result.outcome, Outcome::Won);
    /// assert_eq!(session.compute_score(), Some(6 * 10 + 5 * 5));
    /// ```
    pub fn submit_guess(
        &mut self,
        raw: &str,
        dictionary: &Dictionary,
    ) -> Result<GuessOutcome, GuessError> {
        if self.outcome.is_terminal() {
            return Err(GuessError::Finished);
        }

        let expected = self.secret.len();
        let guess = Word::new(raw).map_err(|_| GuessError::Validation {
            expected,
            actual: 0,
        })?;

        if guess.len() != expected {
            return Err(GuessError::Validation {
                expected,
                actual: guess.len(),
            });
        }

        if !dictionary.contains(guess.text()) {
            return Err(GuessError::UnknownWord(guess.text().to_string()));
        }

        let feedback = Feedback::evaluate(&guess, &self.secret);
        self.attempts_used += 1;

        self.outcome = if feedback.is_win() {
            Outcome::Won
        } else if self.attempts_used >= self.max_attempts {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        debug!(
            guess = %guess,
            feedback = %feedback.to_emoji(),
            attempts = self.attempts_used,
            outcome = ?self.outcome,
            "Guess accepted"
        );

        self.history.push(GuessRecord {
            guess,
            feedback: feedback.clone(),
        });

        Ok(GuessOutcome {
            feedback,
            outcome: self.outcome,
        })
    }

    /// Points earned by this session, only once it is won
    #[must_use]
    pub fn compute_score(&self) -> Option<u32> {
        (self.outcome == Outcome::Won)
            .then(|| win_score(self.secret.len(), self.attempts_used, self.max_attempts))
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Accepted guesses in order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }
}
