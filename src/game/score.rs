//! Scoring and the cumulative score record

use crate::config::{BASE_PER_LETTER, BONUS_PER_ATTEMPT_LEFT};
use crate::storage::{KeyValueStore, StorageError, TOTAL_SCORE_KEY};
use tracing::{info, warn};

/// Points for a won game
///
/// `length * 10 + (max_attempts - attempts_used + 1) * 5`: longer words and
/// fewer attempts are worth more.
///
/// # Examples
/// ```
/// use mot_du_jour::game::win_score;
///
/// assert_eq!(win_score(8, 3, 6), 100);
/// assert_eq!(win_score(5, 1, 6), 80);
/// ```
#[must_use]
pub fn win_score(word_length: usize, attempts_used: usize, max_attempts: usize) -> u32 {
    let attempts_left = (max_attempts + 1).saturating_sub(attempts_used);
    word_length as u32 * BASE_PER_LETTER + attempts_left as u32 * BONUS_PER_ATTEMPT_LEFT
}

/// The persisted total across all won games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    total: u64,
}

impl ScoreBoard {
    /// Read the total from the store; anything unreadable counts as zero
    #[must_use]
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            total: read_total_or_zero(store),
        }
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Add a win's points to the stored total and persist it
    ///
    /// The stored value is re-read first, so points written by another run
    /// since [`ScoreBoard::load`] are kept. A failed write is logged and the
    /// new total is still returned.
    pub fn record_win<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, points: u32) -> u64 {
        self.total = read_total_or_zero(store) + u64::from(points);

        if let Err(err) = store.set(TOTAL_SCORE_KEY, &self.total.to_string()) {
            warn!(error = %err, "Could not persist total score");
        }

        info!(points, total = self.total, "Score updated");
        self.total
    }
}

/// Read the stored total
///
/// # Errors
///
/// Returns `StorageError` if the store fails or the value is not an integer.
pub fn read_total<S: KeyValueStore + ?Sized>(store: &S) -> Result<u64, StorageError> {
    let Some(raw) = store.get(TOTAL_SCORE_KEY)? else {
        return Ok(0);
    };

    raw.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| StorageError::InvalidValue {
            key: TOTAL_SCORE_KEY.to_string(),
            reason: e.to_string(),
        })
}

fn read_total_or_zero<S: KeyValueStore + ?Sized>(store: &S) -> u64 {
    read_total(store).unwrap_or_else(|err| {
        warn!(error = %err, "Ignoring unreadable total score");
        0
    })
}
