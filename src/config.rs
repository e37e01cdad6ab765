//! Game configuration
//!
//! Fixed game rules live in constants; runtime options (where the dictionary
//! comes from, where state is kept, whether rows open with a hint) live in
//! [`GameConfig`], which the binary fills in from command-line flags.

use std::path::PathBuf;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Longest word the daily selection will pick
pub const MAX_SECRET_LENGTH: usize = 12;

/// Secret word used when the dictionary has nothing to offer
pub const FALLBACK_WORD: &str = "JAVASCRIPT";

/// Points per letter of a won word
pub const BASE_PER_LETTER: u32 = 10;

/// Points per attempt left at the time of the win (counting the winning one)
pub const BONUS_PER_ATTEMPT_LEFT: u32 = 5;

/// Default location of the persisted state file
pub const DEFAULT_STATE_FILE: &str = "mot_du_jour.json";

/// Where the word list is read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DictionarySource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A JSON array of strings, or one word per line for `.txt` files
    File(PathBuf),
}

/// Where persisted state is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateLocation {
    /// Nothing survives the process
    Memory,
    /// A JSON object file on disk
    File(PathBuf),
}

impl Default for StateLocation {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_STATE_FILE))
    }
}

/// Runtime options for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dictionary: DictionarySource,
    pub state: StateLocation,
    /// Pre-fill the first cell of each opened row with the secret's first letter
    pub reveal_first_letter: bool,
    pub max_attempts: usize,
    pub max_secret_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: DictionarySource::default(),
            state: StateLocation::default(),
            reveal_first_letter: true,
            max_attempts: MAX_ATTEMPTS,
            max_secret_length: MAX_SECRET_LENGTH,
        }
    }
}

impl GameConfig {
    /// Column the cursor lands on when a row opens
    #[must_use]
    pub const fn first_editable_column(&self) -> usize {
        if self.reveal_first_letter { 1 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_rules() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.max_secret_length, 12);
        assert!(config.reveal_first_letter);
        assert_eq!(config.dictionary, DictionarySource::Embedded);
        assert_eq!(
            config.state,
            StateLocation::File(PathBuf::from("mot_du_jour.json"))
        );
    }

    #[test]
    fn first_editable_column_follows_hint() {
        let mut config = GameConfig::default();
        assert_eq!(config.first_editable_column(), 1);
        config.reveal_first_letter = false;
        assert_eq!(config.first_editable_column(), 0);
    }
}
