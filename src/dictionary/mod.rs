//! French dictionary
//!
//! Holds the canonical word list, answers membership queries for guesses and
//! picks random candidates for the daily word. Loading is the one step of
//! startup that can be slow or fail, so the dictionary tracks whether it is
//! ready and answers every membership query with `false` until it is.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use loader::LoadError;

use crate::config::{DictionarySource, FALLBACK_WORD};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, error, info, warn};

/// Progress of the dictionary load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load has completed yet
    Pending,
    /// Words are available
    Ready,
    /// The last load failed; the dictionary is empty
    Failed,
}

impl LoadState {
    /// Why lookups cannot be answered yet, if they cannot
    #[must_use]
    pub const fn unavailable_reason(self) -> Option<&'static str> {
        match self {
            Self::Ready => None,
            Self::Pending => Some("Dictionary not yet loaded"),
            Self::Failed => Some("Dictionary failed to load, no word can be checked"),
        }
    }
}

/// Canonical word list with membership and sampling
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<Word>,
    index: FxHashSet<Word>,
    state: LoadState,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// An empty dictionary waiting for [`Dictionary::load`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashSet::default(),
            state: LoadState::Pending,
        }
    }

    /// A ready dictionary built from raw words
    ///
    /// Blank entries are skipped. Duplicates are kept in the sampling pool.
    ///
    /// # Examples
    /// ```
    /// use mot_du_jour::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["maison", "élève"]);
    /// assert!(dict.contains("ELEVE"));
    /// assert!(dict.contains("Maison"));
    /// assert!(!dict.contains("chien"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Sync,
    {
        let mut dict = Self::new();
        dict.install(words.into_iter().collect());
        dict
    }

    /// Load words from a source, replacing any previous content
    ///
    /// On failure the dictionary is left empty in the `Failed` state, and
    /// sampling falls back to the fixed word.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`LoadError`] when the source is unreachable or malformed.
    pub fn load(&mut self, source: &DictionarySource) -> Result<usize, LoadError> {
        match loader::read_source(source) {
            Ok(raw) => {
                self.install(raw);
                info!(count = self.entries.len(), "Loaded French words");
                Ok(self.entries.len())
            }
            Err(err) => {
                self.entries.clear();
                self.index.clear();
                self.state = LoadState::Failed;
                error!(error = %err, "Error loading French words");
                Err(err)
            }
        }
    }

    fn install<S: AsRef<str> + Sync>(&mut self, raw: Vec<S>) {
        // Order is preserved so seeded sampling stays reproducible
        self.entries = raw
            .par_iter()
            .filter_map(|w| Word::new(w.as_ref()).ok())
            .collect();
        self.index = self.entries.iter().cloned().collect();
        self.state = LoadState::Ready;
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// Number of entries, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a word is in the dictionary
    ///
    /// The word is canonicalized first. Before a successful load this logs a
    /// warning and returns `false`.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if let Some(reason) = self.state.unavailable_reason() {
            warn!("{reason}");
            return false;
        }

        let Ok(word) = Word::new(word) else {
            return false;
        };

        let valid = self.index.contains(&word);
        debug!(word = %word, valid, "Checked word");
        valid
    }

    /// Pick a uniformly random entry no longer than `max_length` letters
    ///
    /// Returns the fixed fallback word when no entry qualifies.
    pub fn sample<R: Rng + ?Sized>(&self, max_length: usize, rng: &mut R) -> Word {
        if self.entries.is_empty() {
            error!("No words available in dictionary");
            return fallback_word();
        }

        let eligible: Vec<&Word> = self
            .entries
            .iter()
            .filter(|w| w.len() <= max_length)
            .collect();

        if let Some(&word) = eligible.choose(rng) {
            word.clone()
        } else {
            warn!(max_length, "No words short enough, using default word");
            fallback_word()
        }
    }
}

/// The word used when the dictionary cannot supply one
///
/// # Panics
/// Will not panic - the fallback constant is a non-empty word.
#[must_use]
pub fn fallback_word() -> Word {
    Word::new(FALLBACK_WORD).expect("fallback word is not empty")
}
