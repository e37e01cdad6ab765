//! Canonical word representation
//!
//! A Word stores a word in canonical form (accents folded, upper-case) along with
//! its letters, so positions can be compared one `char` at a time.

use super::normalize;
use std::fmt;

/// A word in canonical form
///
/// Two words built from `"Élève"` and `"eleve"` are equal and hash the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from any text, canonicalizing it
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use mot_du_jour::core::Word;
    ///
    /// let word = Word::new("  château ").unwrap();
    /// assert_eq!(word.text(), "CHATEAU");
    /// assert_eq!(word.len(), 7);
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref().trim());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Get the canonical text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a `Word` holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a position, if any
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// First letter, used for the opening hint of each row
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> char {
        // Construction rejects empty words
        self.letters[0]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_canonicalizes() {
        let word = Word::new("maison").unwrap();
        assert_eq!(word.text(), "MAISON");
        assert_eq!(word.letters(), &['M', 'A', 'I', 'S', 'O', 'N']);
    }

    #[test]
    fn word_creation_folds_accents() {
        let word = Word::new("Élève").unwrap();
        assert_eq!(word.text(), "ELEVE");
        assert_eq!(word, Word::new("eleve").unwrap());
    }

    #[test]
    fn word_creation_trims() {
        assert_eq!(Word::new("  pomme\n").unwrap().text(), "POMME");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new(" \t "), Err(WordError::Empty));
    }

    #[test]
    fn word_len_counts_letters_not_bytes() {
        // "ŒUF" is 3 letters but more than 3 bytes
        let word = Word::new("œuf").unwrap();
        assert_eq!(word.len(), 3);
        assert!(word.text().len() > 3);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("lune").unwrap();
        assert_eq!(word.letter_at(0), Some('L'));
        assert_eq!(word.letter_at(3), Some('E'));
        assert_eq!(word.letter_at(4), None);
        assert_eq!(word.first_letter(), 'L');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("maison").unwrap();
        assert!(word.has_letter('M'));
        assert!(word.has_letter('N'));
        assert!(!word.has_letter('Z'));
        assert!(!word.has_letter('m'));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "forêt".parse().unwrap();
        assert_eq!(format!("{word}"), "FORET");
    }
}
