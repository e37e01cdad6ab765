//! Guess feedback calculation and representation
//!
//! Each position of a guess gets a [`Verdict`]:
//! - Correct: same letter at the same position in the secret
//! - Present: letter appears somewhere else in the secret
//! - Absent: letter does not appear in the secret
//!
//! Present is not capped by how many times a letter occurs in the secret.
//! A letter that occurs once in the secret is Present at every non-Correct
//! position where the guess repeats it. Existing players rely on this exact
//! marking, so it differs from the usual Wordle rule on purpose.

use super::Word;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Emoji square for share lines and history
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdicts for a whole guess, one per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Both words must have the same length; the game session rejects
    /// other guesses before they get here.
    ///
    /// # Algorithm
    /// For each position: exact match is Correct, otherwise the letter is
    /// Present if the secret contains it anywhere, otherwise Absent.
    ///
    /// # Examples
    /// ```
    /// use mot_du_jour::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("animal").unwrap();
    /// let secret = Word::new("maison").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(feedback.verdicts()[2], Verdict::Correct); // I
    /// assert_eq!(feedback.verdicts()[5], Verdict::Absent); // L
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let verdicts = guess
            .letters()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                if secret.letter_at(i) == Some(letter) {
                    Verdict::Correct
                } else if secret.has_letter(letter) {
                    Verdict::Present
                } else {
                    Verdict::Absent
                }
            })
            .collect();

        Self(verdicts)
    }

    /// Get the per-position verdicts
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A guess wins iff every verdict is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count the Correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the Present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn eval(guess: &str, secret: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn feedback_all_correct() {
        let feedback = eval("MAISON", "MAISON");
        assert_eq!(feedback.verdicts(), &[Correct; 6]);
        assert!(feedback.is_win());
        assert_eq!(feedback.count_correct(), 6);
    }

    #[test]
    fn feedback_animal_against_maison() {
        // A(present) N(present) I(correct) M(present) A(present) L(absent)
        let feedback = eval("ANIMAL", "MAISON");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Correct, Present, Present, Absent]
        );
        assert!(!feedback.is_win());
        assert_eq!(feedback.count_correct(), 1);
        assert_eq!(feedback.count_present(), 4);
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = eval("LUTTE", "BRICO");
        assert_eq!(feedback.verdicts(), &[Absent; 5]);
    }

    #[test]
    fn feedback_repeated_letters_not_capped() {
        // SEPIA has a single E, already matched at position 1, yet every other E
        // in the guess is still marked Present
        let feedback = eval("EEEEE", "SEPIA");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Correct, Present, Present, Present]
        );
    }

    #[test]
    fn feedback_repeated_letter_single_in_secret() {
        // ALLER vs TABLE: one L in TABLE, both L's in the guess are flagged
        let feedback = eval("ALLER", "TABLE");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_accents_are_folded_before_comparison() {
        let feedback = eval("élève", "ELEVE");
        assert!(feedback.is_win());
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = eval("ANIMAL", "MAISON");
        assert_eq!(feedback.to_emoji(), "🟨🟨🟩🟨🟨⬜");
    }

    #[test]
    fn feedback_symmetry() {
        // A word against itself always wins
        for word in ["pomme", "château", "zèbre", "a"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::evaluate(&w, &w).is_win());
        }
    }
}
