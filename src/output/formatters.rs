//! Formatting utilities for terminal output

use crate::core::{Verdict, normalize};
use crate::game::GuessRecord;
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

/// A letter tile colored by its verdict
#[must_use]
pub fn colored_tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A whole row of tiles separated by spaces
#[must_use]
pub fn colored_row(letters: &[char], verdicts: &[Option<Verdict>]) -> String {
    letters
        .iter()
        .enumerate()
        .map(|(i, &letter)| colored_tile(letter, verdicts.get(i).copied().flatten()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Row template showing the revealed first letter, e.g. "M _ _ _ _ _"
#[must_use]
pub fn row_template(length: usize, hint: Option<char>) -> String {
    (0..length)
        .map(|i| match (i, hint) {
            (0, Some(letter)) => letter.to_string(),
            _ => "_".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spoiler-free summary of a finished game
///
/// ```text
/// Mot du jour 2026-10-16 3/6
/// 🟨🟨🟩🟨🟨⬜
/// ...
/// ```
#[must_use]
pub fn share_text(day: NaiveDate, history: &[GuessRecord], won: bool, max_attempts: usize) -> String {
    let tries = if won {
        history.len().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("Mot du jour {day} {tries}/{max_attempts}");
    for record in history {
        text.push('\n');
        text.push_str(&record.feedback.to_emoji());
    }
    text
}

/// Canonical letters of raw input, for echoing a guess back
#[must_use]
pub fn canonical_letters(raw: &str) -> Vec<char> {
    normalize(raw.trim()).chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    fn record(guess: &str, secret: &str) -> GuessRecord {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::evaluate(&guess, &Word::new(secret).unwrap());
        GuessRecord { guess, feedback }
    }

    #[test]
    fn row_template_with_hint() {
        assert_eq!(row_template(4, Some('L')), "L _ _ _");
        assert_eq!(row_template(3, None), "_ _ _");
    }

    #[test]
    fn share_text_won() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let history = vec![record("animal", "maison"), record("maison", "maison")];

        assert_eq!(
            share_text(day, &history, true, 6),
            "Mot du jour 2026-10-16 2/6\n🟨🟨🟩🟨🟨⬜\n🟩🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_text_lost() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let history = vec![record("animal", "maison")];
        assert!(share_text(day, &history, false, 6).starts_with("Mot du jour 2026-10-16 X/6"));
    }

    #[test]
    fn canonical_letters_fold_accents() {
        assert_eq!(canonical_letters(" été "), vec!['E', 'T', 'E']);
    }

    #[test]
    fn colored_row_keeps_letters() {
        let row = colored_row(&['L', 'U'], &[Some(Verdict::Correct), None]);
        assert!(row.contains(" L "));
        assert!(row.ends_with(" U "));
    }
}
