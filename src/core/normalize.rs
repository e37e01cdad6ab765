//! Accent folding and case canonicalization
//!
//! Every word that takes part in a comparison (dictionary entries, the secret word,
//! each guess) goes through [`normalize`] first, so `"Élève"`, `"ELEVE"` and
//! `"e\u{301}le\u{300}ve"` all compare equal.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold accents to their base letters and upper-case the result
///
/// Upper-casing happens before decomposition: a few characters upper-case into
/// a base letter plus a combining mark (`ǰ` becomes `J` + caron), and those marks
/// must be stripped as well for the function to stay idempotent.
///
/// # Examples
/// ```
/// use mot_du_jour::core::normalize;
///
/// assert_eq!(normalize("château"), "CHATEAU");
/// assert_eq!(normalize("Noël"), "NOEL");
/// assert_eq!(normalize(&normalize("hérisson")), normalize("hérisson"));
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_uppercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect()
}
