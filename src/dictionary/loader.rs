//! Word list loading utilities
//!
//! Reads raw (not yet canonical) words from a JSON array, a plain text list,
//! or the embedded constant.

use super::EMBEDDED_WORDS;
use crate::config::DictionarySource;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to obtain a usable word list
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read at all
    #[error("dictionary source {path} is unreachable: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source was read but is not an array of strings
    #[error("dictionary is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read raw words from a source
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Malformed` if a JSON file is not an array of strings.
pub fn read_source(source: &DictionarySource) -> Result<Vec<String>, LoadError> {
    match source {
        DictionarySource::Embedded => Ok(embedded_words()),
        DictionarySource::File(path) => load_from_file(path),
    }
}

/// Load words from a file
///
/// Files ending in `.txt` hold one word per line; anything else is parsed as JSON.
///
/// # Errors
///
/// See [`read_source`].
///
/// # Examples
/// ```no_run
/// use mot_du_jour::dictionary::loader::load_from_file;
///
/// let words = load_from_file("frenchWords.json").unwrap();
/// println!("Read {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_text = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

    if is_text {
        Ok(parse_lines(&content))
    } else {
        parse_json(&content)
    }
}

/// Parse a JSON array of strings
///
/// # Errors
///
/// Returns `LoadError::Malformed` for anything that is not an array of strings.
pub fn parse_json(content: &str) -> Result<Vec<String>, LoadError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse one word per line, skipping blank lines
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// The embedded list as owned strings
#[must_use]
pub fn embedded_words() -> Vec<String> {
    EMBEDDED_WORDS.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_json_array() {
        let words = parse_json(r#"["maison", "élève", "chat"]"#).unwrap();
        assert_eq!(words, vec!["maison", "élève", "chat"]);
    }

    #[test]
    fn parse_json_rejects_non_array() {
        assert!(matches!(
            parse_json(r#"{"words": ["maison"]}"#),
            Err(LoadError::Malformed(_))
        ));
        assert!(matches!(parse_json("[1, 2, 3]"), Err(LoadError::Malformed(_))));
        assert!(matches!(parse_json("not json"), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn parse_lines_skips_blanks() {
        let words = parse_lines("maison\n\n  chat  \n\nlune\n");
        assert_eq!(words, vec!["maison", "chat", "lune"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here/frenchWords.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("unreachable"));
    }

    #[test]
    fn load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"["pomme", "poire"]"#).unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["pomme", "poire"]);
    }

    #[test]
    fn load_text_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "pomme\npoire\n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["pomme", "poire"]);
    }

    #[test]
    fn embedded_source_never_fails() {
        let words = read_source(&DictionarySource::Embedded).unwrap();
        assert_eq!(words.len(), EMBEDDED_WORDS.len());
    }
}
