//! Word list loading utilities
//!
//! Loads custom word lists from files or converts the embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file, one per line
///
/// Blank lines and entries that are not valid 5-letter words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hurdle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse newline-separated words, skipping invalid entries and duplicates
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut seen = rustc_hash::FxHashSet::default();
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hurdle::wordlists::loader::words_from_slice;
/// use hurdle::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[]).is_empty());
    }

    #[test]
    fn parse_words_normalizes_and_dedups() {
        let words = parse_words("CRANE\n\n  slate \ncrane\nb4d!!\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
