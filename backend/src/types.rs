use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Which testament a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Testament {
    #[serde(rename = "OT")]
    OldTestament,
    #[serde(rename = "NT")]
    NewTestament,
}

impl Testament {
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::OldTestament => "OT",
            Testament::NewTestament => "NT",
        }
    }
}

/// The fixed book set to parse against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanonMode {
    #[serde(rename = "protestant66")]
    Protestant66,
    #[serde(rename = "catholic73")]
    Catholic73,
}

impl Default for CanonMode {
    fn default() -> Self {
        CanonMode::Protestant66
    }
}

// Custom error for parsing CanonMode from string
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid CanonMode value: {0}")]
pub struct ParseCanonModeError(String);

impl FromStr for CanonMode {
    type Err = ParseCanonModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protestant66" => Ok(CanonMode::Protestant66),
            "catholic73" => Ok(CanonMode::Catholic73),
            _ => Err(ParseCanonModeError(s.to_string())),
        }
    }
}

/// Parser configuration: the translation tag stamped into every record
/// and the canon the source files are checked against.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub version: String,
    pub canon_mode: CanonMode,
}

impl ParserConfig {
    pub fn new(version: &str, canon_mode: CanonMode) -> Self {
        ParserConfig {
            version: version.to_string(),
            canon_mode,
        }
    }
}

/// One normalized Scripture verse, the output unit of the pipeline.
///
/// Field names are a stable external interface, downstream consumers
/// rely on exactly these eight fields plus `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub version: String,
    pub testament: Testament,
    #[serde(rename = "bookId")]
    pub book_id: String,
    #[serde(rename = "bookName")]
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub reference: String,
    pub text: String,
    pub key: String,
}

/// Statistics from parsing one line sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Number of input lines consumed
    pub lines: usize,
    /// Number of verse records handed to the sink
    pub verses_emitted: usize,
    /// Verses discarded (empty after cleaning, or no chapter context)
    pub verses_dropped: usize,
    /// Book declarations that did not resolve to a book of the active canon
    pub unresolved_books: usize,
    /// Chapter/verse directives with a non-numeric argument
    pub malformed_directives: usize,
}

impl ParseStats {
    /// Fold another file's counters into this one.
    pub fn add(&mut self, other: &ParseStats) {
        self.lines += other.lines;
        self.verses_emitted += other.verses_emitted;
        self.verses_dropped += other.verses_dropped;
        self.unresolved_books += other.unresolved_books;
        self.malformed_directives += other.malformed_directives;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canon_mode_from_str() {
        assert_eq!(CanonMode::from_str("protestant66"), Ok(CanonMode::Protestant66));
        assert_eq!(CanonMode::from_str("Catholic73"), Ok(CanonMode::Catholic73));
        assert!(CanonMode::from_str("anglican80").is_err());
    }

    #[test]
    fn test_canon_mode_default() {
        assert_eq!(CanonMode::default(), CanonMode::Protestant66);
    }

    #[test]
    fn test_testament_as_str() {
        assert_eq!(Testament::OldTestament.as_str(), "OT");
        assert_eq!(Testament::NewTestament.as_str(), "NT");
    }

    #[test]
    fn test_parse_stats_add() {
        let mut a = ParseStats { lines: 10, verses_emitted: 3, verses_dropped: 1, unresolved_books: 0, malformed_directives: 1 };
        let b = ParseStats { lines: 5, verses_emitted: 2, verses_dropped: 0, unresolved_books: 1, malformed_directives: 0 };
        a.add(&b);
        assert_eq!(a.lines, 15);
        assert_eq!(a.verses_emitted, 5);
        assert_eq!(a.verses_dropped, 1);
        assert_eq!(a.unresolved_books, 1);
        assert_eq!(a.malformed_directives, 1);
    }
}
