//! Free-text verse reference parsing
//!
//! Resolves user-typed references like "Genesis 1:1", "GEN 1:1",
//! "1 Kings 8:10" or "Psalm 23" to a canonical book id with chapter and
//! optional verse.

use lazy_static::lazy_static;
use regex::Regex;

use crate::canon;

lazy_static! {
    // Book name (may itself contain digits, "1 Kings"), then chapter,
    // then an optional :verse or .verse part.
    static ref RE_VERSE_REF: Regex =
        Regex::new(r"^(.*?)\s+(\d+)(?:\s*[:.]\s*(\d+))?$").unwrap();
}

/// A parsed, canon-resolved verse reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseReference {
    pub book_id: String,
    pub chapter: u32,
    pub verse: Option<u32>,
}

/// Parse a free-text reference string into components.
/// Returns None if the string cannot be parsed or the book is unknown.
pub fn parse_verse_reference(input: &str) -> Option<VerseReference> {
    // Normalize whitespace first
    let normalized = input.trim().split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return None;
    }

    let caps = RE_VERSE_REF.captures(&normalized)?;

    // "Gen." style abbreviations carry a trailing dot
    let book_token = caps.get(1)?.as_str().trim_end_matches('.').trim();
    let chapter = caps.get(2)?.as_str().parse::<u32>().ok()?;
    if chapter == 0 {
        return None;
    }
    let verse = caps.get(3).and_then(|m| m.as_str().parse::<u32>().ok());

    let book = canon::lookup(book_token)?;

    Some(VerseReference {
        book_id: book.id.to_string(),
        chapter,
        verse,
    })
}

/// Format a reference back to display form, "Genesis 1:1" or "Psalms 23".
pub fn format_verse_reference(reference: &VerseReference) -> String {
    let book_name = canon::lookup(&reference.book_id)
        .map(|b| b.name.to_string())
        .unwrap_or_else(|| reference.book_id.clone());

    match reference.verse {
        Some(verse) => format!("{} {}:{}", book_name, reference.chapter, verse),
        None => format!("{} {}", book_name, reference.chapter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_reference() {
        let parsed = parse_verse_reference("Genesis 1:1").unwrap();
        assert_eq!(parsed.book_id, "gen");
        assert_eq!(parsed.chapter, 1);
        assert_eq!(parsed.verse, Some(1));
    }

    #[test]
    fn test_parse_book_code_reference() {
        let parsed = parse_verse_reference("GEN 1:1").unwrap();
        assert_eq!(parsed.book_id, "gen");

        let parsed = parse_verse_reference("jhn 3:16").unwrap();
        assert_eq!(parsed.book_id, "jhn");
        assert_eq!(parsed.verse, Some(16));
    }

    #[test]
    fn test_parse_numbered_book_name() {
        let parsed = parse_verse_reference("1 Kings 8:10").unwrap();
        assert_eq!(parsed.book_id, "1ki");
        assert_eq!(parsed.chapter, 8);
        assert_eq!(parsed.verse, Some(10));
    }

    #[test]
    fn test_parse_chapter_only() {
        let parsed = parse_verse_reference("Psalm 23").unwrap();
        assert_eq!(parsed.book_id, "psa");
        assert_eq!(parsed.chapter, 23);
        assert_eq!(parsed.verse, None);
    }

    #[test]
    fn test_parse_multiword_book_name() {
        let parsed = parse_verse_reference("Song of Songs 2:1").unwrap();
        assert_eq!(parsed.book_id, "sng");
    }

    #[test]
    fn test_parse_abbreviation_with_dot() {
        let parsed = parse_verse_reference("Gen. 1:1").unwrap();
        assert_eq!(parsed.book_id, "gen");
    }

    #[test]
    fn test_parse_dot_separated_verse() {
        let parsed = parse_verse_reference("Genesis 1.1").unwrap();
        assert_eq!(parsed.verse, Some(1));
    }

    #[test]
    fn test_parse_extra_whitespace() {
        let parsed = parse_verse_reference("  Genesis   1 : 1  ").unwrap();
        assert_eq!(parsed.book_id, "gen");
        assert_eq!(parsed.chapter, 1);
        assert_eq!(parsed.verse, Some(1));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_verse_reference("").is_none());
        assert!(parse_verse_reference("Genesis").is_none());
        assert!(parse_verse_reference("Narnia 1:1").is_none());
        assert!(parse_verse_reference("Genesis 0").is_none());
    }

    #[test]
    fn test_format_round_trip() {
        let parsed = parse_verse_reference("gen 1:1").unwrap();
        assert_eq!(format_verse_reference(&parsed), "Genesis 1:1");

        let parsed = parse_verse_reference("Psalm 23").unwrap();
        assert_eq!(format_verse_reference(&parsed), "Psalms 23");
    }
}
