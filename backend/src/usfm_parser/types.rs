//! Parser-local state for one file's parse
//!
//! Both structs are small owned values. A cursor belongs to exactly one
//! file's parse and is never shared or reused across files.

/// A verse under construction: opened by a verse marker, grown by
/// continuation lines, closed by the next structural marker or end of file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialVerse {
    /// Canonical book id (e.g. "gen")
    pub book_id: String,
    /// Chapter number at the time the verse marker was seen
    pub chapter: u32,
    /// Verse number from the marker
    pub verse: u32,
    /// Raw accumulated text, markup still present
    pub text: String,
}

impl PartialVerse {
    /// Append a continuation fragment with a single-space separator.
    pub fn append_fragment(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(fragment);
    }
}

/// Per-file parser position: current book, current chapter, and the
/// verse buffered across wrapped lines.
#[derive(Debug, Clone, Default)]
pub struct ParserCursor {
    /// Canonical id of the current book, None while outside a recognized book
    pub book_id: Option<String>,
    /// Current chapter, 0 until the first chapter marker
    pub chapter: u32,
    /// Verse currently being accumulated
    pub pending: Option<PartialVerse>,
}
