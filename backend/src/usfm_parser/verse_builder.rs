//! Verse record assembly
//!
//! Builds the final normalized record once a verse is known to be complete
//! and its cleaned text is non-empty.

use crate::canon;
use crate::types::{Testament, VerseRecord};
use crate::usfm_parser::types::PartialVerse;

/// Build a `VerseRecord` from a completed verse and its cleaned text.
///
/// Book name and testament come from the canon registry. The registry
/// lookup cannot normally miss here, the parser only opens verses for
/// resolved books, but an unknown id still yields a record with the raw
/// id as display name rather than a failure.
pub fn assemble(version: &str, pending: &PartialVerse, text: String) -> VerseRecord {
    let (book_name, testament) = match canon::lookup(&pending.book_id) {
        Some(book) => (book.name.to_string(), book.testament),
        None => (pending.book_id.clone(), Testament::OldTestament),
    };

    let reference = format!("{} {}:{}", book_name, pending.chapter, pending.verse);
    let key = format!(
        "{}:{}:{}:{}",
        version, pending.book_id, pending.chapter, pending.verse
    );

    VerseRecord {
        version: version.to_string(),
        testament,
        book_id: pending.book_id.clone(),
        book_name,
        chapter: pending.chapter,
        verse: pending.verse,
        reference,
        text,
        key,
    }
}
