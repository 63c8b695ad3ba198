//! Line-oriented USFM stream parser
//!
//! Consumes one file's lines in order, tracks the current book and chapter,
//! buffers an in-progress verse across wrapped lines, and hands each
//! completed verse record to the caller's sink. Book codes resolve through
//! the canon registry; content of books outside the active canon is skipped
//! until the next book declaration.

use crate::canon;
use crate::helpers::strip_leading_tag;
use crate::logger::warn;
use crate::types::{ParserConfig, ParseStats, VerseRecord};
use crate::usfm_parser::types::{ParserCursor, PartialVerse};
use crate::usfm_parser::verse_builder::assemble;

pub struct UsfmParser {
    config: ParserConfig,
}

impl UsfmParser {
    pub fn new(config: ParserConfig) -> Self {
        UsfmParser { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an ordered sequence of lines from one source file.
    ///
    /// The sink is invoked synchronously, once per valid verse, in file
    /// order. The cursor lives and dies inside this call, so a parser can
    /// be reused across files without state leaking between them.
    pub fn parse_lines<I, F>(&self, lines: I, sink: &mut F) -> ParseStats
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnMut(VerseRecord),
    {
        let mut cursor = ParserCursor::default();
        let mut stats = ParseStats::default();

        for line in lines {
            stats.lines += 1;
            let trimmed = line.as_ref().trim();

            if trimmed.is_empty() {
                continue;
            }

            // \id GEN ... -- book declaration. Chapter resets whether or
            // not the code resolves.
            if let Some(rest) = marker_argument(trimmed, "\\id") {
                self.flush(&mut cursor, sink, &mut stats);
                let code = rest.split_whitespace().next().unwrap_or("");
                cursor.chapter = 0;
                cursor.book_id = match canon::lookup(code) {
                    Some(book) if canon::canon_contains(self.config.canon_mode, book.id) => {
                        Some(book.id.to_string())
                    }
                    Some(book) => {
                        warn(&format!(
                            "Book '{}' is not in the active canon, skipping its content",
                            book.id
                        ));
                        stats.unresolved_books += 1;
                        None
                    }
                    None => {
                        warn(&format!(
                            "Unrecognized book code '{}', skipping content until the next \\id",
                            code
                        ));
                        stats.unresolved_books += 1;
                        None
                    }
                };
                continue;
            }

            // Outside a recognized book every other line type is a no-op.
            if cursor.book_id.is_none() {
                continue;
            }

            // \c N -- chapter declaration
            if let Some(rest) = marker_argument(trimmed, "\\c") {
                match rest.split_whitespace().next().and_then(|n| n.parse::<u32>().ok()) {
                    Some(n) => {
                        self.flush(&mut cursor, sink, &mut stats);
                        cursor.chapter = n;
                    }
                    None => {
                        warn(&format!("Ignoring chapter marker with non-numeric argument: {}", trimmed));
                        stats.malformed_directives += 1;
                    }
                }
                continue;
            }

            // \v N text... -- verse declaration, text may continue on
            // following lines
            if let Some(rest) = marker_argument(trimmed, "\\v") {
                let mut parts = rest.splitn(2, char::is_whitespace);
                let number_token = parts.next().unwrap_or("");
                let seed_text = parts.next().unwrap_or("").trim();

                match number_token.parse::<u32>() {
                    Ok(n) => {
                        self.flush(&mut cursor, sink, &mut stats);
                        cursor.pending = Some(PartialVerse {
                            // book_id is Some, checked above
                            book_id: cursor.book_id.clone().unwrap_or_default(),
                            chapter: cursor.chapter,
                            verse: n,
                            text: seed_text.to_string(),
                        });
                    }
                    Err(_) => {
                        warn(&format!("Ignoring verse marker with non-numeric argument: {}", trimmed));
                        stats.malformed_directives += 1;
                    }
                }
                continue;
            }

            // Any other non-blank line: continuation text while a verse is
            // open (paragraph and poetry markers interrupt the text
            // physically, not semantically), otherwise ignored.
            if let Some(ref mut pending) = cursor.pending {
                let fragment = if trimmed.starts_with('\\') {
                    strip_leading_tag(trimmed)
                } else {
                    trimmed.to_string()
                };
                pending.append_fragment(&fragment);
            }
        }

        self.flush(&mut cursor, sink, &mut stats);
        stats
    }

    /// Close out any pending verse: clean it, and either emit a record or
    /// drop it. The buffer is cleared in every case.
    fn flush<F>(&self, cursor: &mut ParserCursor, sink: &mut F, stats: &mut ParseStats)
    where
        F: FnMut(VerseRecord),
    {
        let Some(pending) = cursor.pending.take() else {
            return;
        };

        let cleaned = crate::helpers::clean_verse_text(&pending.text);

        // Structural artifacts reduce to nothing; a verse marker seen
        // before any chapter marker has no valid address. Neither is
        // an error.
        if cleaned.is_empty() || pending.chapter == 0 || pending.verse == 0 {
            stats.verses_dropped += 1;
            return;
        }

        let record = assemble(&self.config.version, &pending, cleaned);
        stats.verses_emitted += 1;
        sink(record);
    }
}

/// If `line` starts with the given marker followed by whitespace (or is the
/// bare marker), return the trimmed argument text. Returns None for longer
/// markers sharing the prefix, so "\\id" does not swallow "\\ide".
fn marker_argument<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    if rest.is_empty() {
        Some("")
    } else if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}
