//! Canonical book registry
//!
//! Static tables for the 66-book Protestant and 73-book Catholic canons,
//! with a spelling-variant index able to resolve book codes, display names
//! and aliases to their canonical entry.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::types::{CanonMode, Testament};

/// One canonical book. Identity is the lowercase 3-letter `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub testament: Testament,
    pub aliases: &'static [&'static str],
}

const fn book(
    id: &'static str,
    name: &'static str,
    testament: Testament,
    aliases: &'static [&'static str],
) -> BookDefinition {
    BookDefinition { id, name, testament, aliases }
}

use crate::types::Testament::{OldTestament as OT, NewTestament as NT};

static OLD_TESTAMENT_BOOKS: [BookDefinition; 39] = [
    book("gen", "Genesis", OT, &[]),
    book("exo", "Exodus", OT, &[]),
    book("lev", "Leviticus", OT, &[]),
    book("num", "Numbers", OT, &[]),
    book("deu", "Deuteronomy", OT, &[]),
    book("jos", "Joshua", OT, &[]),
    book("jdg", "Judges", OT, &[]),
    book("rut", "Ruth", OT, &[]),
    book("1sa", "1 Samuel", OT, &["I Samuel"]),
    book("2sa", "2 Samuel", OT, &["II Samuel"]),
    book("1ki", "1 Kings", OT, &["I Kings"]),
    book("2ki", "2 Kings", OT, &["II Kings"]),
    book("1ch", "1 Chronicles", OT, &["I Chronicles"]),
    book("2ch", "2 Chronicles", OT, &["II Chronicles"]),
    book("ezr", "Ezra", OT, &[]),
    book("neh", "Nehemiah", OT, &[]),
    book("est", "Esther", OT, &[]),
    book("job", "Job", OT, &[]),
    book("psa", "Psalms", OT, &["Psalm"]),
    book("pro", "Proverbs", OT, &[]),
    book("ecc", "Ecclesiastes", OT, &["Qoheleth"]),
    book("sng", "Song of Songs", OT, &["Song of Solomon", "Canticles"]),
    book("isa", "Isaiah", OT, &[]),
    book("jer", "Jeremiah", OT, &[]),
    book("lam", "Lamentations", OT, &[]),
    book("ezk", "Ezekiel", OT, &[]),
    book("dan", "Daniel", OT, &[]),
    book("hos", "Hosea", OT, &[]),
    book("jol", "Joel", OT, &[]),
    book("amo", "Amos", OT, &[]),
    book("oba", "Obadiah", OT, &[]),
    book("jon", "Jonah", OT, &[]),
    book("mic", "Micah", OT, &[]),
    book("nam", "Nahum", OT, &[]),
    book("hab", "Habakkuk", OT, &[]),
    book("zep", "Zephaniah", OT, &[]),
    book("hag", "Haggai", OT, &[]),
    book("zec", "Zechariah", OT, &[]),
    book("mal", "Malachi", OT, &[]),
];

static NEW_TESTAMENT_BOOKS: [BookDefinition; 27] = [
    book("mat", "Matthew", NT, &[]),
    book("mrk", "Mark", NT, &[]),
    book("luk", "Luke", NT, &[]),
    book("jhn", "John", NT, &[]),
    book("act", "Acts", NT, &["Acts of the Apostles"]),
    book("rom", "Romans", NT, &[]),
    book("1co", "1 Corinthians", NT, &["I Corinthians"]),
    book("2co", "2 Corinthians", NT, &["II Corinthians"]),
    book("gal", "Galatians", NT, &[]),
    book("eph", "Ephesians", NT, &[]),
    book("php", "Philippians", NT, &[]),
    book("col", "Colossians", NT, &[]),
    book("1th", "1 Thessalonians", NT, &["I Thessalonians"]),
    book("2th", "2 Thessalonians", NT, &["II Thessalonians"]),
    book("1ti", "1 Timothy", NT, &["I Timothy"]),
    book("2ti", "2 Timothy", NT, &["II Timothy"]),
    book("tit", "Titus", NT, &[]),
    book("phm", "Philemon", NT, &[]),
    book("heb", "Hebrews", NT, &[]),
    book("jas", "James", NT, &[]),
    book("1pe", "1 Peter", NT, &["I Peter"]),
    book("2pe", "2 Peter", NT, &["II Peter"]),
    book("1jn", "1 John", NT, &["I John"]),
    book("2jn", "2 John", NT, &["II John"]),
    book("3jn", "3 John", NT, &["III John"]),
    book("jud", "Jude", NT, &[]),
    book("rev", "Revelation", NT, &["Apocalypse"]),
];

// The seven deuterocanonical books, appended after the shared 66 in the
// Catholic canon.
static DEUTEROCANONICAL_BOOKS: [BookDefinition; 7] = [
    book("tob", "Tobit", OT, &["Tobias"]),
    book("jdt", "Judith", OT, &[]),
    book("wis", "Wisdom", OT, &["Wisdom of Solomon"]),
    book("sir", "Sirach", OT, &["Ecclesiasticus", "Ben Sira"]),
    book("bar", "Baruch", OT, &[]),
    book("1ma", "1 Maccabees", OT, &["I Maccabees"]),
    book("2ma", "2 Maccabees", OT, &["II Maccabees"]),
];

lazy_static! {
    static ref PROTESTANT_66: Vec<BookDefinition> = OLD_TESTAMENT_BOOKS
        .iter()
        .chain(NEW_TESTAMENT_BOOKS.iter())
        .copied()
        .collect();

    static ref CATHOLIC_73: Vec<BookDefinition> = OLD_TESTAMENT_BOOKS
        .iter()
        .chain(NEW_TESTAMENT_BOOKS.iter())
        .chain(DEUTEROCANONICAL_BOOKS.iter())
        .copied()
        .collect();

    static ref BOOK_INDEX: HashMap<String, &'static BookDefinition> = build_book_index();
}

/// Every known spelling of every book: raw id, uppercased id, display name,
/// lowercased display name, each alias and its lowercase form. Built once,
/// read-only afterwards. No two books may claim the same key.
fn build_book_index() -> HashMap<String, &'static BookDefinition> {
    let mut index: HashMap<String, &'static BookDefinition> = HashMap::new();

    let all_books = OLD_TESTAMENT_BOOKS
        .iter()
        .chain(NEW_TESTAMENT_BOOKS.iter())
        .chain(DEUTEROCANONICAL_BOOKS.iter());

    for book in all_books {
        index.insert(book.id.to_string(), book);
        index.insert(book.id.to_uppercase(), book);
        index.insert(book.name.to_string(), book);
        index.insert(book.name.to_lowercase(), book);
        for alias in book.aliases {
            index.insert(alias.to_string(), book);
            index.insert(alias.to_lowercase(), book);
        }
    }

    index
}

/// The fixed ordered book list for a canon mode.
pub fn get_canon(mode: CanonMode) -> &'static [BookDefinition] {
    match mode {
        CanonMode::Protestant66 => &PROTESTANT_66,
        CanonMode::Catholic73 => &CATHOLIC_73,
    }
}

/// Resolve a spelling token to its book, or None.
///
/// Exact key match first, so liturgical codes resolve as written ("gen",
/// "GEN"); on a miss the lowercased token is tried once, which covers the
/// remaining case variants of names and aliases without guessing at
/// unrelated 3-letter tokens.
pub fn lookup(token: &str) -> Option<&'static BookDefinition> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if let Some(book) = BOOK_INDEX.get(token) {
        return Some(book);
    }

    BOOK_INDEX.get(&token.to_lowercase()).copied()
}

/// Whether a canonical book id belongs to the given canon.
pub fn canon_contains(mode: CanonMode, book_id: &str) -> bool {
    get_canon(mode).iter().any(|b| b.id == book_id)
}
