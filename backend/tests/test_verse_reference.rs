use scriptura_backend::verse_reference::{
    format_verse_reference, parse_verse_reference,
};

#[test]
fn test_parse_display_name_reference() {
    let parsed = parse_verse_reference("Genesis 1:1").unwrap();
    assert_eq!(parsed.book_id, "gen");
    assert_eq!(parsed.chapter, 1);
    assert_eq!(parsed.verse, Some(1));
}

#[test]
fn test_parse_code_reference_any_case() {
    for token in ["GEN 1:1", "gen 1:1", "Gen 1:1"] {
        let parsed = parse_verse_reference(token);
        assert!(parsed.is_some(), "should parse: {}", token);
        assert_eq!(parsed.unwrap().book_id, "gen", "token: {}", token);
    }
}

#[test]
fn test_parse_numbered_and_multiword_books() {
    assert_eq!(parse_verse_reference("1 Kings 8:10").unwrap().book_id, "1ki");
    assert_eq!(parse_verse_reference("2 Corinthians 5:17").unwrap().book_id, "2co");
    assert_eq!(parse_verse_reference("Song of Songs 2:1").unwrap().book_id, "sng");
    assert_eq!(parse_verse_reference("Song of Solomon 2:1").unwrap().book_id, "sng");
}

#[test]
fn test_parse_chapter_only_reference() {
    let parsed = parse_verse_reference("Psalm 23").unwrap();
    assert_eq!(parsed.book_id, "psa");
    assert_eq!(parsed.chapter, 23);
    assert_eq!(parsed.verse, None);
}

#[test]
fn test_parse_deuterocanonical_reference() {
    let parsed = parse_verse_reference("Tobit 4:7").unwrap();
    assert_eq!(parsed.book_id, "tob");
}

#[test]
fn test_parse_rejects_unknown_or_malformed() {
    assert!(parse_verse_reference("").is_none());
    assert!(parse_verse_reference("Genesis").is_none());
    assert!(parse_verse_reference("Narnia 1:1").is_none());
    assert!(parse_verse_reference("12:34").is_none());
}

#[test]
fn test_format_uses_display_name() {
    let parsed = parse_verse_reference("jhn 3:16").unwrap();
    assert_eq!(format_verse_reference(&parsed), "John 3:16");

    let parsed = parse_verse_reference("1ki 8").unwrap();
    assert_eq!(format_verse_reference(&parsed), "1 Kings 8");
}
