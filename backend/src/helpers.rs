use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    // \f + footnote text \f* -- commentary, not verse text, drops entirely
    static ref RE_FOOTNOTE: Regex = Regex::new(r"\\f\b.*?\\f\*").unwrap();

    // \x + Gen 2:4 \x* -- cross references drop the same way
    static ref RE_CROSSREF: Regex = Regex::new(r"\\x\b.*?\\x\*").unwrap();

    // Any remaining marker: \wj, \wj*, \add, \q1, \+nd ...
    // Only the marker goes, wrapped text stays.
    static ref RE_TAG: Regex = Regex::new(r"\\\+?[a-z]+[0-9]*\*?").unwrap();

    // Word-level attribute annotations left behind after the \w wrapper
    // is stripped: |lemma="grace" strong="G5485", or a bare |G5485
    static ref RE_WORD_ATTRS: Regex =
        Regex::new(r#"\|\s*[\w.:-]+(?:\s*=\s*"[^"]*")?(?:\s+[\w.:-]+\s*=\s*"[^"]*")*"#).unwrap();

    // One leading marker token on a continuation line (\p, \q2, ...)
    static ref RE_LEADING_TAG: Regex = Regex::new(r"^\\\+?[a-z]+[0-9]*\*?").unwrap();
}

/// Strip USFM markup from raw verse text.
///
/// The steps run in a fixed order: footnote spans, cross-reference spans,
/// residual markers, word attributes, decorative symbols, whitespace
/// normalization. Each replacement inserts a space so that words on either
/// side of removed markup never join; the final collapse removes doubles.
///
/// Total and idempotent. A whitespace-only result comes back as "".
pub fn clean_verse_text(raw: &str) -> String {
    let mut s = RE_FOOTNOTE.replace_all(raw, " ").to_string();
    s = RE_CROSSREF.replace_all(&s, " ").to_string();
    s = RE_TAG.replace_all(&s, " ").to_string();
    s = RE_WORD_ATTRS.replace_all(&s, " ").to_string();
    s = s.replace(['\u{00B6}', '\u{00A7}'], " ");
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove a single leading marker token from a continuation line,
/// keeping everything after it. Lines without a marker pass through
/// trimmed.
pub fn strip_leading_tag(line: &str) -> String {
    let trimmed = line.trim();
    RE_LEADING_TAG.replace(trimmed, "").trim().to_string()
}
