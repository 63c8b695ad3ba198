//! Serialization of verse records for downstream consumers
//!
//! Records go out as line-delimited JSON with the stable external field
//! names (version, testament, bookId, bookName, chapter, verse, reference,
//! text, key).

use std::io::Write;

use anyhow::{Context, Result};

use crate::types::VerseRecord;

/// Serialize one record to its JSON line (no trailing newline).
pub fn ndjson_line(record: &VerseRecord) -> Result<String> {
    serde_json::to_string(record)
        .with_context(|| format!("Failed to serialize verse record: {}", record.key))
}

/// Write one record as a JSON line.
pub fn write_verse_ndjson<W: Write>(writer: &mut W, record: &VerseRecord) -> Result<()> {
    let line = ndjson_line(record)?;
    writeln!(writer, "{}", line)
        .with_context(|| format!("Failed to write verse record: {}", record.key))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Testament;

    fn sample_record() -> VerseRecord {
        VerseRecord {
            version: "KJV".to_string(),
            testament: Testament::OldTestament,
            book_id: "gen".to_string(),
            book_name: "Genesis".to_string(),
            chapter: 1,
            verse: 1,
            reference: "Genesis 1:1".to_string(),
            text: "In the beginning God created the heavens and the earth.".to_string(),
            key: "KJV:gen:1:1".to_string(),
        }
    }

    #[test]
    fn test_ndjson_field_names_are_stable() {
        let line = ndjson_line(&sample_record()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let obj = value.as_object().unwrap();

        for field in ["version", "testament", "bookId", "bookName", "chapter", "verse", "reference", "text", "key"] {
            assert!(obj.contains_key(field), "missing field: {}", field);
        }
        assert_eq!(obj.len(), 9, "exactly the nine external fields");
        assert_eq!(obj["testament"], "OT");
        assert_eq!(obj["bookId"], "gen");
        assert_eq!(obj["chapter"], 1);
    }

    #[test]
    fn test_write_verse_ndjson_one_line_per_record() {
        let mut out: Vec<u8> = Vec::new();
        write_verse_ndjson(&mut out, &sample_record()).unwrap();
        write_verse_ndjson(&mut out, &sample_record()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_round_trip() {
        let record = sample_record();
        let line = ndjson_line(&record).unwrap();
        let back: VerseRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back, record);
    }
}
