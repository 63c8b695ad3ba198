pub mod types;
pub mod logger;
pub mod helpers;
pub mod canon;
pub mod verse_reference;
pub mod export_helpers;

pub mod usfm_parser;

/// File extensions recognized as USFM sources when walking a directory.
pub static USFM_FILE_EXTENSIONS: &[&str] = &["usfm", "sfm"];
