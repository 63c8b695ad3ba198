// Module exports for the USFM stream parser

pub mod types;
pub mod line_parser;
pub mod verse_builder;
pub mod integration;

// Re-export the main API
pub use line_parser::UsfmParser;
pub use integration::{parse_file, parse_directory, DirStats};
