//! High-level ingestion API
//!
//! Parses single files or whole directory trees of USFM sources,
//! aggregating per-file statistics. A failing file is logged and counted,
//! the remaining files still parse.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::USFM_FILE_EXTENSIONS;
use crate::logger::{error, info};
use crate::types::{ParserConfig, ParseStats, VerseRecord};
use crate::usfm_parser::line_parser::UsfmParser;

/// Aggregated statistics from processing a directory tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirStats {
    /// Number of files parsed to completion
    pub files_processed: usize,
    /// Number of files that could not be opened or read
    pub files_failed: usize,
    /// Parse counters summed over all processed files
    pub totals: ParseStats,
}

/// Parse one USFM file, streaming records into the sink.
///
/// An unreadable source is the only fatal condition; everything else is
/// counted in the returned stats.
pub fn parse_file<F>(path: &Path, config: &ParserConfig, sink: &mut F) -> Result<ParseStats>
where
    F: FnMut(VerseRecord),
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open USFM source: {:?}", path))?;
    let reader = BufReader::new(file);

    let parser = UsfmParser::new(config.clone());

    let mut read_error: Option<std::io::Error> = None;
    let lines = reader.lines().map_while(|res| match res {
        Ok(line) => Some(line),
        Err(e) => {
            read_error = Some(e);
            None
        }
    });

    let stats = parser.parse_lines(lines, sink);

    if let Some(e) = read_error {
        return Err(e).with_context(|| format!("Failed reading USFM source: {:?}", path));
    }

    info(&format!(
        "{}: {} verses emitted, {} dropped",
        path.display(),
        stats.verses_emitted,
        stats.verses_dropped
    ));

    Ok(stats)
}

/// Parse every USFM file under a directory, in sorted path order.
///
/// Files that fail to read are logged and counted, the walk continues.
pub fn parse_directory<F>(dir: &Path, config: &ParserConfig, sink: &mut F) -> Result<DirStats>
where
    F: FnMut(VerseRecord),
{
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {:?}", dir);
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_usfm_file(path))
        .collect();
    paths.sort();

    let mut dir_stats = DirStats::default();

    for path in &paths {
        match parse_file(path, config, sink) {
            Ok(stats) => {
                dir_stats.files_processed += 1;
                dir_stats.totals.add(&stats);
            }
            Err(e) => {
                error(&format!("{:#}", e));
                dir_stats.files_failed += 1;
            }
        }
    }

    info(&format!(
        "Parsed {} files ({} failed), {} verses total",
        dir_stats.files_processed, dir_stats.files_failed, dir_stats.totals.verses_emitted
    ));

    Ok(dir_stats)
}

fn is_usfm_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            USFM_FILE_EXTENSIONS.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}
