use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;

use scriptura_backend::canon;
use scriptura_backend::export_helpers::write_verse_ndjson;
use scriptura_backend::logger;
use scriptura_backend::types::{CanonMode, ParserConfig};
use scriptura_backend::usfm_parser;
use scriptura_backend::verse_reference::{format_verse_reference, parse_verse_reference};

#[derive(Parser, Debug)]
#[command(author, version, about = "Scriptura CLI", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a USFM file or directory into line-delimited JSON verse records
    #[command(arg_required_else_help = true)]
    Parse {
        /// Path to a .usfm/.sfm file, or a directory tree of them
        path: PathBuf,

        /// Translation version tag stamped into every record (e.g. "KJV")
        #[arg(long, env = "SCRIPTURA_VERSION")]
        version: String,

        /// The book set to parse against
        #[arg(long, value_enum, default_value_t = CanonArg::Protestant66)]
        canon: CanonArg,

        /// Write records to this file instead of stdout
        #[arg(long, value_name = "FILE_PATH")]
        output: Option<PathBuf>,
    },

    /// List the books of a canon
    Books {
        #[arg(long, value_enum, default_value_t = CanonArg::Protestant66)]
        canon: CanonArg,
    },

    /// Resolve a free-text verse reference, e.g. "Genesis 1:1" or "1 Kings 8:10"
    #[command(arg_required_else_help = true)]
    Lookup {
        /// The reference to resolve
        reference: String,
    },
}

/// Enum for the canon choices available on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CanonArg {
    Protestant66,
    Catholic73,
}

impl std::fmt::Display for CanonArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CanonArg::Protestant66 => "protestant66",
            CanonArg::Catholic73 => "catholic73",
        };
        write!(f, "{}", name)
    }
}

impl From<CanonArg> for CanonMode {
    fn from(arg: CanonArg) -> Self {
        match arg {
            CanonArg::Protestant66 => CanonMode::Protestant66,
            CanonArg::Catholic73 => CanonMode::Catholic73,
        }
    }
}

fn run_parse(
    path: &PathBuf,
    version: &str,
    canon_mode: CanonMode,
    output: Option<&PathBuf>,
) -> Result<()> {
    let config = ParserConfig::new(version, canon_mode);

    let mut writer: Box<dyn Write> = match output {
        Some(p) => {
            let file = File::create(p)
                .with_context(|| format!("Failed to create output file: {:?}", p))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    // The sink cannot return an error to the parser, the first write
    // failure is kept and the rest of the stream discarded.
    let mut write_error: Option<anyhow::Error> = None;
    let mut sink = |record| {
        if write_error.is_none() {
            if let Err(e) = write_verse_ndjson(&mut writer, &record) {
                write_error = Some(e);
            }
        }
    };

    let emitted = if path.is_dir() {
        let stats = usfm_parser::parse_directory(path, &config, &mut sink)?;
        if stats.files_processed == 0 && stats.files_failed == 0 {
            logger::warn(&format!("No USFM files found under {:?}", path));
        }
        stats.totals.verses_emitted
    } else {
        let stats = usfm_parser::parse_file(path, &config, &mut sink)?;
        stats.verses_emitted
    };

    if let Some(e) = write_error {
        return Err(e);
    }
    writer.flush().context("Failed to flush output")?;

    logger::info(&format!("Done, {} verse records written", emitted));
    Ok(())
}

fn run_books(canon_mode: CanonMode) -> Result<()> {
    for book in canon::get_canon(canon_mode) {
        println!("{}\t{}\t{}", book.id, book.name, book.testament.as_str());
    }
    Ok(())
}

fn run_lookup(reference: &str) -> Result<()> {
    let parsed = parse_verse_reference(reference)
        .ok_or_else(|| anyhow!("Could not resolve reference: {}", reference))?;

    let book = canon::lookup(&parsed.book_id)
        .ok_or_else(|| anyhow!("Unknown book id: {}", parsed.book_id))?;

    println!("{}", format_verse_reference(&parsed));
    println!("{}\t{}\t{}", book.id, book.name, book.testament.as_str());
    Ok(())
}

fn main() {
    // A missing .env file is fine, variables may come from the shell.
    let _ = dotenv();

    logger::init_logging();

    let cli = Cli::parse();

    let command_result = match cli.command {
        Commands::Parse { path, version, canon, output } => {
            run_parse(&path, &version, canon.into(), output.as_ref())
        }

        Commands::Books { canon } => run_books(canon.into()),

        Commands::Lookup { reference } => run_lookup(&reference),
    };

    if let Err(e) = command_result {
        eprintln!("Error executing command: {:#}", e);
        exit(1);
    }
}
