//! Bio cleaning tool.
//!
//! Reads one bio per line from a file (or stdin when the path is `-`) and
//! prints one result per line.
//!
//! ## Usage
//!
//! ```bash
//! # Space-joined tokens (default)
//! ./target/release/bio_tokenize bios.txt
//!
//! # Cleaned text without tokenization
//! ./target/release/bio_tokenize bios.txt basic
//!
//! # Both, tab-separated: tokens<TAB>cleaned
//! cat bios.txt | ./target/release/bio_tokenize - both
//! ```
//!
//! The completion line and timing go to stderr so stdout stays one line per
//! bio. Set `RUST_LOG=debug` for resource loading details.
//!
//! ## Resources
//!
//! - `BIONORM_STOPWORDS`: stopword file replacing the built-in list
//! - `BIONORM_VERB_EXCEPTIONS`: WordNet `.exc` file extending the irregular verbs
//! - `BIONORM_VERBS`: verb list extending the known verbs

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use bionorm_core::frame::{tokenize_bios_with, BioTable, SOURCE_COLUMN, TOKENS_COLUMN};
use bionorm_core::pipeline::{default_normalizer, BioNormalizer, LexiconPaths};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Tokens,
    Basic,
    Both,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        usage();
    }

    let mode = match args.get(2).map(String::as_str) {
        None | Some("tokens") => Mode::Tokens,
        Some("basic") => Mode::Basic,
        Some("both") => Mode::Both,
        Some(other) => {
            eprintln!("unknown mode: {other}");
            usage();
        }
    };

    if let Err(e) = run(&args[1], mode) {
        eprintln!("bio_tokenize: {e}");
        process::exit(1);
    }
}

fn usage() -> ! {
    eprintln!("Usage: bio_tokenize <path|-> [tokens|basic|both]");
    process::exit(1);
}

fn run(path: &str, mode: Mode) -> Result<(), Box<dyn Error>> {
    let paths = lexicon_paths();
    let custom;
    let normalizer = if paths.is_empty() {
        default_normalizer()
    } else {
        custom = BioNormalizer::from_lexicon(&paths)?;
        &custom
    };

    let input = read_input(path)?;
    let table = BioTable::from_bios(input.lines());
    log::debug!("loaded {} bios from {}", table.len(), path);

    let start = Instant::now();
    let mut stderr = io::stderr();
    let table = match mode {
        Mode::Basic => table,
        Mode::Tokens | Mode::Both => tokenize_bios_with(normalizer, table, &mut stderr)?,
    };
    let cleaned = match mode {
        Mode::Tokens => Vec::new(),
        Mode::Basic | Mode::Both => {
            table.map_column(SOURCE_COLUMN, |bio| normalizer.basic_clean(bio))?
        }
    };
    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match mode {
        Mode::Tokens => {
            for tokens in table.text_column(TOKENS_COLUMN)? {
                writeln!(out, "{tokens}")?;
            }
        }
        Mode::Basic => {
            for line in &cleaned {
                writeln!(out, "{line}")?;
            }
        }
        Mode::Both => {
            let tokens = table.text_column(TOKENS_COLUMN)?;
            for (tokens, line) in tokens.iter().zip(&cleaned) {
                writeln!(out, "{tokens}\t{line}")?;
            }
        }
    }
    out.flush()?;

    eprintln!(
        "Processed {} bios in {:.3} s",
        fmt_count(table.len() as u64),
        elapsed.as_secs_f64()
    );
    Ok(())
}

fn lexicon_paths() -> LexiconPaths {
    let var = |name: &str| env::var_os(name).map(PathBuf::from);
    LexiconPaths {
        stopwords: var("BIONORM_STOPWORDS"),
        verb_exceptions: var("BIONORM_VERB_EXCEPTIONS"),
        verbs: var("BIONORM_VERBS"),
    }
}

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
