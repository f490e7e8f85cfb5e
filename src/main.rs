#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradebook
//!
//! Interactive entry point for the grade tracker: parses the command line,
//! sets up logging, loads the grade file, and hands control to the menu
//! shell.

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use gradebook::{persistence::DEFAULT_GRADE_FILE, shell::Shell, store::Store};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Command-line options for the gradebook binary.
#[derive(Debug, Clone)]
struct Opts {
    /// Path to the grade file.
    file: PathBuf,
}

/// Parse the command line arguments and return an `Opts`
fn options() -> Opts {
    let file = long("file")
        .short('f')
        .help("Path to the grade file")
        .argument::<PathBuf>("PATH")
        .fallback(PathBuf::from(DEFAULT_GRADE_FILE));

    construct!(Opts { file })
        .to_options()
        .descr("A personal grade tracker")
        .run()
}

/// Loads the store and runs the interactive shell to completion.
fn run(opts: Opts) -> Result<()> {
    let store = Store::open(opts.file.clone())
        .with_context(|| format!("Failed to load grade file `{}`", opts.file.display()))?;

    println!("{}", "Grade Calculator".bold());

    let stdin = io::stdin();
    Shell::new(stdin.lock(), io::stdout(), store).run()
}

fn main() {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let opts = options();

    if let Err(e) = run(opts) {
        eprintln!("{}", format!("{e:#}").bright_red());
        std::process::exit(1);
    }
}
