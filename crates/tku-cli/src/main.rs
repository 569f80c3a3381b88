//! `tokenutil`: count lines, words, tokens and characters, or turn text
//! into token ids for a named model.
//!
//! # Command overview
//!
//! ```text
//! tokenutil <COMMAND> [OPTIONS]
//!
//! Commands:
//!   count      Count lines, words, tokens and characters in files or stdin
//!   encode     Print or persist the token ids of files or stdin
//!   inspect    Print the token ids stored in a token file
//!   help       Print help information
//!
//! Global options:
//!   -m, --model <NAME>   Model whose vocabulary is used [default: gpt-3.5-turbo]
//!   -v, --verbose        Log per-source diagnostics to stderr
//!   -h, --help           Print help
//!   -V, --version        Print version
//! ```
//!
//! # Exit codes
//!
//! | Code | Meaning                                       |
//! |------|-----------------------------------------------|
//! | 0    | Success, including per-file failures          |
//! | 1    | stdout or stderr could not be written         |
//! |      | (a closed stdout pipe exits 0 silently)       |
//! | 2    | Invalid command line                          |
//!
//! A file that cannot be opened, an unknown model, or an unwritable token
//! file is reported on stderr and processing continues with the next file.
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tku_core::DEFAULT_MODEL;
use tracing_subscriber::EnvFilter;

mod cmd_count;
mod cmd_encode;
mod cmd_inspect;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Utility for token operations.
#[derive(Parser)]
#[command(name = "tokenutil", version, about = "Utility for token operations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Model name to encode for.
    #[arg(
        short,
        long,
        global = true,
        env = "TOKENUTIL_MODEL",
        default_value = DEFAULT_MODEL
    )]
    model: String,

    /// Log per-source diagnostics to stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Count lines, words, tokens, and characters in file(s) or from stdin.
    Count(CountArgs),
    /// Tokenize and encode file(s) or stdin.
    Encode(EncodeArgs),
    /// Print the token ids stored in a token file.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `tokenutil count`.
///
/// Each flag switches one column on or off. Columns always print in the
/// order lines, words, tokens, chars regardless of flag order.
///
/// ```text
/// ┌──────────────┬─────────┬───────────────────────────────┐
/// │ Flag         │ Default │ Column                        │
/// ├──────────────┼─────────┼───────────────────────────────┤
/// │ -l, --lines  │ off     │ newline count                 │
/// │ -w, --words  │ off     │ whitespace-separated words    │
/// │ -t, --tokens │ on      │ tokens under --model          │
/// │ -c, --chars  │ off     │ Unicode characters            │
/// └──────────────┴─────────┴───────────────────────────────┘
/// ```
///
/// Every flag takes an optional `=true`/`=false`; `--tokens=false` is the
/// only way to drop the token column.
#[derive(clap::Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct CountArgs {
    /// Files to count. Reads stdin when none are given.
    pub files: Vec<PathBuf>,

    /// Count lines.
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub lines: bool,

    /// Count words.
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub words: bool,

    /// Count tokens.
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub tokens: bool,

    /// Count characters.
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub chars: bool,
}

/// Arguments for `tokenutil encode`.
///
/// Without `--gobfile` the ids of each input are printed joined by
/// `--separator`, one input per output line group. With `--gobfile` each
/// input's ids are written to a token file instead and nothing is printed;
/// several inputs get numbered files (`out.gob` → `out.1.gob`, `out.2.gob`).
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Files to encode. Reads stdin when none are given.
    pub files: Vec<PathBuf>,

    /// Separator string between tokens.
    #[arg(short, long, default_value = "\n")]
    pub separator: String,

    /// Output token count stats to stderr.
    #[arg(short, long)]
    pub tokens: bool,

    /// Write the ids to this token file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub gobfile: Option<PathBuf>,
}

/// Arguments for `tokenutil inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Token file written by `encode --gobfile`.
    pub file: PathBuf,

    /// Separator string between tokens.
    #[arg(short, long, default_value = "\n")]
    pub separator: String,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Count(args) => cmd_count::run(args, &cli.model),
        Commands::Encode(args) => cmd_encode::run(args, &cli.model),
        Commands::Inspect(args) => cmd_inspect::run(args),
    };

    if let Err(e) = result {
        // A reader that stops early (`tokenutil encode big.txt | head`) is
        // not a failure.
        if is_broken_pipe(&e) {
            return;
        }
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|cause| cause.kind() == io::ErrorKind::BrokenPipe)
}
