//! Implementation of `tokenutil count`.
//!
//! ```text
//! $ tokenutil count -l -w notes.txt todo.txt
//!        2       6 notes.txt
//!       14      51 todo.txt
//!       16      57 total
//! ```
//!
//! With no files the single row is labelled `stdin` and no total is printed.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use tku_core::{DisplayConfig, InputSource, ModelHandle, TiktokenTokenizer, count_batch};

use crate::CountArgs;

fn display_config(args: &CountArgs) -> DisplayConfig {
    DisplayConfig {
        lines: args.lines,
        words: args.words,
        tokens: args.tokens,
        chars: args.chars,
    }
}

/// Run the `tokenutil count` command.
///
/// The model is resolved before the first file is read, even when the
/// token column is disabled; an unknown model is then reported per file.
///
/// # Errors
///
/// Returns an error only if stdout or stderr cannot be written.
pub fn run(args: &CountArgs, model: &str) -> Result<()> {
    let config = display_config(args);
    let sources = InputSource::from_args(&args.files);
    let model = ModelHandle::resolve(&TiktokenTokenizer, model);

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();
    let totals = count_batch(&sources, &config, &model, &mut out, &mut err)
        .context("cannot write count output")?;

    tracing::debug!(
        model = model.model(),
        sources = sources.len(),
        measured = totals.sources(),
        "count finished"
    );
    Ok(())
}
