//! Implementation of `tokenutil inspect`.
//!
//! Reads a token file written by `encode --gobfile` and prints its ids the
//! same way `encode` renders them, so
//! `tokenutil inspect -s , out.gob` matches `tokenutil encode -s , in.txt`.

use std::fs;
use std::io::{self, BufWriter, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use tku_core::TokenSequence;
use tku_core::encode::render_tokens;

use crate::InspectArgs;

fn load(path: &Path) -> Result<TokenSequence> {
    let bytes = fs::read(path).with_context(|| format!("{}: read", path.display()))?;
    let ids = tku_wire::read_sequence(&bytes)
        .with_context(|| format!("{}: decode token file", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), tokens = ids.len(), "loaded token file");
    Ok(TokenSequence::new(ids))
}

/// Run the `tokenutil inspect` command.
///
/// # Errors
///
/// Returns an error only if stdout or stderr cannot be written. An
/// unreadable or malformed token file is reported on stderr.
pub fn run(args: &InspectArgs) -> Result<()> {
    match load(&args.file) {
        Ok(tokens) => {
            let mut out = BufWriter::new(io::stdout().lock());
            render_tokens(&tokens, &args.separator, &mut out)
                .and_then(|()| out.flush())
                .context("cannot write inspect output")?;
        }
        Err(e) => {
            writeln!(io::stderr(), "tokenutil: {e:#}").context("cannot write to stderr")?;
        }
    }
    Ok(())
}
