//! Implementation of `tokenutil encode`.
//!
//! ```text
//! $ printf 'hello world' | tokenutil encode -s ,
//! 15339,1917
//!
//! $ tokenutil encode -t -g tokens.gob a.txt b.txt
//! Encoded 42 tokens.                      (stderr; files tokens.1.gob, tokens.2.gob)
//! ```

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use tku_core::{EncodeConfig, InputSource, ModelHandle, TiktokenTokenizer, encode_batch};

use crate::EncodeArgs;

fn encode_config(args: &EncodeArgs) -> EncodeConfig {
    EncodeConfig {
        separator: args.separator.clone(),
        destination: args.gobfile.clone(),
        report_tokens: args.tokens,
    }
}

/// Run the `tokenutil encode` command.
///
/// # Errors
///
/// Returns an error only if stdout or stderr cannot be written. Files that
/// fail to open, an unknown model, and unwritable token files are reported
/// on stderr.
pub fn run(args: &EncodeArgs, model: &str) -> Result<()> {
    let config = encode_config(args);
    let sources = InputSource::from_args(&args.files);
    let model = ModelHandle::resolve(&TiktokenTokenizer, model);

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();
    let summary = encode_batch(&sources, &config, &model, &mut out, &mut err)
        .context("cannot write encode output")?;

    tracing::debug!(
        model = model.model(),
        encoded = summary.encoded,
        failed = summary.failed,
        tokens = summary.tokens,
        "encode finished"
    );
    Ok(())
}
