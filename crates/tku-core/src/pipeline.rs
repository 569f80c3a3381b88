//! Batch drivers for `count` and `encode`.
//!
//! Both process sources strictly in order, one at a time, reading each
//! completely before measuring or encoding it. Per-source failures are
//! written to `err` as `tokenutil: <label>: <operation>: <cause>` and the
//! batch moves on; only a failure to write `out` or `err` themselves is
//! returned.
//!
//! ```text
//! InputSource ──read_all──▶ bytes ──decode_text──▶ &str ─┬─▶ measure ──▶ format_row ──▶ out
//!                                                        │        └──▶ RunTotals
//!                                                        └─▶ encode ─┬─▶ render_tokens ──▶ out
//!                                                                    └─▶ persist_tokens ──▶ file
//! ```

use std::io::{self, Write};

use crate::config::{DisplayConfig, EncodeConfig};
use crate::encode::{destination_for, persist_tokens, render_tokens};
use crate::error::SourceError;
use crate::format::{TOTAL_LABEL, format_row};
use crate::measure::{decode_text, measure};
use crate::source::InputSource;
use crate::tokenizer::ModelHandle;
use crate::totals::RunTotals;

/// Prefix for per-source error lines.
pub const ERROR_PREFIX: &str = "tokenutil";

/// Outcome of an `encode` batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Tokens across every source that was encoded successfully.
    pub tokens: usize,
    /// Sources whose sequence was rendered or persisted.
    pub encoded: usize,
    /// Sources skipped because of an error.
    pub failed: usize,
}

fn report<E: Write>(err: &mut E, error: &SourceError) -> io::Result<()> {
    tracing::debug!(source = error.label(), error = %error, "source failed");
    writeln!(err, "{ERROR_PREFIX}: {error}")
}

/// Measure every source and print one row per source, plus a `total` row
/// when more than one source was supplied.
///
/// An unknown model does not stop measurement: the token column reads 0,
/// the other columns are computed, and the error is reported for each
/// source. With the token column disabled the model is never consulted. Sources that cannot be opened or read print no row and add
/// nothing to the totals.
pub fn count_batch<W: Write, E: Write>(
    sources: &[InputSource],
    config: &DisplayConfig,
    model: &ModelHandle,
    out: &mut W,
    err: &mut E,
) -> io::Result<RunTotals> {
    let mut totals = RunTotals::new();

    for source in sources {
        let label = source.label();
        let bytes = match source.read_all() {
            Ok(bytes) => bytes,
            Err(e) => {
                report(err, &e)?;
                continue;
            }
        };
        let text = decode_text(&bytes);

        let encoder = if config.tokens {
            match model.encoder() {
                Ok(encoder) => Some(encoder),
                Err(cause) => {
                    report(
                        err,
                        &SourceError::Model {
                            label: label.clone(),
                            source: cause,
                        },
                    )?;
                    None
                }
            }
        } else {
            None
        };

        let m = measure(&text, encoder);
        tracing::debug!(source = %label, bytes = bytes.len(), tokens = m.tokens, "measured");
        out.write_all(format_row(&m, config, &label).as_bytes())?;
        totals.accumulate(&m);
    }

    if sources.len() > 1 {
        out.write_all(format_row(totals.sum(), config, TOTAL_LABEL).as_bytes())?;
    }
    out.flush()?;

    Ok(totals)
}

/// Encode every source, rendering each sequence to `out` or persisting it
/// to the configured destination.
///
/// With a destination and several sources, source `i` (1-based, in argument
/// order) is written to the numbered path from [`destination_for`]. When
/// `config.report_tokens` is set, `Encoded N tokens.` is written to `err`
/// after the batch.
pub fn encode_batch<W: Write, E: Write>(
    sources: &[InputSource],
    config: &EncodeConfig,
    model: &ModelHandle,
    out: &mut W,
    err: &mut E,
) -> io::Result<EncodeSummary> {
    let mut summary = EncodeSummary::default();

    for (i, source) in sources.iter().enumerate() {
        match encode_one(source, i + 1, sources.len(), config, model, out)? {
            Ok(tokens) => {
                summary.tokens += tokens;
                summary.encoded += 1;
            }
            Err(e) => {
                report(err, &e)?;
                summary.failed += 1;
            }
        }
    }
    out.flush()?;

    if config.report_tokens {
        writeln!(err, "Encoded {} tokens.", summary.tokens)?;
    }

    Ok(summary)
}

/// The outer `Result` is a failure of `out`; the inner one is a failure of
/// this source alone.
fn encode_one<W: Write>(
    source: &InputSource,
    index: usize,
    total: usize,
    config: &EncodeConfig,
    model: &ModelHandle,
    out: &mut W,
) -> io::Result<Result<usize, SourceError>> {
    let label = source.label();
    let bytes = match source.read_all() {
        Ok(bytes) => bytes,
        Err(e) => return Ok(Err(e)),
    };
    let encoder = match model.encoder() {
        Ok(encoder) => encoder,
        Err(cause) => {
            return Ok(Err(SourceError::Model {
                label,
                source: cause,
            }));
        }
    };

    let tokens = encoder.encode(&decode_text(&bytes));
    tracing::debug!(source = %label, bytes = bytes.len(), tokens = tokens.len(), "encoded");

    match &config.destination {
        Some(destination) => {
            let path = match destination_for(destination, index, total) {
                Ok(path) => path,
                Err(cause) => {
                    return Ok(Err(SourceError::Destination {
                        label,
                        path: destination.clone(),
                        source: cause,
                    }));
                }
            };
            if let Err(cause) = persist_tokens(&tokens, &path) {
                return Ok(Err(SourceError::Destination {
                    label,
                    path,
                    source: cause,
                }));
            }
            tracing::debug!(source = %label, path = %path.display(), "wrote token file");
        }
        None => render_tokens(&tokens, &config.separator, out)?,
    }

    Ok(Ok(tokens.len()))
}
