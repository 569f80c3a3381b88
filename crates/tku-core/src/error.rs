use std::io;
use std::path::PathBuf;

/// Failure to turn a model identifier into an encoder.
///
/// Resolution is configuration, not I/O: the same identifier fails the same
/// way every time, so callers resolve once and reuse the outcome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenizerError {
    #[error("unknown model {model:?}: {reason}")]
    UnknownModel { model: String, reason: String },
}

/// A failure confined to one input source.
///
/// The batch pipelines report these on the error stream and move on to the
/// next source; none of them stops an invocation.
///
/// ```text
/// ┌─────────────┬─────────────────────────────────────────────────────┐
/// │ Variant     │ Effect on the source                                │
/// ├─────────────┼─────────────────────────────────────────────────────┤
/// │ Open        │ skipped, nothing printed for it                     │
/// │ Read        │ skipped, nothing printed for it                     │
/// │ Model       │ count: tokens reported as 0 / encode: skipped       │
/// │ Destination │ encode: no token file written for it                │
/// └─────────────┴─────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{label}: open: {source}")]
    Open {
        label: String,
        #[source]
        source: io::Error,
    },

    #[error("{label}: read: {source}")]
    Read {
        label: String,
        #[source]
        source: io::Error,
    },

    #[error("{label}: tokenize: {source}")]
    Model {
        label: String,
        #[source]
        source: TokenizerError,
    },

    #[error("{label}: write {}: {source}", .path.display())]
    Destination {
        label: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Display label of the source the error belongs to.
    pub fn label(&self) -> &str {
        match self {
            Self::Open { label, .. }
            | Self::Read { label, .. }
            | Self::Model { label, .. }
            | Self::Destination { label, .. } => label,
        }
    }
}
