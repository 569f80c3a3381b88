#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod config;
pub mod encode;
pub mod error;
pub mod format;
pub mod measure;
pub mod pipeline;
pub mod source;
pub mod tokenizer;
pub mod totals;

pub use config::{DEFAULT_MODEL, DisplayConfig, EncodeConfig, MeasureKind};
pub use error::{SourceError, TokenizerError};
pub use measure::Measurement;
pub use pipeline::{EncodeSummary, count_batch, encode_batch};
pub use source::InputSource;
pub use tokenizer::{Encoder, ModelHandle, TiktokenTokenizer, TokenSequence, Tokenizer};
pub use totals::RunTotals;
