use tiktoken_rs::CoreBPE;

use crate::error::TokenizerError;

/// Token ids for one text, in order of appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSequence(Vec<u32>);

impl TokenSequence {
    pub fn new(ids: Vec<u32>) -> Self {
        Self(ids)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl From<Vec<u32>> for TokenSequence {
    fn from(ids: Vec<u32>) -> Self {
        Self(ids)
    }
}

/// A resolved vocabulary: turns text into token ids.
///
/// Implementations must be deterministic. The pipelines rely on the same
/// text producing the same sequence under the same model.
pub trait Encoder: Send + Sync {
    fn encode(&self, text: &str) -> TokenSequence;
}

/// Resolves model identifiers to encoders.
///
/// This is the only seam between the counting/encoding logic and the BPE
/// implementation, so tests can swap in a fake vocabulary.
pub trait Tokenizer {
    /// # Errors
    ///
    /// Returns [`TokenizerError::UnknownModel`] if `model` names no known
    /// vocabulary.
    fn resolve(&self, model: &str) -> Result<Box<dyn Encoder>, TokenizerError>;
}

/// [`Tokenizer`] backed by the vocabularies bundled with `tiktoken-rs`.
///
/// Model names map to encodings the way OpenAI's tiktoken does it:
/// `gpt-3.5-turbo` and `gpt-4` use `cl100k_base`, `gpt-4o` uses
/// `o200k_base`, and so on.
#[derive(Clone, Copy, Debug, Default)]
pub struct TiktokenTokenizer;

impl Tokenizer for TiktokenTokenizer {
    fn resolve(&self, model: &str) -> Result<Box<dyn Encoder>, TokenizerError> {
        let bpe = tiktoken_rs::get_bpe_from_model(model).map_err(|e| {
            TokenizerError::UnknownModel {
                model: model.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Box::new(TiktokenEncoder { bpe }))
    }
}

struct TiktokenEncoder {
    bpe: CoreBPE,
}

impl Encoder for TiktokenEncoder {
    fn encode(&self, text: &str) -> TokenSequence {
        // Special-token text such as "<|endoftext|>" in the input is treated
        // as ordinary characters.
        TokenSequence::new(self.bpe.encode_ordinary(text))
    }
}

/// The outcome of resolving the invocation's model, computed once.
///
/// A failed resolution is kept rather than retried; every source that needs
/// an encoder gets the same error back.
pub struct ModelHandle {
    model: String,
    encoder: Result<Box<dyn Encoder>, TokenizerError>,
}

impl ModelHandle {
    pub fn resolve(tokenizer: &dyn Tokenizer, model: &str) -> Self {
        let encoder = tokenizer.resolve(model);
        match &encoder {
            Ok(_) => tracing::debug!(model, "resolved tokenizer"),
            Err(e) => tracing::debug!(model, error = %e, "tokenizer resolution failed"),
        }
        Self {
            model: model.to_string(),
            encoder,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// # Errors
    ///
    /// Returns a clone of the resolution error when the model is unknown.
    pub fn encoder(&self) -> Result<&dyn Encoder, TokenizerError> {
        self.encoder.as_deref().map_err(Clone::clone)
    }
}
