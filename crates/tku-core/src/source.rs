use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::SourceError;

/// Label used for the implicit standard-input source.
pub const STDIN_LABEL: &str = "stdin";

/// One unit of input: a named file or standard input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// Sources for the positional arguments of a command. No arguments
    /// means a single standard-input source.
    pub fn from_args<P: AsRef<Path>>(paths: &[P]) -> Vec<Self> {
        if paths.is_empty() {
            return vec![Self::Stdin];
        }
        paths
            .iter()
            .map(|p| Self::Path(p.as_ref().to_path_buf()))
            .collect()
    }

    /// The name printed next to this source's results.
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => STDIN_LABEL.to_string(),
            Self::Path(path) => path.display().to_string(),
        }
    }

    /// Read the whole source into memory.
    ///
    /// The file handle is dropped before this returns, on success and on
    /// every error path.
    pub fn read_all(&self) -> Result<Vec<u8>, SourceError> {
        match self {
            Self::Stdin => read_stream(STDIN_LABEL, io::stdin().lock()),
            Self::Path(path) => {
                let file = File::open(path).map_err(|source| SourceError::Open {
                    label: self.label(),
                    source,
                })?;
                read_stream(&self.label(), file)
            }
        }
    }
}

/// Drain `reader` to the end.
///
/// A read error discards everything read so far; the source is reported as
/// failed rather than measured on a truncated prefix.
pub fn read_stream<R: Read>(label: &str, mut reader: R) -> Result<Vec<u8>, SourceError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| SourceError::Read {
            label: label.to_string(),
            source,
        })?;
    Ok(bytes)
}
