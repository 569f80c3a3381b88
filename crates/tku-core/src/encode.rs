//! Output side of `encode`: textual rendering and token files.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::tokenizer::TokenSequence;

/// Write the ids of `tokens` joined by `separator`, then a single newline.
///
/// An empty sequence produces just the newline.
pub fn render_tokens<W: Write>(
    tokens: &TokenSequence,
    separator: &str,
    out: &mut W,
) -> io::Result<()> {
    for (n, id) in tokens.as_slice().iter().enumerate() {
        if n > 0 {
            out.write_all(separator.as_bytes())?;
        }
        write!(out, "{id}")?;
    }
    out.write_all(b"\n")
}

/// Serialise `tokens` into the token file format and write it to `path` in
/// one call. The file is closed before this returns.
pub fn persist_tokens(tokens: &TokenSequence, path: &Path) -> io::Result<()> {
    let bytes = tku_wire::write_sequence(tokens.as_slice());
    fs::write(path, bytes)
}

/// Where source `index` (1-based) of a batch of `total` sources is persisted.
///
/// A single source writes to `destination` unchanged. With several sources
/// each gets its own file so none overwrites another:
///
/// ```text
/// ┌──────────────────┬───────┬───────────────────┐
/// │ destination      │ index │ path              │
/// ├──────────────────┼───────┼───────────────────┤
/// │ out/tokens.gob   │ 1     │ out/tokens.1.gob  │
/// │ out/tokens.gob   │ 2     │ out/tokens.2.gob  │
/// │ tokens           │ 3     │ tokens.3          │
/// └──────────────────┴───────┴───────────────────┘
/// ```
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidInput`] when `destination` has no file
/// name (`..`, `/`, or an empty path).
pub fn destination_for(destination: &Path, index: usize, total: usize) -> io::Result<PathBuf> {
    if destination.file_name().is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "token file path has no file name",
        ));
    }
    if total <= 1 {
        return Ok(destination.to_path_buf());
    }
    let stem = destination
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match destination.extension() {
        Some(ext) => format!("{stem}.{index}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{index}"),
    };
    Ok(destination.with_file_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ids: Vec<u32>, separator: &str) -> String {
        let mut out = Vec::new();
        render_tokens(&TokenSequence::new(ids), separator, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn comma_separated() {
        assert_eq!(render(vec![15339, 1917], ","), "15339,1917\n");
    }

    #[test]
    fn default_separator_is_one_id_per_line() {
        assert_eq!(render(vec![15339, 1917, 198], "\n"), "15339\n1917\n198\n");
    }

    #[test]
    fn multi_character_separator() {
        assert_eq!(render(vec![1, 2, 3], ", "), "1, 2, 3\n");
    }

    #[test]
    fn empty_sequence_is_a_bare_newline() {
        assert_eq!(render(Vec::new(), ","), "\n");
    }

    #[test]
    fn single_source_uses_destination_verbatim() {
        let dest = Path::new("out/tokens.gob");
        assert_eq!(
            destination_for(dest, 1, 1).unwrap(),
            PathBuf::from("out/tokens.gob")
        );
    }

    #[test]
    fn several_sources_get_numbered_files() {
        let dest = Path::new("out/tokens.gob");
        assert_eq!(
            destination_for(dest, 1, 2).unwrap(),
            PathBuf::from("out/tokens.1.gob")
        );
        assert_eq!(
            destination_for(dest, 2, 2).unwrap(),
            PathBuf::from("out/tokens.2.gob")
        );
        assert_eq!(
            destination_for(Path::new("tokens"), 3, 3).unwrap(),
            PathBuf::from("tokens.3")
        );
    }

    #[test]
    fn destination_without_file_name_is_rejected() {
        for dest in ["..", "out/..", "/", ""] {
            for total in [1, 2] {
                let err = destination_for(Path::new(dest), 1, total).unwrap_err();
                assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{dest:?}");
            }
        }
    }

    #[test]
    fn persisted_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seq.tks");
        let tokens = TokenSequence::new(vec![15339, 1917, 198]);
        persist_tokens(&tokens, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(tku_wire::read_sequence(&bytes).unwrap(), tokens.into_inner());
    }

    #[test]
    fn persist_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/seq.tks");
        let err = persist_tokens(&TokenSequence::default(), &path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
