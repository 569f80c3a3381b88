use std::path::PathBuf;

/// Model used when none is given on the command line.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// The four measurements, in the fixed column order used for output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureKind {
    Lines,
    Words,
    Tokens,
    Chars,
}

impl MeasureKind {
    /// Column order: lines, words, tokens, chars.
    pub const ALL: [Self; 4] = [Self::Lines, Self::Words, Self::Tokens, Self::Chars];
}

/// Which columns `count` prints.
///
/// ```text
/// ┌────────┬─────────┬──────────────┐
/// │ Field  │ Flag    │ Default      │
/// ├────────┼─────────┼──────────────┤
/// │ lines  │ -l      │ off          │
/// │ words  │ -w      │ off          │
/// │ tokens │ -t      │ on           │
/// │ chars  │ -c      │ off          │
/// └────────┴─────────┴──────────────┘
/// ```
///
/// A disabled kind contributes no column at all; when every kind is
/// disabled each row is just the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayConfig {
    pub lines: bool,
    pub words: bool,
    pub tokens: bool,
    pub chars: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            lines: false,
            words: false,
            tokens: true,
            chars: false,
        }
    }
}

impl DisplayConfig {
    /// Every column enabled.
    pub fn all() -> Self {
        Self {
            lines: true,
            words: true,
            tokens: true,
            chars: true,
        }
    }

    pub fn is_enabled(&self, kind: MeasureKind) -> bool {
        match kind {
            MeasureKind::Lines => self.lines,
            MeasureKind::Words => self.words,
            MeasureKind::Tokens => self.tokens,
            MeasureKind::Chars => self.chars,
        }
    }

    /// Enabled kinds in column order.
    pub fn enabled(&self) -> impl Iterator<Item = MeasureKind> + '_ {
        MeasureKind::ALL
            .into_iter()
            .filter(move |&kind| self.is_enabled(kind))
    }
}

/// Settings for `encode`.
///
/// With `destination` set, sequences are persisted as token files and
/// nothing is rendered to stdout; `separator` is then unused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Printed between ids in textual output.
    pub separator: String,

    /// Token file path. With several sources each gets a numbered sibling,
    /// see [`crate::encode::destination_for`].
    pub destination: Option<PathBuf>,

    /// Print `Encoded N tokens.` to the error stream after the batch.
    pub report_tokens: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            destination: None,
            report_tokens: false,
        }
    }
}
