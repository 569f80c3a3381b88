use std::fmt::Write as _;

use crate::config::DisplayConfig;
use crate::measure::Measurement;

/// Width of each numeric column.
pub const FIELD_WIDTH: usize = 8;

/// Label of the summary row printed after a multi-source batch.
pub const TOTAL_LABEL: &str = "total";

/// Render one output row: an 8-wide right-aligned field per enabled kind,
/// then a space, the label, and a newline.
///
/// ```text
///        2       6       9 notes.txt
/// └──┬───┘└──┬───┘└──┬───┘ └──┬────┘
///  lines   words  tokens    label
/// ```
pub fn format_row(m: &Measurement, config: &DisplayConfig, label: &str) -> String {
    let mut row = String::new();
    for kind in config.enabled() {
        // Writing to a String cannot fail.
        let _ = write!(row, "{:>width$}", m.get(kind), width = FIELD_WIDTH);
    }
    row.push(' ');
    row.push_str(label);
    row.push('\n');
    row
}
