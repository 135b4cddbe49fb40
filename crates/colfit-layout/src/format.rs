//! Row formatting against a resolved display cap.

use crate::util::field_width;
use crate::{COLUMN_GAP, TRUNCATE_MARKER};

/// Formats table rows as aligned lines.
///
/// Per-column display widths are fixed at construction: each column pads to
/// `min(natural, cap)` plus the gap. Fields longer than the cap are cut to
/// the cap minus the marker width and finished with [`TRUNCATE_MARKER`] and
/// the same gap, so a truncated cell occupies exactly the footprint of a
/// full-width cell in its column.
pub struct RowFormatter {
    display: Vec<usize>,
    max_width: isize,
}

impl RowFormatter {
    /// Builds a formatter from natural column widths and the display cap
    /// produced by [`resolve_max_width`](crate::resolve_max_width).
    pub fn new(natural: &[usize], max_width: isize) -> Self {
        let display = natural
            .iter()
            .map(|&w| (w as isize).min(max_width).max(0) as usize)
            .collect();
        RowFormatter { display, max_width }
    }

    /// Formats one row.
    ///
    /// Rows shorter than the column count stop early: missing trailing
    /// fields emit nothing. With a cap of zero or less every non-empty
    /// field collapses to the marker.
    pub fn format_row<S: AsRef<str>>(&self, row: &[S]) -> String {
        let mut line = String::new();
        for (i, field) in row.iter().enumerate() {
            let field = field.as_ref();
            let width = field_width(field);
            if width as isize > self.max_width {
                let keep = (self.max_width - TRUNCATE_MARKER.len() as isize).max(0) as usize;
                line.extend(field.chars().take(keep));
                line.push_str(TRUNCATE_MARKER);
                line.push_str(COLUMN_GAP);
            } else {
                let cell = self.display.get(i).copied().unwrap_or(0) + COLUMN_GAP.len();
                line.push_str(field);
                line.push_str(&" ".repeat(cell.saturating_sub(width)));
            }
        }
        line
    }

    /// Formats all rows lazily, one line per row.
    pub fn format_rows<'a, S: AsRef<str>>(
        &'a self,
        rows: &'a [Vec<S>],
    ) -> impl Iterator<Item = String> + 'a {
        rows.iter().map(|row| self.format_row(row))
    }
}
