//! Natural column widths, measured from the data.

use crate::util::field_width;

/// Returns the length of the longest field in each column.
///
/// The result has one entry per column, where the column count is the
/// longest row's field count; rows shorter than that contribute nothing to
/// the trailing columns. An empty table yields an empty vector.
pub fn natural_widths<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        if row.len() > widths.len() {
            widths.resize(row.len(), 0);
        }
        for (i, field) in row.iter().enumerate() {
            widths[i] = widths[i].max(field_width(field.as_ref()));
        }
    }
    widths
}
