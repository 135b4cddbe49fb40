//! Column layout for delimited tabular data.
//!
//! Three stages, composed in order:
//!
//! 1. [`natural_widths`] scans the table for the longest field in each
//!    column.
//! 2. [`resolve_max_width`] turns those widths plus a screen budget into a
//!    single display cap shared by every column.
//! 3. [`RowFormatter`] renders rows against the cap, padding fields that
//!    fit and truncating the rest.
//!
//! ```rust
//! use colfit_layout::{natural_widths, resolve_max_width, RowFormatter};
//!
//! let rows = vec![
//!     vec!["aa", "a", "aaa"],
//!     vec!["b", "bbb", "bb"],
//!     vec!["ccc", "cc", "c"],
//! ];
//! let widths = natural_widths(&rows);
//! assert_eq!(widths, vec![3, 3, 3]);
//!
//! let max = resolve_max_width(80, &widths);
//! let formatter = RowFormatter::new(&widths, max);
//! let mut lines = formatter.format_rows(&rows);
//! assert_eq!(lines.next().unwrap(), "aa   a    aaa  ");
//! ```
//!
//! The stages are pure functions over in-memory data; reading input and
//! detecting the screen width belong to the caller.

mod format;
mod profile;
mod resolve;
mod util;

/// Uniform gap emitted after every column, including the last.
pub const COLUMN_GAP: &str = "  ";

/// Marker replacing the tail of a field that exceeds the display cap.
pub const TRUNCATE_MARKER: &str = "..";

pub use format::RowFormatter;
pub use profile::natural_widths;
pub use resolve::resolve_max_width;
pub use util::field_width;
