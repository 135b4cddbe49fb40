//! colfit: align delimited columns from stdin to the terminal width.
//!
//! The layout work (width profiling, cap allocation, row formatting) lives
//! in [`colfit_layout`]; this crate adds the thin I/O shell around it:
//! option parsing, terminal width detection, delimited input reading, and
//! line output.
//!
//! ```text
//! $ colfit <<EOF
//! aa,a,aaa
//! b,bbb,bb
//! ccc,cc,c
//! EOF
//! aa   a    aaa
//! b    bbb  bb
//! ccc  cc   c
//! ```

pub mod cli;
pub mod error;

pub use cli::{run, run_stdio, Cli};
pub use error::ColfitError;
