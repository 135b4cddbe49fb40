//! Command line surface and the read → layout → print pipeline.

use std::io::{self, BufWriter, Read, Write};

use clap::Parser;
use colfit_layout::{natural_widths, resolve_max_width, RowFormatter};

use crate::error::ColfitError;

/// Align delimited columns from stdin to the terminal width.
#[derive(Debug, Parser)]
#[command(name = "colfit", version)]
#[command(about = "Align delimited columns to fit the screen")]
#[command(long_about = "Reads delimited rows from stdin, sizes every column to its \
    longest field, and prints the table as aligned columns. Columns that would push \
    a row past the screen width are truncated with a '..' marker, narrowest \
    columns first kept whole.")]
pub struct Cli {
    /// Field delimiter used to split input rows.
    #[arg(short, long, default_value_t = ',', value_name = "CHAR")]
    pub delimiter: char,

    /// Screen width in columns, overriding terminal detection.
    #[arg(short = 'w', long, value_name = "COLS")]
    pub screen_width: Option<usize>,
}

/// Gets the current terminal width, or None if not available.
pub(crate) fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// Picks the width budget. An explicit override wins unconditionally; a
/// detected width must be usable or the run is aborted before any input is
/// read.
fn screen_width(
    explicit: Option<usize>,
    detect: impl FnOnce() -> Option<usize>,
) -> Result<usize, ColfitError> {
    match explicit {
        Some(width) => Ok(width),
        None => match detect() {
            Some(width) if width > 0 => Ok(width),
            _ => Err(ColfitError::TerminalWidth),
        },
    }
}

/// Reads the whole table into memory. The allocator needs every column's
/// longest field before the first line can be sized, so there is no
/// streaming path.
fn read_table<R: Read>(input: R, delimiter: u8) -> Result<Vec<Vec<String>>, ColfitError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Runs the full pipeline against arbitrary streams.
///
/// The terminal query is injected so callers without a TTY (tests, other
/// front ends) can supply their own.
pub fn run<R, W, F>(cli: &Cli, input: R, mut output: W, detect: F) -> Result<(), ColfitError>
where
    R: Read,
    W: Write,
    F: FnOnce() -> Option<usize>,
{
    if !cli.delimiter.is_ascii() {
        return Err(ColfitError::Delimiter(cli.delimiter));
    }
    let width = screen_width(cli.screen_width, detect)?;

    let rows = read_table(input, cli.delimiter as u8)?;
    let widths = natural_widths(&rows);
    let formatter = RowFormatter::new(&widths, resolve_max_width(width, &widths));

    for line in formatter.format_rows(&rows) {
        writeln!(output, "{line}")?;
    }
    output.flush()?;
    Ok(())
}

/// Entry point used by the binary: stdin to stdout, real terminal query.
pub fn run_stdio(cli: &Cli) -> Result<(), ColfitError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        cli,
        stdin.lock(),
        BufWriter::new(stdout.lock()),
        terminal_width,
    )
}
