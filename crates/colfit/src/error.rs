//! Error surface for the colfit CLI.

/// Everything that can abort a colfit run.
///
/// There are no retries: the first error ends the run, and output already
/// flushed stays where it is.
#[derive(Debug, thiserror::Error)]
pub enum ColfitError {
    /// Malformed delimited input (bad quoting, invalid UTF-8).
    #[error("malformed input: {0}")]
    InputFormat(String),

    /// Failure reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No usable terminal width and no explicit override.
    #[error("cannot determine terminal width; pass --screen-width")]
    TerminalWidth,

    /// The delimiter does not fit in a single byte.
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    Delimiter(char),
}

impl From<csv::Error> for ColfitError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => ColfitError::Io(io),
            _ => ColfitError::InputFormat(message),
        }
    }
}
