use std::error;
use std::fmt;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading path markup.
///
/// Each variant carries the character offset in the input at which the
/// problem was detected, followed by a short description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Malformed number or flag, or a character which cannot start any token.
    Lex(usize, String),
    /// Structurally invalid data: unknown leading command, missing arguments.
    Parse(usize, String),
    /// `F` directive with a bad argument, repeated, or after geometry has begun.
    FillRule(usize, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(pos, reason) => write!(f, "Lex error at {pos}: {reason}"),
            Error::Parse(pos, reason) => write!(f, "Parse error at {pos}: {reason}"),
            Error::FillRule(pos, reason) => write!(f, "Fill rule error at {pos}: {reason}"),
        }
    }
}

impl error::Error for Error {}

impl Error {
    /// Character offset in the input at which the error was raised.
    pub fn position(&self) -> usize {
        match self {
            Error::Lex(pos, _) | Error::Parse(pos, _) | Error::FillRule(pos, _) => *pos,
        }
    }

    /// All path errors reject the entire input; hosts typically surface
    /// these as an 'invalid data' condition.
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Error::Lex(..) | Error::Parse(..) | Error::FillRule(..))
    }
}
