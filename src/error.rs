//! Error types

#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

/// Error unmarshalling a byte sequence whose length is not 16.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LengthError {
    len: usize,
}

impl LengthError {
    pub(crate) const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Returns the length of the rejected input.
    pub const fn input_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid length: expected 16 bytes, found {}", self.len)
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    kind: ErrorKind,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub(crate) enum ErrorKind {
    /// Input ended before 32 hex digits were read.
    TooShort,
    /// A non-hex character appeared in the payload.
    Character { found: char, index: usize },
    /// A hyphen appeared away from a group boundary, or twice in a row.
    Hyphen { index: usize },
    /// Characters remained after the payload and closing delimiter.
    Trailing { index: usize },
    /// Opening and closing brackets did not pair up.
    Delimiter,
}

impl ParseError {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid string representation: ")?;
        match self.kind {
            ErrorKind::TooShort => write!(f, "expected 32 hex digits"),
            ErrorKind::Character { found, index } => {
                write!(f, "unexpected character {:?} at {}", found, index)
            }
            ErrorKind::Hyphen { index } => write!(f, "misplaced hyphen at {}", index),
            ErrorKind::Trailing { index } => write!(f, "trailing characters at {}", index),
            ErrorKind::Delimiter => write!(f, "unbalanced brackets"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{LengthError, ParseError};

    impl std::error::Error for LengthError {}

    impl std::error::Error for ParseError {}
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::{ErrorKind, LengthError, ParseError};

    /// Describes the cause in error messages
    #[test]
    fn describes_the_cause_in_error_messages() {
        assert_eq!(
            LengthError::new(15).to_string(),
            "invalid length: expected 16 bytes, found 15"
        );
        assert_eq!(
            ParseError::new(ErrorKind::Character {
                found: 'g',
                index: 5
            })
            .to_string(),
            "invalid string representation: unexpected character 'g' at 5"
        );
        assert_eq!(
            ParseError::new(ErrorKind::Delimiter).to_string(),
            "invalid string representation: unbalanced brackets"
        );
    }
}
