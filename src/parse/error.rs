use std::fmt;
use thiserror::Error;

/// The numeric part of a dice group that failed to parse.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Field {
    Count,
    Sides,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Count => "count",
            Self::Sides => "sides",
        })
    }
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    #[error("expected an integer constant or [count]d{{sides}}[d{{sides}}...] notation, got: {0:?}")]
    InvalidAddend(String),
    #[error("failed to parse dice notation {piece:?}: expected {field} to be a natural number in [count]d{{sides}}[d{{sides}}...] notation, got: {token:?}")]
    InvalidNumber {
        piece: String,
        field: Field,
        token: String,
    },
    #[error("failed to parse dice notation {piece:?}: {field} must be at least 1, got: {value}")]
    NonPositive {
        piece: String,
        field: Field,
        value: i64,
    },
    #[error("failed to parse dice notation {piece:?}: {field} {value} is too large")]
    TooLarge {
        piece: String,
        field: Field,
        value: i64,
    },
}

impl ParseError {
    pub(crate) fn invalid_addend(piece: &str) -> Self {
        Self::InvalidAddend(piece.to_owned())
    }

    pub(crate) fn invalid_number(piece: &str, field: Field, token: &str) -> Self {
        Self::InvalidNumber {
            piece: piece.to_owned(),
            field,
            token: token.to_owned(),
        }
    }

    /// The `+`-separated piece of the notation the error refers to.
    pub fn piece(&self) -> &str {
        match self {
            Self::InvalidAddend(piece)
            | Self::InvalidNumber { piece, .. }
            | Self::NonPositive { piece, .. }
            | Self::TooLarge { piece, .. } => piece,
        }
    }
}
