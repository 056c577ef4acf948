use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading test cases or scoring a colouring.
///
/// The DP kernel itself never fails; only the surfaces around it do.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid integer `{token}`")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("colouring has {colors} entries but the sequence has {values}")]
    LengthMismatch { values: usize, colors: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_integer(token: &str, source: ParseIntError) -> Self {
        Error::InvalidInteger {
            token: token.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
