use std::{fmt, io};

use num_traits::PrimInt;

#[derive(Debug)]
pub enum Error {
    InvalidArgument(String),
    IO { why: String, io_error: io::Error },
    Generic(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(why) => write!(f, "Invalid argument: {}", why),
            Error::IO { why, io_error } => write!(f, "IO error: {}: {}", why, io_error),
            Error::Generic(why) => write!(f, "Generic Error: {}", why)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO { io_error, .. } => Some(io_error),
            _ => None
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IO { why: "failed to write partitions".to_string(), io_error: err }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Error {
        Error::Generic(err)
    }
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::InvalidArgument(_) => true,
            _ => false
        }
    }
}

/// Converts a caller supplied integer into a `usize`, rejecting negative values.
/// `what` names the argument in the error message.
pub(crate) fn non_negative<N: PrimInt + fmt::Display>(value: N, what: &str) -> Result<usize, Error> {
    if value < N::zero() {
        return Err(Error::InvalidArgument(format!("{} must be non-negative, received {}", what, value)));
    }
    value.to_usize()
         .ok_or_else(|| Error::InvalidArgument(format!("{} = {} does not fit in usize", what, value)))
}
