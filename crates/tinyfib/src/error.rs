use core::fmt::Display;

/// Errors that can occur when computing a Fibonacci number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested position is negative
    InvalidArgument(i32),
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument(n) => write!(f, "invalid argument: expected a non-negative position, got {}", n),
        }
    }
}

impl core::error::Error for Error {}

/// A wrapper around [`core::result::Result`] for Fibonacci computations
pub type Result<T, E = Error> = core::result::Result<T, E>;
