use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Zero-sized element, bad alignment, or an element slice whose
    /// length differs from the stride.
    #[error("invalid arguments passed")]
    InvalidArgument,
    /// Capacity times stride does not fit the addressable size.
    #[error("operation results in overflow")]
    Overflow,
    #[error("allocation failed")]
    AllocationFailure,
    /// Growth failed. The container keeps its previous storage.
    #[error("reallocation failed")]
    ReallocationFailure,
    #[error("remove from empty container")]
    Underflow,
}

impl Error {
    /// Returns human-readable text of this error kind.
    #[inline]
    pub fn message(&self) -> &'static str {
        match self {
            Error::InvalidArgument => "invalid arguments passed",
            Error::Overflow => "operation results in overflow",
            Error::AllocationFailure => "allocation failed",
            Error::ReallocationFailure => "reallocation failed",
            Error::Underflow => "remove from empty container",
        }
    }
}

/// Returns human-readable text for given error kind.
#[inline]
pub fn error_message(err: Error) -> String {
    err.message().to_string()
}
