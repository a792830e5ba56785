//! Allocation error types.

use std::error::Error;
use std::fmt;

/// Errors from the underlying allocation primitive.
///
/// Returned by the `try_` entry points; the infallible entry points divert
/// through the standard abort paths instead of surfacing these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested element count does not fit the allocator's layout
    /// limits (byte size overflows `isize`).
    CapacityOverflow,
    /// The allocator could not provide the requested storage.
    Exhausted {
        /// Number of bytes requested.
        bytes: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::Exhausted { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
        }
    }
}

impl Error for AllocError {}
