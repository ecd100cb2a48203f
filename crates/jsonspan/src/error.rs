//! Error types for building, navigating, and converting documents.

use thiserror::Error;

use crate::node::Kind;
use crate::scanner::ScanError;

/// Any failure the crate can report.
///
/// Scan-time failures are wrapped [`ScanError`]s. [`Error::NotFound`] is a
/// normal negative lookup result rather than a defect in the input; callers
/// probing for optional members should treat it as "absent".
#[derive(Error, Debug)]
pub enum Error {
    /// The input string or file had zero length.
    #[error("input is empty")]
    EmptyInput,

    /// The input file could not be opened or read.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The scanner could not delimit a value.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// An object or array operation was invoked on a node of the wrong
    /// type, or a scalar accessor was invoked on a container.
    #[error("expected {expected} node, found {found} node")]
    TypeMismatch {
        /// What the operation required.
        expected: &'static str,
        /// What the node actually is.
        found: Kind,
    },

    /// No child matched the requested name or index.
    #[error("no matching child")]
    NotFound,

    /// The leaf's content does not have the requested scalar shape.
    #[error("value cannot be read as the requested scalar")]
    Conversion,

    /// The destination buffer cannot hold the string content.
    #[error("destination holds {capacity} bytes but {needed} are required")]
    InsufficientCapacity {
        /// Bytes the content occupies.
        needed: usize,
        /// Bytes the destination offered.
        capacity: usize,
    },
}
