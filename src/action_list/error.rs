//! Errors raised by the action list.

use thiserror::Error;

/// Failures from indexed item access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The index is not within `0..len`.
    #[error("item index {index} out of range for list of {len} items")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Item count at the time of the request.
        len: usize,
    },
}
