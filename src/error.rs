//! The errors that can occur while constructing a [`Partition`].
//!
//! [`Partition`]: ../connectivity/partition/struct.Partition.html

/// An error returned by the sized constructor of a `Partition`.
///
/// Queries never fail, an element that is not in any component is reported
/// with `None` instead.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested amount of elements was negative.
    #[error("partition size must be non-negative, got {0}")]
    NegativeSize(i64),
    /// The requested amount of elements can not be allocated on this target.
    #[error("partition size {0} can not be allocated")]
    SizeOverflow(i64),
}

/// A `Result` with the error type of this crate.
pub type Result<T> = std::result::Result<T, Error>;
