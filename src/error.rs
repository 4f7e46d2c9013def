use thiserror::Error;

/// Errors reported by the positional `List` operations.
///
/// Every fallible operation detects its error during the position walk,
/// before any link is touched, so a failed call leaves the list unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The index, after negative-index translation, names no live position
    /// in the list.
    ///
    /// This covers both an index beyond the last element and an index that
    /// stayed negative after translation.
    #[error("index out of range")]
    OutOfRange,

    /// A slice step was supplied explicitly but is not greater than 1.
    ///
    /// An absent step behaves as 1; only the explicit form is checked.
    #[error("slice step must be greater than 1, got {0}")]
    InvalidStep(isize),
}
