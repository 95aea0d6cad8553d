use thiserror::Error;

/// Errors reported by the fallible (`try_*`) operations.
///
/// The non-fallible counterparts of these operations never fail: degenerate inputs make them
/// return non-finite components instead, following IEEE 754 semantics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LinalgError {
    /// A vector operand had (approximately) zero length, so it has no direction.
    #[error("vector has zero length")]
    ZeroLength,

    /// The matrix has a determinant of (approximately) zero and cannot be inverted.
    #[error("matrix is singular")]
    Singular,
}

/// Result type used by the fallible operations of this crate.
pub type Result<T, E = LinalgError> = std::result::Result<T, E>;
