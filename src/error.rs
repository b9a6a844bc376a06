//! Error types for lucent operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lucent operations.
///
/// Floating-point edge cases are deliberately not represented here:
/// normalizing a zero-magnitude vector propagates IEEE NaN/infinities, and
/// color channels outside `[0, 1]` are clamped at export time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rows of unequal width passed to a grid constructor.
    #[error("dimension mismatch: expected rows of {expected} cells, found {found}")]
    DimensionMismatch {
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// Pixel coordinates outside the canvas.
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} canvas")]
    OutOfBounds {
        /// X coordinate (column) of the access.
        x: usize,
        /// Y coordinate (row) of the access.
        y: usize,
        /// Canvas width.
        width: usize,
        /// Canvas height.
        height: usize,
    },
}
