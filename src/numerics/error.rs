// src/numerics/error.rs
// Errors raised by the matrix engine.

/// Errors that can occur during matrix construction and algebra.
///
/// Each variant is a contract violation detected by the call that reports it;
/// the offending operand is never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("Invalid dimension: a {rows}x{cols} matrix must have at least one row and one column")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("Index out of range: ({row}, {col}) is outside a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Dimension mismatch: expected {}x{}, found {}x{}", expected.0, expected.1, found.0, found.1)]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Determinant undefined: {rows}x{cols} matrix is not square or smaller than 2x2")]
    NotSquareOrTooSmall { rows: usize, cols: usize },

    #[error("Cannot invert a non-square {rows}x{cols} matrix")]
    NotSquare { rows: usize, cols: usize },

    #[error("Matrix is singular (determinant is zero)")]
    Singular,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_shape() {
        let err = MatrixError::DimensionMismatch { expected: (4, 4), found: (4, 3) };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 4x4, found 4x3");

        let err = MatrixError::IndexOutOfRange { row: 5, col: 0, rows: 4, cols: 4 };
        assert!(err.to_string().contains("(5, 0)"));
        assert!(err.to_string().contains("4x4"));
    }
}
