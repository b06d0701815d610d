//! Error types for EasyGame geometry.

use thiserror::Error;

/// Errors raised by transform algebra.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("AffineTransform2d is not invertible (determinant {determinant})")]
    NotInvertible { determinant: f64 },
}

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
