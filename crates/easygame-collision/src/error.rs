//! Collision subsystem errors.

use thiserror::Error;

use crate::shape::ShapeKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollisionError {
    #[error("collision between {left} and {right} is not implemented")]
    UnsupportedPair { left: ShapeKind, right: ShapeKind },
    #[error("{0} colliders are not implemented")]
    UnsupportedShape(&'static str),
}

/// Result type alias for collision operations.
pub type Result<T> = std::result::Result<T, CollisionError>;
