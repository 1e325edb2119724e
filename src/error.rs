//! Error conditions raised by vector math and collision dispatch.

use std::fmt;

/// Contract violations reported by the toolkit.
///
/// None of these occur under correct usage. They end the current operation
/// and leave it to the host loop to decide whether to drop the tick or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
    /// A binary vector operation received operands of different lengths.
    DimensionMismatch {
        operation: &'static str,
        left: usize,
        right: usize,
    },
    /// An operation that only exists in 2D was called on another dimensionality.
    UnsupportedDimension {
        operation: &'static str,
        dimension: usize,
    },
    /// A raw shape tag outside the known set.
    UnknownCollisionType(u8),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::DimensionMismatch { operation, left, right } => write!(
                f,
                "cannot {} vectors of different dimensions ({} and {})",
                operation, left, right
            ),
            PhysicsError::UnsupportedDimension { operation, dimension } => write!(
                f,
                "{} is only implemented for 2D vectors, got {}D",
                operation, dimension
            ),
            PhysicsError::UnknownCollisionType(tag) => {
                write!(f, "unknown collision type: {}", tag)
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

pub type Result<T> = std::result::Result<T, PhysicsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dimension_mismatch() {
        let err = PhysicsError::DimensionMismatch { operation: "add", left: 2, right: 3 };
        assert_eq!(
            err.to_string(),
            "cannot add vectors of different dimensions (2 and 3)"
        );
    }

    #[test]
    fn test_display_unsupported_dimension() {
        let err = PhysicsError::UnsupportedDimension { operation: "rotation", dimension: 3 };
        assert_eq!(err.to_string(), "rotation is only implemented for 2D vectors, got 3D");
    }

    #[test]
    fn test_error_is_boxable() {
        let boxed: Box<dyn std::error::Error> = Box::new(PhysicsError::UnknownCollisionType(7));
        assert_eq!(boxed.to_string(), "unknown collision type: 7");
    }
}
