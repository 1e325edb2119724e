// Defines the collision manifold returned by detection

use crate::math::vector::Vector;
use crate::shapes::ShapeKind;

/// Stores information about a detected collision between two bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionManifold {
    /// Shape kinds of the first and second body, in call order.
    pub kinds: (ShapeKind, ShapeKind),
    /// The collision normal. It is not unit length: its magnitude depends on
    /// the shape pair, and box-box collisions always report a zero normal.
    pub normal: Vector,
}

impl CollisionManifold {
    /// Per-axis sign of the normal, as fed to the spring force.
    pub fn normal_sign(&self) -> Vector {
        self.normal.as_unit_vector()
    }

    /// True when the normal carries no direction, so neither overlap
    /// correction nor rebound will do anything.
    pub fn is_degenerate(&self) -> bool {
        self.normal.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_sign() {
        let m = CollisionManifold {
            kinds: (ShapeKind::Circle, ShapeKind::Circle),
            normal: Vector::xy(0.0, -19.0),
        };
        assert_eq!(m.normal_sign(), Vector::xy(0.0, -1.0));
        assert!(!m.is_degenerate());
    }

    #[test]
    fn test_degenerate_manifold() {
        let m = CollisionManifold {
            kinds: (ShapeKind::BoundingBox, ShapeKind::BoundingBox),
            normal: Vector::zeros(2),
        };
        assert!(m.is_degenerate());
        assert_eq!(m.normal_sign(), Vector::zeros(2));
    }
}
