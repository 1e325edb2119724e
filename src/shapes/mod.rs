pub mod bounding_box;
pub mod circle;

// Re-export the specific shape types
pub use bounding_box::BoundingBox;
pub use circle::Circle;

use crate::error::PhysicsError;

/// Enum representing the geometric shape of a body.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    BoundingBox(BoundingBox),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::BoundingBox(_) => ShapeKind::BoundingBox,
        }
    }
}

/// Collision tag of a shape. The set is closed; raw tags decode through
/// `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    Circle = 0,
    BoundingBox = 1,
}

impl TryFrom<u8> for ShapeKind {
    type Error = PhysicsError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(ShapeKind::Circle),
            1 => Ok(ShapeKind::BoundingBox),
            other => Err(PhysicsError::UnknownCollisionType(other)),
        }
    }
}

impl From<ShapeKind> for u8 {
    fn from(kind: ShapeKind) -> u8 {
        kind as u8
    }
}
