use crate::error::Result;
use crate::math::vector::Vector;
use crate::objects::physics_object::PhysicsObject;
use crate::shapes::{BoundingBox, Circle, Shape, ShapeKind};

/// A simulated body: a [`PhysicsObject`] composed with the shape it collides as.
///
/// For a circle the position is the center; for a bounding box it is the
/// top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    shape: Shape,
    object: PhysicsObject,
}

impl Body {
    /// Creates a circular body centered on `position`.
    pub fn circle(radius: f64, mass: f64, position: Vector) -> Self {
        Self {
            shape: Shape::Circle(Circle::new(radius)),
            object: PhysicsObject::new(mass, position, ShapeKind::Circle),
        }
    }

    /// Creates a `width` x `height` box whose top-left corner is `position`.
    pub fn bounding_box(width: f64, height: f64, mass: f64, position: Vector) -> Self {
        Self {
            shape: Shape::BoundingBox(BoundingBox::new(width, height)),
            object: PhysicsObject::new(mass, position, ShapeKind::BoundingBox),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn object(&self) -> &PhysicsObject {
        &self.object
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.object.shape_kind()
    }

    pub fn mass(&self) -> f64 {
        self.object.mass()
    }

    pub fn position(&self) -> &Vector {
        self.object.position()
    }

    pub fn acceleration(&self) -> &Vector {
        self.object.acceleration()
    }

    /// Radius, if this body is a circle.
    pub fn radius(&self) -> Option<f64> {
        match &self.shape {
            Shape::Circle(circle) => Some(circle.radius),
            Shape::BoundingBox(_) => None,
        }
    }

    /// Width and height, if this body is a box.
    pub fn dimensions(&self) -> Option<&Vector> {
        match &self.shape {
            Shape::Circle(_) => None,
            Shape::BoundingBox(bounds) => Some(&bounds.dimensions),
        }
    }

    /// Per-axis separation to restore after a collision: the radius on every
    /// axis for a circle, the full dimensions for a box.
    pub fn extents(&self) -> Vector {
        match &self.shape {
            Shape::Circle(circle) => Vector::splat(circle.radius, self.position().dimension()),
            Shape::BoundingBox(bounds) => bounds.dimensions.clone(),
        }
    }

    pub fn apply_acceleration(&mut self, delta: &Vector) -> Result<()> {
        self.object.apply_acceleration(delta)
    }

    pub fn rotate_acceleration(&mut self, clockwise_radians: f64) -> Result<()> {
        self.object.rotate_acceleration(clockwise_radians)
    }

    pub fn adjust_position(&mut self, delta: &Vector) -> Result<()> {
        self.object.adjust_position(delta)
    }

    pub fn collision_overlap_correction(
        &mut self,
        collision_normal: &Vector,
        extents: &Vector,
    ) -> Result<()> {
        self.object.collision_overlap_correction(collision_normal, extents)
    }
}
