use crate::error::Result;
use crate::math::vector::Vector;
use crate::shapes::ShapeKind;

/// The state every simulated body carries, whatever its shape.
///
/// Motion is integrated with a unit timestep: each tick the accumulated
/// acceleration is added straight onto the position.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsObject {
    mass: f64,
    position: Vector,
    acceleration: Vector,
    shape_kind: ShapeKind,
}

impl PhysicsObject {
    /// Creates an object at rest. The acceleration starts as the zero vector
    /// with the same dimensionality as `position`.
    pub fn new(mass: f64, position: Vector, shape_kind: ShapeKind) -> Self {
        let acceleration = Vector::zeros(position.dimension());
        Self {
            mass,
            position,
            acceleration,
            shape_kind,
        }
    }

    /// Stored for callers; no force computation reads it.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> &Vector {
        &self.position
    }

    pub fn acceleration(&self) -> &Vector {
        &self.acceleration
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    /// Adds `delta` to the acceleration, then moves by the new acceleration.
    /// Mass is not factored in.
    pub fn apply_acceleration(&mut self, delta: &Vector) -> Result<()> {
        let acceleration = self.acceleration.add(delta)?;
        let position = self.position.add(&acceleration)?;
        self.acceleration = acceleration;
        self.position = position;
        Ok(())
    }

    /// Turns the acceleration clockwise without changing its magnitude, then
    /// moves by it.
    pub fn rotate_acceleration(&mut self, clockwise_radians: f64) -> Result<()> {
        let acceleration = self.acceleration.rotate_about_tail(clockwise_radians)?;
        let position = self.position.add(&acceleration)?;
        self.acceleration = acceleration;
        self.position = position;
        Ok(())
    }

    /// Moves the object without touching its acceleration, so the change is
    /// applied once rather than every tick.
    pub fn adjust_position(&mut self, delta: &Vector) -> Result<()> {
        self.position = self.position.add(delta)?;
        Ok(())
    }

    /// Pushes the object out of a penetration.
    ///
    /// On every axis where `collision_normal` is non-zero the object is moved
    /// so that its separation along that axis becomes the matching component
    /// of `extents`. Axes with a zero normal component are not moved.
    pub fn collision_overlap_correction(
        &mut self,
        collision_normal: &Vector,
        extents: &Vector,
    ) -> Result<()> {
        let desired = extents.multiply(&collision_normal.as_unit_vector())?;
        let adjustment = desired.subtract(collision_normal)?;
        self.adjust_position(&adjustment)
    }
}
