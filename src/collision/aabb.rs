// Defines an Axis-Aligned Bounding Box used by the box collision tests

use crate::error::{PhysicsError, Result};
use crate::math::vector::Vector;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vector,
    pub max: Vector,
}

impl Aabb {
    /// Builds the box spanning `dimensions` from its minimum (top-left) corner.
    pub fn from_corner(corner: &Vector, dimensions: &Vector) -> Result<Self> {
        Ok(Self {
            min: corner.clone(),
            max: corner.add(dimensions)?,
        })
    }

    /// Checks whether `point` lies inside the box. Points on an edge count as inside.
    pub fn contains_point(&self, point: &Vector) -> Result<bool> {
        let to_min = point.subtract(&self.min)?;
        let to_max = self.max.subtract(point)?;
        Ok(to_min
            .components()
            .iter()
            .chain(to_max.components())
            .all(|&d| d >= 0.0))
    }

    /// Closest point of the box to `point`, found by clamping each axis into
    /// `[min, max]`. A point inside the box is its own nearest point.
    pub fn nearest_point(&self, point: &Vector) -> Result<Vector> {
        if point.dimension() != self.min.dimension() {
            return Err(PhysicsError::DimensionMismatch {
                operation: "clamp",
                left: point.dimension(),
                right: self.min.dimension(),
            });
        }

        let clamped = point
            .components()
            .iter()
            .zip(self.min.components().iter().zip(self.max.components()))
            .map(|(&p, (&lo, &hi))| {
                if p > hi {
                    hi
                } else if p < lo {
                    lo
                } else {
                    p
                }
            })
            .collect::<Vec<f64>>();
        Ok(Vector::new(clamped))
    }

    /// Checks if this box overlaps another. Boxes that only touch along an
    /// edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> Result<bool> {
        let self_past_other = self.min.subtract(&other.max)?;
        let other_past_self = other.min.subtract(&self.max)?;
        Ok(!self_past_other
            .components()
            .iter()
            .chain(other_past_self.components())
            .any(|&gap| gap >= 0.0))
    }
}
