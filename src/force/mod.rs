pub mod spring;

pub use spring::{compute_spring_force, RetentionTier, SpringForce};

use crate::math::vector::Vector;
use crate::objects::{Body, PhysicsObject};

/// Anything that exposes its current acceleration to force computations.
pub trait Accelerated {
    fn acceleration(&self) -> &Vector;
}

impl Accelerated for PhysicsObject {
    fn acceleration(&self) -> &Vector {
        PhysicsObject::acceleration(self)
    }
}

impl Accelerated for Body {
    fn acceleration(&self) -> &Vector {
        Body::acceleration(self)
    }
}
