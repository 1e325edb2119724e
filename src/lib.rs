//! A minimal 2D rigid-body toolkit: vectors, circle and box bodies, pairwise
//! collision detection, overlap correction and spring rebound.
//!
//! The crate owns no simulation loop. A host sums its accelerations each
//! tick, asks for collisions, corrects overlaps, adds the rebound and then
//! integrates every body with [`Body::apply_acceleration`].

pub mod collision;
pub mod error;
pub mod force;
pub mod math;
pub mod objects;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{detect_collision, Aabb, CollisionManifold, CollisionResponse};
pub use error::{PhysicsError, Result};
pub use force::{compute_spring_force, Accelerated, RetentionTier, SpringForce};
pub use math::vector::Vector;
pub use objects::{Body, PhysicsObject};
pub use shapes::{BoundingBox, Circle, Shape, ShapeKind};
