pub mod body;
pub mod physics_object;

pub use body::Body;
pub use physics_object::PhysicsObject;
