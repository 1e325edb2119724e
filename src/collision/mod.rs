pub mod aabb;
pub mod detection;
pub mod manifold;
pub mod response;

// Re-export key types
pub use aabb::Aabb;
pub use detection::*;
pub use manifold::CollisionManifold;
pub use response::CollisionResponse;
