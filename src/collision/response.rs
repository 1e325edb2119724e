use super::detection::detect_collision;
use crate::error::Result;
use crate::force::SpringForce;
use crate::math::vector::Vector;
use crate::objects::body::Body;

/// Resolves a moving body against an obstacle in one call: detection, overlap
/// correction, then spring rebound.
#[derive(Debug, Clone, Default)]
pub struct CollisionResponse {
    pub spring: SpringForce,
    /// Print diagnostics for every hit.
    pub log_collisions: bool,
}

impl CollisionResponse {
    pub fn new(spring: SpringForce) -> Self {
        Self {
            spring,
            log_collisions: false,
        }
    }

    /// Checks `body` against `obstacle`. On a hit, `body` is pushed out of the
    /// obstacle by its own extents and the rebound acceleration is returned
    /// for the host to add into this tick's total. Only `body` is mutated.
    pub fn resolve(&self, body: &mut Body, obstacle: &Body) -> Result<Option<Vector>> {
        let manifold = match detect_collision(body, obstacle)? {
            Some(manifold) => manifold,
            None => return Ok(None),
        };

        let before = body.position().clone();
        let extents = body.extents();
        body.collision_overlap_correction(&manifold.normal, &extents)?;

        let rebound = self.spring.compute(&*body, &manifold.normal_sign())?;

        if self.log_collisions {
            println!("--- Collision {:?} ---", manifold.kinds);
            println!("  Normal: {:?}", manifold.normal.components());
            println!(
                "  Position: {:?} -> {:?}",
                before.components(),
                body.position().components()
            );
            println!("  Acceleration: {:?}", body.acceleration().components());
            println!("  Rebound: {:?}", rebound.components());
        }

        Ok(Some(rebound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_resolve_miss_leaves_body_alone() {
        let response = CollisionResponse::default();
        let mut ball = Body::circle(20.0, 1.0, Vector::xy(400.0, 400.0));
        let platform = Body::bounding_box(800.0, 100.0, 0.0, Vector::xy(0.0, 0.0));

        assert_eq!(response.resolve(&mut ball, &platform).unwrap(), None);
        assert_eq!(ball.position(), &Vector::xy(400.0, 400.0));
    }

    #[test]
    fn test_resolve_ball_landing_on_platform() {
        let response = CollisionResponse::default();
        let platform = Body::bounding_box(800.0, 100.0, 0.0, Vector::xy(0.0, 0.0));
        let mut ball = Body::circle(20.0, 1.0, Vector::xy(400.0, 122.0));
        // Falling at 7 per tick lands the center 15 above the platform
        ball.apply_acceleration(&Vector::xy(0.0, -7.0)).unwrap();
        assert_eq!(ball.position(), &Vector::xy(400.0, 115.0));

        let rebound = response.resolve(&mut ball, &platform).unwrap().unwrap();

        assert_eq!(ball.position(), &Vector::xy(400.0, 120.0));
        assert_abs_diff_eq!(rebound.get(0).unwrap(), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(rebound.get(1).unwrap(), 11.9, epsilon = EPSILON);
    }

    #[test]
    fn test_resolve_box_against_box_is_inert() {
        let response = CollisionResponse::default();
        let mut crate_box = Body::bounding_box(10.0, 10.0, 1.0, Vector::xy(0.0, 0.0));
        crate_box.apply_acceleration(&Vector::xy(3.0, 3.0)).unwrap();
        let wall = Body::bounding_box(10.0, 10.0, 0.0, Vector::xy(5.0, 5.0));

        let rebound = response.resolve(&mut crate_box, &wall).unwrap().unwrap();
        assert!(rebound.is_zero());
        assert_eq!(crate_box.position(), &Vector::xy(3.0, 3.0));
    }

    #[test]
    fn test_resolve_with_logging_enabled() {
        let response = CollisionResponse {
            log_collisions: true,
            ..CollisionResponse::default()
        };
        let mut a = Body::circle(10.0, 1.0, Vector::xy(0.0, 0.0));
        let b = Body::circle(10.0, 1.0, Vector::xy(0.0, 15.0));
        assert!(response.resolve(&mut a, &b).unwrap().is_some());
    }
}
