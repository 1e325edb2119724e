//! Spring-style rebound applied when a body hits something.

use super::Accelerated;
use crate::error::Result;
use crate::math::vector::Vector;

/// Fraction of the incoming acceleration kept through a bounce once its
/// magnitude is strictly greater than `above`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetentionTier {
    pub above: f64,
    pub coefficient: f64,
}

impl RetentionTier {
    pub const fn new(above: f64, coefficient: f64) -> Self {
        Self { above, coefficient }
    }
}

/// Hard hits keep most of their energy; slow contacts come to rest.
pub const DEFAULT_TIERS: [RetentionTier; 3] = [
    RetentionTier::new(5.0, 0.7),
    RetentionTier::new(3.0, 0.5),
    RetentionTier::new(1.0, 0.1),
];

/// Computes rebound accelerations from a tiered energy-retention table.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringForce {
    tiers: Vec<RetentionTier>,
}

impl SpringForce {
    /// Creates a spring from custom tiers. Tiers are ordered from the highest
    /// threshold down and coefficients are clamped to [0, 1].
    pub fn new(tiers: impl IntoIterator<Item = RetentionTier>) -> Self {
        let mut tiers: Vec<RetentionTier> = tiers
            .into_iter()
            .map(|tier| RetentionTier::new(tier.above, tier.coefficient.clamp(0.0, 1.0)))
            .collect();
        tiers.sort_by(|a, b| b.above.total_cmp(&a.above));
        Self { tiers }
    }

    pub fn tiers(&self) -> &[RetentionTier] {
        &self.tiers
    }

    /// Coefficient for an impact of the given magnitude; 0 below every tier.
    pub fn retention_coefficient(&self, magnitude: f64) -> f64 {
        retention_for(&self.tiers, magnitude)
    }

    /// Rebound acceleration for `body` along the axes set in
    /// `collision_normal_sign` (a per-axis sign vector, see
    /// [`Vector::as_unit_vector`]).
    ///
    /// The body's acceleration is masked to the collision axes and reversed,
    /// amplified by `1 + k` so the body stops and then bounces back having
    /// lost `1 - k` of its speed. Nothing is mutated; the caller adds the
    /// result to the tick's acceleration.
    pub fn compute<A>(&self, body: &A, collision_normal_sign: &Vector) -> Result<Vector>
    where
        A: Accelerated + ?Sized,
    {
        compute_with_tiers(&self.tiers, body, collision_normal_sign)
    }
}

impl Default for SpringForce {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS.to_vec(),
        }
    }
}

/// [`SpringForce::compute`] with the default tiers.
pub fn compute_spring_force<A>(body: &A, collision_normal_sign: &Vector) -> Result<Vector>
where
    A: Accelerated + ?Sized,
{
    compute_with_tiers(&DEFAULT_TIERS, body, collision_normal_sign)
}

fn compute_with_tiers<A>(
    tiers: &[RetentionTier],
    body: &A,
    collision_normal_sign: &Vector,
) -> Result<Vector>
where
    A: Accelerated + ?Sized,
{
    let current = body.acceleration();
    let collision_accel = current.multiply(&collision_normal_sign.abs())?;

    let ones = Vector::splat(1.0, collision_accel.dimension());
    let magnitude = collision_accel.dot_product(&ones)?.abs();
    let k = retention_for(tiers, magnitude);

    Ok(collision_accel.scale(-1.0 - k))
}

fn retention_for(tiers: &[RetentionTier], magnitude: f64) -> f64 {
    tiers
        .iter()
        .find(|tier| magnitude > tier.above)
        .map_or(0.0, |tier| tier.coefficient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhysicsError;
    use crate::objects::PhysicsObject;
    use crate::shapes::ShapeKind;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-9;

    fn moving(acceleration: Vector) -> PhysicsObject {
        let origin = Vector::zeros(acceleration.dimension());
        let mut obj = PhysicsObject::new(1.0, origin, ShapeKind::Circle);
        obj.apply_acceleration(&acceleration).unwrap();
        obj
    }

    fn assert_components(actual: &Vector, expected: &[f64]) {
        assert_eq!(actual.dimension(), expected.len());
        for (a, e) in actual.components().iter().zip(expected) {
            assert_abs_diff_eq!(*a, *e, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_default_tiers() {
        let spring = SpringForce::default();
        assert_eq!(spring.retention_coefficient(10.0), 0.7);
        assert_eq!(spring.retention_coefficient(5.0), 0.5);
        assert_eq!(spring.retention_coefficient(4.0), 0.5);
        assert_eq!(spring.retention_coefficient(3.0), 0.1);
        assert_eq!(spring.retention_coefficient(1.5), 0.1);
        assert_eq!(spring.retention_coefficient(1.0), 0.0);
        assert_eq!(spring.retention_coefficient(0.0), 0.0);
    }

    #[test]
    fn test_hard_hit_rebounds() {
        let body = moving(Vector::xy(0.0, -10.0));
        let rebound = compute_spring_force(&body, &Vector::xy(0.0, 1.0)).unwrap();
        assert_components(&rebound, &[0.0, 17.0]);
    }

    #[test]
    fn test_rebound_masks_other_axes() {
        let body = moving(Vector::xy(6.0, -4.0));
        let rebound = compute_spring_force(&body, &Vector::xy(0.0, -1.0)).unwrap();
        // Only y is affected: magnitude 4 -> k = 0.5
        assert_components(&rebound, &[0.0, 6.0]);
    }

    #[test]
    fn test_magnitude_is_sum_of_masked_components() {
        let body = moving(Vector::xy(4.0, -2.0));
        let rebound = compute_spring_force(&body, &Vector::xy(1.0, 1.0)).unwrap();
        // |4 + -2| = 2 -> k = 0.1
        assert_components(&rebound, &[-4.4, 2.2]);
    }

    #[test]
    fn test_slow_contact_just_stops() {
        let body = moving(Vector::xy(0.0, 0.5));
        let rebound = compute_spring_force(&body, &Vector::xy(0.0, -1.0)).unwrap();
        assert_components(&rebound, &[0.0, -0.5]);
    }

    #[test]
    fn test_zero_normal_gives_zero_rebound() {
        let body = moving(Vector::xy(3.0, 8.0));
        let rebound = compute_spring_force(&body, &Vector::zeros(2)).unwrap();
        assert!(rebound.is_zero());
    }

    #[test]
    fn test_spring_does_not_mutate_body() {
        let body = moving(Vector::xy(0.0, -10.0));
        let before = body.clone();
        compute_spring_force(&body, &Vector::xy(0.0, 1.0)).unwrap();
        assert_eq!(body, before);
    }

    #[test]
    fn test_custom_tiers_are_sorted_and_clamped() {
        let spring = SpringForce::new([
            RetentionTier::new(2.0, 0.3),
            RetentionTier::new(8.0, 1.5),
        ]);
        assert_eq!(spring.tiers()[0], RetentionTier::new(8.0, 1.0));
        assert_eq!(spring.tiers()[1], RetentionTier::new(2.0, 0.3));

        let body = moving(Vector::xy(10.0, 0.0));
        let rebound = spring.compute(&body, &Vector::xy(1.0, 0.0)).unwrap();
        assert_components(&rebound, &[-20.0, 0.0]);
    }

    #[test]
    fn test_spring_dimension_mismatch() {
        let body = moving(Vector::xy(1.0, 1.0));
        assert!(matches!(
            compute_spring_force(&body, &Vector::from([1.0, 0.0, 0.0])),
            Err(PhysicsError::DimensionMismatch { .. })
        ));
    }
}
