use super::aabb::Aabb;
use super::manifold::CollisionManifold;
use crate::error::Result;
use crate::math::vector::Vector;
use crate::objects::body::Body;
use crate::shapes::{BoundingBox, Circle, Shape};

/// Checks two bodies for overlap, dispatching on their shape pair.
/// Returns a CollisionManifold if they collide, None otherwise.
///
/// Circle-box pairs report the normal relative to the circle regardless of
/// argument order.
pub fn detect_collision(body_a: &Body, body_b: &Body) -> Result<Option<CollisionManifold>> {
    let normal = match (body_a.shape(), body_b.shape()) {
        (Shape::Circle(circle_a), Shape::Circle(circle_b)) => {
            check_circle_circle(body_a.position(), circle_a, body_b.position(), circle_b)?
        }
        (Shape::Circle(circle), Shape::BoundingBox(bounds)) => {
            check_circle_box(body_a.position(), circle, body_b.position(), bounds)?
        }
        (Shape::BoundingBox(bounds), Shape::Circle(circle)) => {
            check_circle_box(body_b.position(), circle, body_a.position(), bounds)?
        }
        (Shape::BoundingBox(bounds_a), Shape::BoundingBox(bounds_b)) => {
            check_box_box(body_a.position(), bounds_a, body_b.position(), bounds_b)?
        }
    };

    Ok(normal.map(|normal| CollisionManifold {
        kinds: (body_a.shape_kind(), body_b.shape_kind()),
        normal,
    }))
}

/// Checks for collision between two circles. Touching circles collide.
/// The normal is the raw offset from the second center to the first.
pub fn check_circle_circle(
    center_a: &Vector,
    circle_a: &Circle,
    center_b: &Vector,
    circle_b: &Circle,
) -> Result<Option<Vector>> {
    let max_distance = circle_a.radius + circle_b.radius;
    if distance_exceeds(center_a, center_b, max_distance)? {
        return Ok(None);
    }
    Ok(Some(center_a.subtract(center_b)?))
}

/// Checks for collision between a circle and a box.
///
/// The normal runs from the nearest box point to the circle center. When the
/// center is inside the box the nearest point is the center itself and the
/// negated (zero) offset is returned.
pub fn check_circle_box(
    center: &Vector,
    circle: &Circle,
    corner: &Vector,
    bounds: &BoundingBox,
) -> Result<Option<Vector>> {
    let aabb = Aabb::from_corner(corner, &bounds.dimensions)?;
    let nearest = aabb.nearest_point(center)?;
    let offset = center.subtract(&nearest)?;

    if aabb.contains_point(center)? {
        return Ok(Some(-offset));
    }

    if distance_exceeds(center, &nearest, circle.radius)? {
        return Ok(None);
    }
    Ok(Some(offset))
}

/// Axis-aligned overlap test between two boxes.
///
/// No normal is derived for this pair: a hit always carries the zero vector.
pub fn check_box_box(
    corner_a: &Vector,
    bounds_a: &BoundingBox,
    corner_b: &Vector,
    bounds_b: &BoundingBox,
) -> Result<Option<Vector>> {
    let aabb_a = Aabb::from_corner(corner_a, &bounds_a.dimensions)?;
    let aabb_b = Aabb::from_corner(corner_b, &bounds_b.dimensions)?;

    if aabb_a.overlaps(&aabb_b)? {
        Ok(Some(Vector::zeros(corner_a.dimension())))
    } else {
        Ok(None)
    }
}

/// Compares squared distances so no square root is taken.
fn distance_exceeds(p1: &Vector, p2: &Vector, distance: f64) -> Result<bool> {
    Ok(p1.distance_squared(p2)? > distance * distance)
}
