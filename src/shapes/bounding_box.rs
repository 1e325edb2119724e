use crate::math::vector::Vector;

/// An axis-aligned box. Its extents grow from the owning body's position,
/// which is taken as the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub dimensions: Vector,
}

impl BoundingBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self::from_dimensions(Vector::xy(width, height))
    }

    /// Creates a box from an arbitrary dimensions vector (width, height, ...).
    pub fn from_dimensions(dimensions: Vector) -> Self {
        assert!(
            dimensions.components().iter().all(|&d| d >= 0.0),
            "Bounding box dimensions cannot be negative"
        );
        Self { dimensions }
    }

    pub fn width(&self) -> f64 {
        self.dimensions.get(0).unwrap_or(0.0)
    }

    pub fn height(&self) -> f64 {
        self.dimensions.get(1).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_new() {
        let b = BoundingBox::new(10.0, 20.0);
        assert_eq!(b.dimensions, Vector::xy(10.0, 20.0));
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 20.0);
    }

    #[test]
    #[should_panic]
    fn test_bounding_box_negative_width() {
        BoundingBox::new(-1.0, 5.0);
    }

    #[test]
    #[should_panic]
    fn test_bounding_box_negative_dimension_component() {
        BoundingBox::from_dimensions(Vector::from([1.0, 2.0, -3.0]));
    }
}
