use std::ops::{Mul, Neg};

use crate::error::{PhysicsError, Result};

/// An immutable N-dimensional vector. The dimensionality is fixed when the
/// vector is built; operations never mutate, they return a new `Vector`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Creates a new Vector from its components.
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Creates a 2D vector.
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(vec![x, y])
    }

    /// A zero vector with `dimension` components.
    pub fn zeros(dimension: usize) -> Self {
        Self::splat(0.0, dimension)
    }

    /// A vector with every one of its `dimension` components set to `value`.
    pub fn splat(value: f64, dimension: usize) -> Self {
        Self::new(vec![value; dimension])
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[f64] {
        &self.components
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.components.get(index).copied()
    }

    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|&c| c == 0.0)
    }

    /// Applies `op` pairwise after checking both vectors have the same length.
    fn zip_with(
        &self,
        other: &Self,
        operation: &'static str,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Self> {
        self.check_same_dimension(other, operation)?;
        Ok(Self::new(
            self.components
                .iter()
                .zip(&other.components)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        ))
    }

    fn check_same_dimension(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(PhysicsError::DimensionMismatch {
                operation,
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    fn check_planar(&self, operation: &'static str) -> Result<()> {
        if self.dimension() != 2 {
            return Err(PhysicsError::UnsupportedDimension {
                operation,
                dimension: self.dimension(),
            });
        }
        Ok(())
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Subtracts `other` from this vector.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Component-wise (Hadamard) product.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "multiply", |a, b| a * b)
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.components.iter().map(|c| c * scalar).collect())
    }

    /// Calculates the dot product of two vectors.
    pub fn dot_product(&self, other: &Self) -> Result<f64> {
        self.check_same_dimension(other, "take the dot product of")?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Cross product is not defined for two 2D vectors, so this returns the
    /// empty vector for them. Any other dimensionality is rejected.
    pub fn cross_product(&self, other: &Self) -> Result<Self> {
        self.check_same_dimension(other, "take the cross product of")?;
        self.check_planar("cross product")?;
        Ok(Self::default())
    }

    /// Rotates the vector clockwise about its tail.
    pub fn rotate_about_tail(&self, clockwise_radians: f64) -> Result<Self> {
        self.check_planar("rotation")?;

        // sin/cos turn anti-clockwise
        let (sin, cos) = (-clockwise_radians).sin_cos();
        let (x, y) = (self.components[0], self.components[1]);

        Ok(Self::xy(cos * x - sin * y, sin * x + cos * y))
    }

    /// Same as [`Vector::rotate_about_tail`] with the angle in degrees.
    pub fn rotate_about_tail_degrees(&self, clockwise_degrees: f64) -> Result<Self> {
        self.rotate_about_tail(clockwise_degrees.to_radians())
    }

    /// Maps every component to its sign: -1, 0 or 1.
    ///
    /// This is a per-axis direction, not a length-1 normalization. Both zero
    /// and negative zero map to 0.
    pub fn as_unit_vector(&self) -> Self {
        Self::new(
            self.components
                .iter()
                .map(|&c| {
                    if c > 0.0 {
                        1.0
                    } else if c < 0.0 {
                        -1.0
                    } else {
                        0.0
                    }
                })
                .collect(),
        )
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.components.iter().map(|c| c.abs()).collect())
    }

    /// Squared length. Avoids a square root for comparisons.
    pub fn magnitude_squared(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum()
    }

    /// Squared distance between two points.
    pub fn distance_squared(&self, other: &Self) -> Result<f64> {
        Ok(self.subtract(other)?.magnitude_squared())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::new(components.to_vec())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

// Scalar multiplication (Vector * f64)
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

// Scalar multiplication (f64 * Vector)
impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector.scale(self)
    }
}

// Negation
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}
