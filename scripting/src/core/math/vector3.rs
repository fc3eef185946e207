//! Vector value type shared with the host engine

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Three-component vector, the shape every transform property has when it
/// crosses the engine boundary.
///
/// Operators are pure: they always return a new value and never mutate an
/// operand.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const FRONT: Self = Self::new(0.0, 0.0, 1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// Create a vector from its components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Dot product
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Component-wise (Hadamard) product
    pub fn hadamard(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Cross product
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Scalar forms apply the scalar to every component and give the same
// result on either side.

impl Add<f32> for Vector3 {
    type Output = Self;

    fn add(self, rhs: f32) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Add<Vector3> for f32 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        rhs + self
    }
}

impl Sub<f32> for Vector3 {
    type Output = Self;

    fn sub(self, rhs: f32) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Sub<Vector3> for f32 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        rhs - self
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_is_associative_and_commutative() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        let c = Vector3::new(10.0, -1.0, 0.25);

        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_scalar_forms_commute() {
        let v = Vector3::new(1.0, -2.0, 3.0);

        assert_eq!(v + 2.0, 2.0 + v);
        assert_eq!(v - 2.0, 2.0 - v);
        assert_eq!(v * 3.0, 3.0 * v);
        assert_eq!(v * 3.0, Vector3::new(3.0, -6.0, 9.0));
    }

    #[test]
    fn test_operators_do_not_mutate_operands() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        let _ = a + b;
        let _ = a - b;
        let _ = a * 2.0;
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(b, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_dot_is_symmetric() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 4.0);

        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(Vector3::RIGHT.dot(Vector3::UP), 0.0);
    }

    #[test]
    fn test_cross_is_antisymmetric() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 4.0);

        assert_eq!(a.cross(b), -(b.cross(a)));
        assert_eq!(Vector3::RIGHT.cross(Vector3::UP), Vector3::FRONT);
    }

    #[test]
    fn test_hadamard_product() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 0.5);

        assert_eq!(a.hadamard(b), Vector3::new(4.0, -10.0, 1.5));
        assert_eq!(a.hadamard(Vector3::ONE), a);
        assert_eq!(a.hadamard(Vector3::ZERO), Vector3::ZERO);
    }

    #[test]
    fn test_axis_constants_oppose() {
        assert_eq!(Vector3::LEFT, -Vector3::RIGHT);
        assert_eq!(Vector3::DOWN, -Vector3::UP);
        assert_eq!(Vector3::BACK, -Vector3::FRONT);
    }

    #[test]
    fn test_glam_conversion_round_trip() {
        let v = Vector3::new(1.5, -2.25, 4.0);
        let through: Vector3 = glam::Vec3::from(v).into();
        assert_eq!(through, v);
    }
}
