//! Rotation quaternions with degree-based construction

use crate::core::math::Vector3;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Rotation as a quaternion (w + xi + yj + zk).
///
/// Scripts compose rotations with these; the boundary itself carries
/// Euler degrees, so [`Quaternion::from_euler`] is the bridge between the
/// two representations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    /// The no-rotation quaternion
    pub const IDENTITY: Self = Self {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Rotation of `degrees` around `axis`.
    ///
    /// Half-angle construction over the degree input. The axis is used as
    /// given: a zero-length or unnormalized axis yields a degenerate
    /// rotation, which callers are expected to avoid.
    pub fn angle_axis(degrees: f32, axis: Vector3) -> Self {
        let half = degrees.to_radians() / 2.0;
        let (sin, cos) = half.sin_cos();

        Self {
            w: cos,
            x: sin * axis.x,
            y: sin * axis.y,
            z: sin * axis.z,
        }
    }

    /// Rotation from Euler angles in degrees, composed X then Y then Z.
    ///
    /// The composition order is fixed; quaternion multiplication does not
    /// commute, so reordering the axes changes the result.
    pub fn from_euler(degrees: Vector3) -> Self {
        Self::angle_axis(degrees.x, Vector3::RIGHT)
            * Self::angle_axis(degrees.y, Vector3::UP)
            * Self::angle_axis(degrees.z, Vector3::FRONT)
    }

    /// Negated vector part; the inverse rotation for unit quaternions
    pub fn conjugate(self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    fn vector_part(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Self;

    // Hamilton product, decomposed through the vector dot and cross
    fn mul(self, rhs: Self) -> Self {
        let a = self.vector_part();
        let b = rhs.vector_part();

        let w = self.w * rhs.w - a.dot(b);
        let v = b * self.w + a * rhs.w + a.cross(b);

        Self {
            w,
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        let u = self.vector_part();

        u * (2.0 * u.dot(v)) + v * (self.w * self.w - u.dot(u)) + u.cross(v) * (2.0 * self.w)
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        Self {
            w: q.w,
            x: q.x,
            y: q.y,
            z: q.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_approx(actual: Vector3, expected: Vector3) {
        assert!(
            (actual.x - expected.x).abs() < 1e-5
                && (actual.y - expected.y).abs() < 1e-5
                && (actual.z - expected.z).abs() < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn assert_quat_approx(actual: Quaternion, expected: Quaternion) {
        assert!(
            (actual.w - expected.w).abs() < 1e-5
                && (actual.x - expected.x).abs() < 1e-5
                && (actual.y - expected.y).abs() < 1e-5
                && (actual.z - expected.z).abs() < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_identity_leaves_vectors_unchanged() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        assert_vec_approx(Quaternion::IDENTITY * v, v);
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let q = Quaternion::angle_axis(0.0, Vector3::UP);
        assert_eq!(q, Quaternion::IDENTITY);

        let q = Quaternion::angle_axis(0.0, Vector3::new(0.3, -0.9, 0.1));
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[test]
    fn test_half_turn_around_up_flips_right() {
        let q = Quaternion::angle_axis(180.0, Vector3::UP);
        assert_vec_approx(q * Vector3::new(1.0, 0.0, 0.0), Vector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_quarter_turn_around_up() {
        let q = Quaternion::angle_axis(90.0, Vector3::UP);
        assert_vec_approx(q * Vector3::RIGHT, Vector3::BACK);
        assert_vec_approx(q * Vector3::FRONT, Vector3::RIGHT);
    }

    #[test]
    fn test_euler_axis_order_matters() {
        let around_x = Quaternion::from_euler(Vector3::new(90.0, 0.0, 0.0));
        let around_y = Quaternion::from_euler(Vector3::new(0.0, 90.0, 0.0));

        let probe = Vector3::new(1.0, 2.0, 3.0);
        let a = around_x * probe;
        let b = around_y * probe;
        assert!(
            (a.x - b.x).abs() > 1e-3 || (a.y - b.y).abs() > 1e-3 || (a.z - b.z).abs() > 1e-3,
            "rotations around different axes agreed unexpectedly"
        );

        // Swapping which angle goes to which axis changes the composition
        let xy = Quaternion::from_euler(Vector3::new(30.0, 60.0, 0.0));
        let yx = Quaternion::from_euler(Vector3::new(60.0, 30.0, 0.0));
        let a = xy * probe;
        let b = yx * probe;
        assert!(
            (a.x - b.x).abs() > 1e-3 || (a.y - b.y).abs() > 1e-3 || (a.z - b.z).abs() > 1e-3,
            "axis order had no effect on the composed rotation"
        );
    }

    #[test]
    fn test_conjugate_round_trip() {
        let q = Quaternion::from_euler(Vector3::new(30.0, 45.0, 60.0));
        let v = Vector3::new(1.0, -2.0, 0.5);

        assert_vec_approx(q.conjugate() * (q * v), v);
        assert_vec_approx(q * (q.conjugate() * v), v);
    }

    #[test]
    fn test_angle_axis_matches_glam() {
        let q = Quaternion::angle_axis(37.0, Vector3::UP);
        let expected: Quaternion =
            glam::Quat::from_axis_angle(glam::Vec3::Y, 37.0_f32.to_radians()).into();
        assert_quat_approx(q, expected);
    }

    #[test]
    fn test_euler_composition_matches_glam() {
        let q = Quaternion::from_euler(Vector3::new(30.0, 45.0, 60.0));
        let expected: Quaternion = (glam::Quat::from_rotation_x(30.0_f32.to_radians())
            * glam::Quat::from_rotation_y(45.0_f32.to_radians())
            * glam::Quat::from_rotation_z(60.0_f32.to_radians()))
        .into();
        assert_quat_approx(q, expected);

        let v = Vector3::new(0.5, 1.5, -2.0);
        let rotated: Vector3 = (glam::Quat::from(q) * glam::Vec3::from(v)).into();
        assert_vec_approx(q * v, rotated);
    }
}
