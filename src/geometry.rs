//! Geometry utilities for path sampling and camera orientation.

use bevy::prelude::*;

/// Sideways vector for a path tangent: `normalize(tangent × Y) / 2`.
///
/// The result is half unit length. It is zero when the tangent is zero or
/// parallel to Y.
pub fn side_normal(tangent: Vec3) -> Vec3 {
    tangent.cross(Vec3::Y).normalize_or_zero() / 2.0
}

/// A local coordinate frame defined by tangent, right, and up vectors.
///
/// Used to orient a camera along a sampled path. Degenerate cases (tangent
/// parallel to the preferred up) fall back to X as the reference axis.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateFrame {
    /// The tangent (forward along the path) direction.
    pub tangent: Vec3,
    /// The right direction (perpendicular to tangent and up).
    pub right: Vec3,
    /// The corrected up direction (perpendicular to tangent and right).
    pub up: Vec3,
}

impl CoordinateFrame {
    /// Build a coordinate frame from a tangent direction using Y-up convention.
    pub fn from_tangent(tangent: Vec3) -> Self {
        Self::from_tangent_with_up(tangent, Vec3::Y)
    }

    /// Build a coordinate frame from a tangent and preferred up direction.
    ///
    /// The actual up vector may differ from `preferred_up` to maintain
    /// orthogonality with the tangent.
    pub fn from_tangent_with_up(tangent: Vec3, preferred_up: Vec3) -> Self {
        let tangent = tangent.normalize_or_zero();

        let right = tangent.cross(preferred_up).normalize_or_zero();
        let up = right.cross(tangent).normalize_or_zero();

        // Tangent parallel to preferred_up
        let (right, up) = if right.length_squared() < 0.001 {
            let right = tangent.cross(Vec3::X).normalize_or_zero();
            let up = right.cross(tangent).normalize_or_zero();
            (right, up)
        } else {
            (right, up)
        };

        Self { tangent, right, up }
    }

    /// Check if this frame is valid (non-degenerate).
    pub fn is_valid(&self) -> bool {
        self.right.length_squared() > 0.001 && self.up.length_squared() > 0.001
    }

    /// Convert to a rotation quaternion.
    ///
    /// The rotation orients an entity so that its local -Z (Bevy's forward)
    /// points along `tangent` and its local +Y points along `up`.
    pub fn to_rotation(&self) -> Quat {
        if !self.is_valid() {
            return Quat::IDENTITY;
        }
        let back = -self.tangent;
        Quat::from_mat3(&Mat3::from_cols(self.right, self.up, back))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_normal_is_half_length() {
        let normal = side_normal(Vec3::new(1.0, 0.0, 1.0).normalize());
        assert!((normal.length() - 0.5).abs() < 1e-6);
        assert!(normal.dot(Vec3::Y).abs() < 1e-6);
    }

    #[test]
    fn test_side_normal_degenerate() {
        assert_eq!(side_normal(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(side_normal(Vec3::Y), Vec3::ZERO);
    }

    #[test]
    fn test_side_normal_matches_frame_right() {
        let tangent = Vec3::new(0.3, 0.2, -0.9).normalize();
        let frame = CoordinateFrame::from_tangent(tangent);
        assert!((side_normal(tangent) * 2.0 - frame.right).length() < 0.001);
    }

    #[test]
    fn test_from_tangent_basic() {
        let frame = CoordinateFrame::from_tangent(Vec3::Z);
        assert!(frame.is_valid());
        assert!((frame.tangent - Vec3::Z).length() < 0.001);
        assert!((frame.up - Vec3::Y).length() < 0.001);
        assert!((frame.right - Vec3::NEG_X).length() < 0.001);
    }

    #[test]
    fn test_from_tangent_degenerate() {
        let frame = CoordinateFrame::from_tangent(Vec3::Y);
        assert!(frame.is_valid());
        assert!(!CoordinateFrame::from_tangent(Vec3::ZERO).is_valid());
    }

    #[test]
    fn test_rotation_looks_along_tangent() {
        let tangent = Vec3::new(1.0, 0.0, 1.0).normalize();
        let rotation = CoordinateFrame::from_tangent(tangent).to_rotation();
        assert!((rotation * Vec3::NEG_Z - tangent).length() < 0.001);
        assert!((rotation * Vec3::Y - Vec3::Y).length() < 0.001);
    }
}
