//! Points and rigid rotations in 3D space.

use serde::{Deserialize, Serialize};

/// A position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn length(&self) -> f32 {
        self.distance(&Point::ORIGIN)
    }

    /// Uniformly scale the vector from the origin.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Apply `rotation` to this point.
    pub fn rotated(&self, rotation: &Rotation) -> Self {
        rotation.apply(*self)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Point {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Euler angles in radians, applied in XYZ order.
///
/// The composed matrix is `Rx * Ry * Rz`, so a vector is rotated around Z
/// first and around X last.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn apply(&self, p: Point) -> Point {
        let (sz, cz) = self.z.sin_cos();
        let p = Point::new(p.x * cz - p.y * sz, p.x * sz + p.y * cz, p.z);

        let (sy, cy) = self.y.sin_cos();
        let p = Point::new(p.x * cy + p.z * sy, p.y, -p.x * sy + p.z * cy);

        let (sx, cx) = self.x.sin_cos();
        Point::new(p.x, p.y * cx - p.z * sx, p.y * sx + p.z * cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Point, b: Point) {
        assert!(a.distance(&b) < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_distance() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_identity_rotation() {
        let p = Point::new(3.0, -2.0, 7.5);
        assert_eq!(Rotation::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_quarter_turns() {
        let x_axis = Point::new(1.0, 0.0, 0.0);
        let y_axis = Point::new(0.0, 1.0, 0.0);

        assert_close(
            y_axis.rotated(&Rotation::new(FRAC_PI_2, 0.0, 0.0)),
            Point::new(0.0, 0.0, 1.0),
        );
        assert_close(
            x_axis.rotated(&Rotation::new(0.0, FRAC_PI_2, 0.0)),
            Point::new(0.0, 0.0, -1.0),
        );
        assert_close(
            x_axis.rotated(&Rotation::new(0.0, 0.0, FRAC_PI_2)),
            Point::new(0.0, 1.0, 0.0),
        );
    }

    #[test]
    fn test_rotation_order_is_z_then_y_then_x() {
        // Z turns x into y, then X turns y into z.
        let r = Rotation::new(FRAC_PI_2, 0.0, FRAC_PI_2);
        assert_close(Point::new(1.0, 0.0, 0.0).rotated(&r), Point::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotation_preserves_distance() {
        let r = Rotation::new(0.3, -1.1, 2.4);
        let a = Point::new(10.0, -4.0, 2.0);
        let b = Point::new(-3.0, 8.0, 1.5);
        let before = a.distance(&b);
        let after = a.rotated(&r).distance(&b.rotated(&r));
        assert!((before - after).abs() < 1e-3);
    }
}
