#![warn(missing_docs)]

//! Math types for the armeasure engine.
//!
//! Thin wrappers around nalgebra providing the single-precision types used
//! throughout measurement: points, vectors, directions, world axes, and
//! tolerance constants. Positions are in meters, world up is +Y.

use nalgebra::{Unit, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A point in 3D world space (meters).
pub type Point3 = nalgebra::Point3<f32>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f32>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f32>>;

/// A point in 2D plane coordinates.
pub type Point2 = nalgebra::Point2<f32>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f32>;

/// Euclidean distance between two points.
pub fn distance(a: &Point3, b: &Point3) -> f32 {
    (b - a).norm()
}

/// Midpoint of the segment `a`–`b`.
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    nalgebra::center(a, b)
}

/// Normalize `v`, returning the zero vector when `v` has zero length.
///
/// Callers treat a zero direction as "draw a single point marker".
pub fn normalize_or_zero(v: &Vec3) -> Vec3 {
    let len = v.norm();
    if len > 0.0 {
        v / len
    } else {
        Vec3::zeros()
    }
}

/// The world-up direction (+Y).
pub fn world_up() -> Dir3 {
    Vec3::y_axis()
}

/// One of the three world coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis (world up).
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// The axis along which `v` has its largest absolute component.
    ///
    /// Ties resolve in the order Y, X, Z so that flat floor planes keep the
    /// world-up axis.
    pub fn dominant(v: &Vec3) -> Self {
        let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
        if ay >= ax && ay >= az {
            Axis::Y
        } else if ax >= az {
            Axis::X
        } else {
            Axis::Z
        }
    }

    /// The component of `v` along this axis.
    pub fn component(&self, v: &Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Unit vector along this axis.
    pub fn unit(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::x(),
            Axis::Y => Vec3::y(),
            Axis::Z => Vec3::z(),
        }
    }

    /// The (horizontal, vertical) pair of axes spanning the coordinate plane
    /// perpendicular to this axis.
    ///
    /// Y maps to the floor plane XZ; X and Z map to wall planes sharing Y as
    /// their vertical axis.
    pub fn plane_axes(&self) -> (Axis, Axis) {
        match self {
            Axis::Y => (Axis::X, Axis::Z),
            Axis::X => (Axis::Z, Axis::Y),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Linear distance tolerance in meters.
    pub linear: f32,
    /// Squared-length threshold under which a cross product is treated as zero.
    pub collinear: f32,
}

impl Tolerance {
    /// Default tolerances (0.1 mm linear).
    pub const DEFAULT: Self = Self {
        linear: 1e-4,
        collinear: 1e-10,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        distance(a, b) <= self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f32) -> bool {
        d.abs() <= self.linear
    }

    /// Check if a cross product is too small to define a direction.
    pub fn is_degenerate_cross(&self, v: &Vec3) -> bool {
        v.norm_squared() <= self.collinear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_symmetric() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(-4.0, 0.5, 7.0);
        assert_relative_eq!(distance(&a, &b), distance(&b, &a));
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_triangle_inequality() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.3, -1.2, 2.0),
            Point3::new(5.0, 0.1, -0.7),
            Point3::new(1e-3, 2e-3, 0.0),
        ];
        for a in &pts {
            for b in &pts {
                for c in &pts {
                    let direct = distance(a, c);
                    let via = distance(a, b) + distance(b, c);
                    assert!(direct <= via + 1e-5, "{direct} > {via}");
                }
            }
        }
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(&Point3::new(0.0, 0.0, 0.0), &Point3::new(2.0, 4.0, -6.0));
        assert_relative_eq!(m.x, 1.0);
        assert_relative_eq!(m.y, 2.0);
        assert_relative_eq!(m.z, -3.0);
    }

    #[test]
    fn test_normalize_or_zero() {
        let n = normalize_or_zero(&Vec3::new(3.0, 0.0, 4.0));
        assert_relative_eq!(n.norm(), 1.0);
        assert_relative_eq!(n.x, 0.6);

        let z = normalize_or_zero(&Vec3::zeros());
        assert_eq!(z, Vec3::zeros());
    }

    #[test]
    fn test_dominant_axis() {
        assert_eq!(Axis::dominant(&Vec3::new(0.1, 0.9, 0.2)), Axis::Y);
        assert_eq!(Axis::dominant(&Vec3::new(-0.9, 0.1, 0.2)), Axis::X);
        assert_eq!(Axis::dominant(&Vec3::new(0.1, 0.1, -0.7)), Axis::Z);
        // Ties prefer world up.
        assert_eq!(Axis::dominant(&Vec3::new(1.0, 1.0, 1.0)), Axis::Y);
    }

    #[test]
    fn test_plane_axes() {
        assert_eq!(Axis::Y.plane_axes(), (Axis::X, Axis::Z));
        assert_eq!(Axis::X.plane_axes(), (Axis::Z, Axis::Y));
        assert_eq!(Axis::Z.plane_axes(), (Axis::X, Axis::Y));
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 5e-5, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.01, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
    }

    #[test]
    fn test_degenerate_cross() {
        let tol = Tolerance::DEFAULT;
        let a = Vec3::new(1.0, 0.0, 0.0);
        assert!(tol.is_degenerate_cross(&a.cross(&Vec3::new(2.0, 0.0, 0.0))));
        assert!(!tol.is_degenerate_cross(&a.cross(&Vec3::z())));
    }
}
