//! Projection planes and 3D-to-2D point mapping.
//!
//! A [`ProjectionPlane`] is resolved from a [`PlaneSource`] and an ordered
//! vertex list, then every vertex is dropped onto the plane along its normal
//! and expressed in 2D using a [`ProjectionBasis`].

use armeasure_math::{normalize_or_zero, world_up, Axis, Dir3, Point3, Tolerance, Vec3};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::Point2D;

/// How the projection plane is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PlaneSource {
    /// Caller-supplied normal. The origin defaults to the last vertex.
    Supplied {
        /// Plane normal; need not be normalized.
        normal: Vec3,
        /// Plane origin, or `None` for the last vertex.
        origin: Option<Point3>,
    },
    /// World up (+Y) through the last vertex.
    #[default]
    WorldUp,
    /// Normal derived from the first three vertices, origin at the last vertex.
    FromVertices,
}

/// How projected points are expressed as 2D coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionBasis {
    /// Keep the two world axes orthogonal to the normal's dominant component
    /// (Y-up planes map to XZ). Exact only for axis-aligned planes.
    #[default]
    AxisAligned,
    /// An orthonormal in-plane frame. Coplanar points keep their distances.
    Orthonormal,
}

/// A plane used transiently to flatten a vertex list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPlane {
    /// A point on the plane.
    pub origin: Point3,
    /// Unit plane normal.
    pub normal: Dir3,
}

impl ProjectionPlane {
    /// Create a plane from an origin and a (not necessarily unit) normal.
    ///
    /// Returns `None` for a zero normal.
    pub fn new(origin: Point3, normal: Vec3) -> Option<Self> {
        let n = normalize_or_zero(&normal);
        if n == Vec3::zeros() {
            return None;
        }
        Some(Self {
            origin,
            normal: Dir3::new_unchecked(n),
        })
    }

    /// Horizontal plane through `origin`.
    pub fn world_up(origin: Point3) -> Self {
        Self {
            origin,
            normal: world_up(),
        }
    }

    /// Plane through `a`, `b`, `c` with normal `normalize((b - a) × (c - a))`.
    ///
    /// Returns `None` when the three points are collinear.
    pub fn through_points(a: &Point3, b: &Point3, c: &Point3, tol: &Tolerance) -> Option<Self> {
        let n = (b - a).cross(&(c - a));
        if tol.is_degenerate_cross(&n) {
            return None;
        }
        Self::new(*a, n)
    }

    /// Signed distance of `p` from the plane along the normal.
    pub fn signed_distance(&self, p: &Point3) -> f32 {
        (p - self.origin).dot(self.normal.as_ref())
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn project_point(&self, p: &Point3) -> Point3 {
        p - self.normal.as_ref() * self.signed_distance(p)
    }

    /// The world axis closest to the plane normal.
    pub fn dominant_axis(&self) -> Axis {
        Axis::dominant(self.normal.as_ref())
    }

    /// The 2D frame for `basis`.
    pub fn frame(&self, basis: ProjectionBasis) -> PlaneFrame {
        let (h, v) = self.dominant_axis().plane_axes();
        match basis {
            ProjectionBasis::AxisAligned => PlaneFrame {
                origin: Point3::origin(),
                u: h.unit(),
                v: v.unit(),
            },
            ProjectionBasis::Orthonormal => {
                // Gram-Schmidt the coordinate-plane axes against the normal so
                // floors still come out as X/Z and walls keep Y vertical.
                let n = self.normal.into_inner();
                let hu = h.unit();
                let u = normalize_or_zero(&(hu - n * hu.dot(&n)));
                let vu = v.unit();
                let v = normalize_or_zero(&(vu - n * vu.dot(&n) - u * vu.dot(&u)));
                PlaneFrame {
                    origin: self.origin,
                    u,
                    v,
                }
            }
        }
    }
}

/// Two in-plane axes and the point they are measured from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFrame {
    /// Reference point for coordinates.
    pub origin: Point3,
    /// Horizontal axis.
    pub u: Vec3,
    /// Vertical axis.
    pub v: Vec3,
}

impl PlaneFrame {
    /// Coordinates of `p` along the frame axes.
    pub fn to_2d(&self, p: &Point3) -> Point2D {
        let d = p - self.origin;
        Point2D::new(d.dot(&self.u), d.dot(&self.v))
    }
}

/// Resolve the projection plane for an ordered vertex list.
///
/// Returns `None` for a zero supplied normal, or for [`PlaneSource::FromVertices`]
/// with fewer than three vertices or collinear leading vertices.
pub fn resolve_plane(
    points: &[Point3],
    source: PlaneSource,
    tol: &Tolerance,
) -> Option<ProjectionPlane> {
    let last = points.last().copied().unwrap_or_else(Point3::origin);
    match source {
        PlaneSource::Supplied { normal, origin } => {
            ProjectionPlane::new(origin.unwrap_or(last), normal)
        }
        PlaneSource::WorldUp => Some(ProjectionPlane::world_up(last)),
        PlaneSource::FromVertices => {
            let [a, b, c] = match points {
                [a, b, c, ..] => [a, b, c],
                _ => return None,
            };
            let plane = ProjectionPlane::through_points(a, b, c, tol);
            if plane.is_none() {
                warn!("leading vertices are collinear; no projection plane");
            }
            plane.map(|p| ProjectionPlane {
                origin: last,
                normal: p.normal,
            })
        }
    }
}

/// Project each point onto `plane` and express it in `basis` coordinates.
pub fn project_points(
    points: &[Point3],
    plane: &ProjectionPlane,
    basis: ProjectionBasis,
) -> Vec<Point2D> {
    let frame = plane.frame(basis);
    points
        .iter()
        .map(|p| frame.to_2d(&plane.project_point(p)))
        .collect()
}

/// A resolved plane together with the flattened points.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// The plane the points were dropped onto.
    pub plane: ProjectionPlane,
    /// The projected 2D points, in input order.
    pub points: Vec<Point2D>,
}

/// Resolve a plane and project `points` onto it in one step.
pub fn project_to_plane(
    points: &[Point3],
    source: PlaneSource,
    basis: ProjectionBasis,
    tol: &Tolerance,
) -> Option<Projection> {
    let plane = resolve_plane(points, source, tol)?;
    let projected = project_points(points, &plane, basis);
    Some(Projection {
        plane,
        points: projected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square_xz() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_project_point_drops_along_normal() {
        let plane = ProjectionPlane::world_up(Point3::new(0.0, 1.0, 0.0));
        let p = plane.project_point(&Point3::new(2.0, 5.0, -3.0));
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 1.0);
        assert_relative_eq!(p.z, -3.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 5.0, 0.0)), 4.0);
    }

    #[test]
    fn test_world_up_maps_to_xz() {
        let pts = unit_square_xz();
        let proj = project_to_plane(
            &pts,
            PlaneSource::WorldUp,
            ProjectionBasis::AxisAligned,
            &Tolerance::DEFAULT,
        )
        .unwrap();
        assert_eq!(proj.points[2], Point2D::new(1.0, 1.0));
        assert_eq!(proj.points[3], Point2D::new(0.0, 1.0));
    }

    #[test]
    fn test_supplied_normal_defaults_origin_to_last_vertex() {
        let pts = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0)];
        let plane = resolve_plane(
            &pts,
            PlaneSource::Supplied {
                normal: Vec3::new(0.0, 0.0, 2.0),
                origin: None,
            },
            &Tolerance::DEFAULT,
        )
        .unwrap();
        assert_eq!(plane.origin, pts[1]);
        assert_relative_eq!(plane.normal.z, 1.0);
    }

    #[test]
    fn test_zero_supplied_normal_is_none() {
        let plane = resolve_plane(
            &unit_square_xz(),
            PlaneSource::Supplied {
                normal: Vec3::zeros(),
                origin: None,
            },
            &Tolerance::DEFAULT,
        );
        assert!(plane.is_none());
    }

    #[test]
    fn test_from_vertices_requires_three_non_collinear() {
        let tol = Tolerance::DEFAULT;
        let two = [Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        assert!(resolve_plane(&two, PlaneSource::FromVertices, &tol).is_none());

        let collinear = [
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 1.0),
        ];
        assert!(resolve_plane(&collinear, PlaneSource::FromVertices, &tol).is_none());

        let plane = resolve_plane(&unit_square_xz(), PlaneSource::FromVertices, &tol).unwrap();
        // (1,0,0) x (1,0,1) = (0,-1,0)
        assert_relative_eq!(plane.normal.y.abs(), 1.0);
        assert_eq!(plane.dominant_axis(), Axis::Y);
        assert_eq!(plane.origin, Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_wall_plane_axis_aligned() {
        // Vertical wall at x = 2.
        let pts = [
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 3.0),
            Point3::new(2.0, 2.5, 3.0),
        ];
        let proj = project_to_plane(
            &pts,
            PlaneSource::FromVertices,
            ProjectionBasis::AxisAligned,
            &Tolerance::DEFAULT,
        )
        .unwrap();
        assert_eq!(proj.points[1], Point2D::new(3.0, 0.0));
        assert_eq!(proj.points[2], Point2D::new(3.0, 2.5));
    }

    #[test]
    fn test_orthonormal_preserves_distances_on_tilted_plane() {
        let pts = [
            Point3::new(0.2, 0.1, -0.4),
            Point3::new(1.3, 0.9, 0.2),
            Point3::new(-0.5, 1.7, 0.8),
        ];
        let proj = project_to_plane(
            &pts,
            PlaneSource::FromVertices,
            ProjectionBasis::Orthonormal,
            &Tolerance::DEFAULT,
        )
        .unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let d3 = (pts[j] - pts[i]).norm();
                let d2 = proj.points[i].distance(&proj.points[j]);
                assert_relative_eq!(d2, d3, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_orthonormal_frame_is_orthonormal() {
        let plane = ProjectionPlane::new(Point3::origin(), Vec3::new(0.3, 0.8, -0.5)).unwrap();
        let f = plane.frame(ProjectionBasis::Orthonormal);
        let n = plane.normal.into_inner();
        assert_relative_eq!(f.u.norm(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(f.v.norm(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(f.u.dot(&f.v), 0.0, epsilon = 1e-6);
        assert_relative_eq!(f.u.dot(&n), 0.0, epsilon = 1e-6);
        assert_relative_eq!(f.v.dot(&n), 0.0, epsilon = 1e-6);
    }
}
