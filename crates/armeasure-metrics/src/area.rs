//! Polygon area via planar projection and the shoelace formula.

use armeasure_math::{Point3, Tolerance};
use armeasure_projection::{project_to_plane, PlaneSource, Point2D, ProjectionBasis};

/// Unsigned area of a simple polygon given by ordered 2D vertices.
///
/// `|Σ (x_i * y_{i+1} - x_{i+1} * y_i)| / 2` over the cyclic vertex order.
/// Fewer than three vertices have zero area.
pub fn shoelace_area(points: &[Point2D]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let twice: f32 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() / 2.0
}

/// Area of a 3D polygon flattened onto the plane chosen by `source`.
///
/// Returns `None` for fewer than three vertices or when no plane can be
/// resolved (collinear leading vertices, zero supplied normal).
pub fn polygon_area(
    vertices: &[Point3],
    source: PlaneSource,
    basis: ProjectionBasis,
    tol: &Tolerance,
) -> Option<f32> {
    if vertices.len() < 3 {
        return None;
    }
    let projection = project_to_plane(vertices, source, basis, tol)?;
    Some(shoelace_area(&projection.points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn poly() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 3.0),
            Point2D::new(2.0, 5.0),
            Point2D::new(0.0, 3.0),
        ]
    }

    #[test]
    fn test_shoelace_known_area() {
        // 4x3 rectangle plus a triangle of base 4, height 2.
        assert_relative_eq!(shoelace_area(&poly()), 16.0);
    }

    #[test]
    fn test_shoelace_rotation_and_reversal_invariant() {
        let base = shoelace_area(&poly());
        for k in 0..5 {
            let mut rotated = poly();
            rotated.rotate_left(k);
            assert_relative_eq!(shoelace_area(&rotated), base, epsilon = 1e-4);
            rotated.reverse();
            assert_relative_eq!(shoelace_area(&rotated), base, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_shoelace_degenerate() {
        assert_eq!(shoelace_area(&poly()[..2]), 0.0);
    }

    #[test]
    fn test_unit_square_on_floor() {
        let square = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let tol = Tolerance::DEFAULT;
        for source in [PlaneSource::WorldUp, PlaneSource::FromVertices] {
            let area = polygon_area(&square, source, ProjectionBasis::AxisAligned, &tol).unwrap();
            assert_relative_eq!(area, 1.0);
        }
    }

    #[test]
    fn test_tilted_square_orthonormal() {
        // Unit square tilted 45 degrees about X.
        let s = std::f32::consts::FRAC_1_SQRT_2;
        let square = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, s, s),
            Point3::new(0.0, s, s),
        ];
        let area = polygon_area(
            &square,
            PlaneSource::FromVertices,
            ProjectionBasis::Orthonormal,
            &Tolerance::DEFAULT,
        )
        .unwrap();
        assert_relative_eq!(area, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_collinear_polygon_has_no_area() {
        let line = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let area = polygon_area(
            &line,
            PlaneSource::FromVertices,
            ProjectionBasis::AxisAligned,
            &Tolerance::DEFAULT,
        );
        assert!(area.is_none());
        assert!(polygon_area(
            &line[..2],
            PlaneSource::WorldUp,
            ProjectionBasis::AxisAligned,
            &Tolerance::DEFAULT
        )
        .is_none());
    }
}
