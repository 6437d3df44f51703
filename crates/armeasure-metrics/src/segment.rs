//! Measured segments and length accumulation.

use armeasure_math::{distance, midpoint, normalize_or_zero, Point3, Tolerance, Vec3};
use serde::{Deserialize, Serialize};

/// One completed measured edge. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Euclidean length in meters.
    pub fn length(&self) -> f32 {
        distance(&self.start, &self.end)
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point3 {
        midpoint(&self.start, &self.end)
    }

    /// Unit direction from start to end, or zero for a degenerate segment.
    pub fn direction(&self) -> Vec3 {
        normalize_or_zero(&(self.end - self.start))
    }

    /// Check if the segment has (effectively) zero length.
    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        tol.is_zero(self.length())
    }
}

/// Pair up `points` into independent segments: `(p0, p1), (p2, p3), ...`.
///
/// A trailing unpaired point (a segment still being drawn) is ignored.
pub fn paired_segments(points: &[Point3]) -> Vec<Segment> {
    points
        .chunks_exact(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

/// Length of every independent segment in a distance-mode point list.
pub fn segment_lengths(points: &[Point3]) -> Vec<f32> {
    paired_segments(points).iter().map(Segment::length).collect()
}

/// Cyclic edges of a polygon, skipping zero-length edges.
///
/// Returns nothing for fewer than two vertices.
pub fn polygon_edges(vertices: &[Point3], tol: &Tolerance) -> Vec<Segment> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    let n = vertices.len();
    (0..n)
        .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
        .filter(|s| !s.is_degenerate(tol))
        .collect()
}

/// Closed perimeter of a polygon.
pub fn perimeter(vertices: &[Point3], tol: &Tolerance) -> f32 {
    polygon_edges(vertices, tol).iter().map(Segment::length).sum()
}
