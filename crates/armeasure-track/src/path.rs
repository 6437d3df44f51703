//! The ordered vertex list of an in-progress measurement.

use armeasure_math::{Point3, Tolerance};
use armeasure_metrics::{paired_segments, Segment};
use serde::{Deserialize, Serialize};

/// What the committed points describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Independent two-point segments.
    #[default]
    Distance,
    /// Vertices of a single polygon.
    Area,
}

/// All vertices placed in the current measurement session.
///
/// In distance mode the points pair up into independent segments (even
/// length when no segment is in progress). In area mode they are the vertices
/// of one polygon, closed once the last point coincides with the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    mode: DrawMode,
    points: Vec<Point3>,
    closed: bool,
}

impl Path {
    /// An empty path.
    pub fn new(mode: DrawMode) -> Self {
        Self {
            mode,
            points: Vec::new(),
            closed: false,
        }
    }

    /// Build a path from recorded points. An area path whose last point
    /// coincides with its first (and has at least three other vertices) is
    /// marked closed.
    pub fn from_points(mode: DrawMode, points: Vec<Point3>, tol: &Tolerance) -> Self {
        let closed = mode == DrawMode::Area
            && points.len() >= 4
            && tol.points_equal(&points[0], &points[points.len() - 1]);
        Self {
            mode,
            points,
            closed,
        }
    }

    /// The draw mode.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// All committed points, in commit order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of committed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no point has been committed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if an area polygon has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Check if a segment or polygon is being drawn.
    pub fn is_drawing(&self) -> bool {
        match self.mode {
            DrawMode::Distance => self.points.len() % 2 == 1,
            DrawMode::Area => !self.points.is_empty() && !self.closed,
        }
    }

    /// Where a live preview line starts: the open end of the current
    /// segment or polygon.
    pub fn anchor(&self) -> Option<Point3> {
        if self.is_drawing() {
            self.points.last().copied()
        } else {
            None
        }
    }

    /// Polygon vertices without the duplicated closing point.
    pub fn polygon_vertices(&self) -> &[Point3] {
        if self.closed {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// Finished edges: independent pairs in distance mode, consecutive
    /// non-degenerate edges in area mode.
    pub fn segments(&self, tol: &Tolerance) -> Vec<Segment> {
        match self.mode {
            DrawMode::Distance => paired_segments(&self.points),
            DrawMode::Area => self
                .points
                .windows(2)
                .map(|w| Segment::new(w[0], w[1]))
                .filter(|s| !s.is_degenerate(tol))
                .collect(),
        }
    }

    pub(crate) fn push(&mut self, p: Point3) {
        self.points.push(p);
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }
}
