//! Build a flat, labelled diagram from a measured path.

use armeasure_math::{Point3, Tolerance};
use armeasure_metrics::{shoelace_area, LengthUnit};
use armeasure_projection::{
    fit_to_viewport, project_to_plane, PlaneSource, Point2D, ProjectionBasis, Viewport,
};
use armeasure_track::{DrawMode, Path, DEFAULT_MIN_LABEL_LENGTH};
use tracing::{debug, warn};

use crate::types::{upright_angle, Diagram, DiagramEdge, DiagramStyle, Label};

/// Options for [`build_diagram`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramOptions {
    /// Label unit.
    pub unit: LengthUnit,
    /// Edges shorter than this (meters) are drawn without a label.
    pub min_label_length: f32,
    /// Projection plane selection.
    pub plane: PlaneSource,
    /// 2D coordinate basis on the plane.
    pub basis: ProjectionBasis,
    /// Degenerate-edge and collinearity tolerance.
    pub tolerance: Tolerance,
    /// Rendering sizes.
    pub style: DiagramStyle,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            unit: LengthUnit::default(),
            min_label_length: DEFAULT_MIN_LABEL_LENGTH,
            plane: PlaneSource::default(),
            basis: ProjectionBasis::default(),
            tolerance: Tolerance::DEFAULT,
            style: DiagramStyle::default(),
        }
    }
}

/// Vertices drawn for `path`: complete segment pairs in distance mode, the
/// polygon without its closing duplicate in area mode.
fn drawn_vertices(path: &Path) -> &[Point3] {
    match path.mode() {
        DrawMode::Distance => {
            let points = path.points();
            &points[..points.len() - points.len() % 2]
        }
        DrawMode::Area => path.polygon_vertices(),
    }
}

/// Index pairs of the edges to draw.
fn edge_indices(mode: DrawMode, vertices: &[Point3], tol: &Tolerance) -> Vec<(usize, usize)> {
    let n = vertices.len();
    match mode {
        DrawMode::Distance => (0..n).step_by(2).map(|i| (i, i + 1)).collect(),
        DrawMode::Area => (0..n)
            .map(|i| (i, (i + 1) % n))
            .filter(|&(i, j)| !tol.points_equal(&vertices[i], &vertices[j]))
            .collect(),
    }
}

fn centroid(points: &[Point2D]) -> Point2D {
    let n = points.len().max(1) as f32;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point2D::new(sx / n, sy / n)
}

/// Project `path` onto a plane, fit it into `viewport` and label every edge.
///
/// Returns `None` when the path has fewer than two drawable vertices or the
/// viewport has no room after padding. If the requested plane cannot be
/// resolved (collinear polygon) the world-up plane is used instead and no
/// area is reported.
pub fn build_diagram(path: &Path, options: &DiagramOptions, viewport: &Viewport) -> Option<Diagram> {
    let vertices = drawn_vertices(path);
    if vertices.len() < 2 {
        return None;
    }
    let tol = &options.tolerance;

    let (projection, plane_ok) = match project_to_plane(vertices, options.plane, options.basis, tol) {
        Some(p) => (p, true),
        None => {
            warn!(
                vertices = vertices.len(),
                "projection plane unresolved, falling back to world up"
            );
            let p = project_to_plane(vertices, PlaneSource::WorldUp, options.basis, tol)?;
            (p, false)
        }
    };

    let area = (path.mode() == DrawMode::Area && plane_ok && vertices.len() >= 3)
        .then(|| shoelace_area(&projection.points));

    let fit = fit_to_viewport(&projection.points, viewport)?;
    let pts = &fit.points;

    let edges: Vec<DiagramEdge> = edge_indices(path.mode(), vertices, tol)
        .into_iter()
        .map(|(i, j)| {
            let length = armeasure_math::distance(&vertices[i], &vertices[j]);
            let (start, end) = (pts[i], pts[j]);
            let label = (length >= options.min_label_length).then(|| {
                Label::length(length, start.midpoint(&end), upright_angle(start, end), options.unit)
            });
            DiagramEdge {
                start,
                end,
                length,
                label,
            }
        })
        .collect();

    let area_label = area.map(|a| Label::area(a, centroid(pts), options.unit));
    debug!(
        edges = edges.len(),
        scale = fit.scale(),
        area = ?area,
        "diagram built"
    );

    Some(Diagram {
        mode: path.mode(),
        edges,
        bounds: fit.bounds(),
        markers: fit.points.clone(),
        scale: fit.scale(),
        closed: path.is_closed(),
        area,
        area_label,
        unit: options.unit,
        style: options.style,
    })
}
