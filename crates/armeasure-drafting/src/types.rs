//! Core types for flat measurement diagrams.

use std::f32::consts::{FRAC_PI_2, PI};

use armeasure_metrics::LengthUnit;
use armeasure_projection::{BoundingBox2D, Point2D};
use armeasure_track::DrawMode;
use serde::{Deserialize, Serialize};

/// What a label's value measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    /// A length in meters.
    Length,
    /// An area in square meters.
    Area,
}

/// A dimension label placed in diagram coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Formatted text.
    pub text: String,
    /// Label center.
    pub anchor: Point2D,
    /// Rotation in radians, always within `[-π/2, π/2]`.
    pub rotation: f32,
    /// Measured value in SI units, kept for relabelling.
    pub value: f32,
    /// What `value` measures.
    pub kind: LabelKind,
}

impl Label {
    /// A length label.
    pub fn length(meters: f32, anchor: Point2D, rotation: f32, unit: LengthUnit) -> Self {
        Self {
            text: unit.format(meters),
            anchor,
            rotation,
            value: meters,
            kind: LabelKind::Length,
        }
    }

    /// An unrotated area label.
    pub fn area(square_meters: f32, anchor: Point2D, unit: LengthUnit) -> Self {
        Self {
            text: unit.format_area(square_meters),
            anchor,
            rotation: 0.0,
            value: square_meters,
            kind: LabelKind::Area,
        }
    }

    /// Re-format the text in `unit`.
    pub fn relabel(&mut self, unit: LengthUnit) {
        self.text = match self.kind {
            LabelKind::Length => unit.format(self.value),
            LabelKind::Area => unit.format_area(self.value),
        };
    }
}

/// Text angle for a line from `start` to `end`, folded so text never reads
/// upside down.
pub fn upright_angle(start: Point2D, end: Point2D) -> f32 {
    let angle = (end.y - start.y).atan2(end.x - start.x);
    if angle > FRAC_PI_2 {
        angle - PI
    } else if angle < -FRAC_PI_2 {
        angle + PI
    } else {
        angle
    }
}

/// One drawn edge of a diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    /// Start in viewport coordinates.
    pub start: Point2D,
    /// End in viewport coordinates.
    pub end: Point2D,
    /// True 3D length in meters.
    pub length: f32,
    /// Length label, absent for very short edges.
    pub label: Option<Label>,
}

/// Stroke and text sizes for rendering a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramStyle {
    /// Edge stroke width.
    pub stroke_width: f32,
    /// Label font size.
    pub label_size: f32,
    /// Vertex marker radius.
    pub marker_radius: f32,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            label_size: 12.0,
            marker_radius: 5.0,
        }
    }
}

impl DiagramStyle {
    /// Sizes compensated for an interactive zoom factor, so strokes and text
    /// keep their on-screen size. Non-positive zoom leaves the style unchanged.
    pub fn at_zoom(&self, zoom: f32) -> Self {
        if zoom <= 0.0 {
            return *self;
        }
        Self {
            stroke_width: self.stroke_width / zoom,
            label_size: self.label_size / zoom,
            marker_radius: self.marker_radius / zoom,
        }
    }
}

/// A measurement flattened and fitted into a viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// Draw mode of the source path.
    pub mode: DrawMode,
    /// Drawn edges.
    pub edges: Vec<DiagramEdge>,
    /// Vertex markers in viewport coordinates.
    pub markers: Vec<Point2D>,
    /// Bounds of the markers in viewport coordinates.
    pub bounds: BoundingBox2D,
    /// Plane units (meters) to viewport units.
    pub scale: f32,
    /// Whether the source polygon was closed.
    pub closed: bool,
    /// Enclosed area in square meters (area mode only).
    pub area: Option<f32>,
    /// Area label at the polygon centroid.
    pub area_label: Option<Label>,
    /// Unit the labels are currently formatted in.
    pub unit: LengthUnit,
    /// Rendering sizes.
    pub style: DiagramStyle,
}

impl Diagram {
    /// Re-format every label in `unit` without re-projecting.
    pub fn relabel(&mut self, unit: LengthUnit) {
        self.unit = unit;
        for label in self.labels_mut() {
            label.relabel(unit);
        }
    }

    /// All labels, edge labels first.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.edges
            .iter()
            .filter_map(|e| e.label.as_ref())
            .chain(self.area_label.as_ref())
    }

    fn labels_mut(&mut self) -> impl Iterator<Item = &mut Label> {
        self.edges
            .iter_mut()
            .filter_map(|e| e.label.as_mut())
            .chain(self.area_label.as_mut())
    }

    /// Total length of all edges in meters.
    pub fn total_length(&self) -> f32 {
        self.edges.iter().map(|e| e.length).sum()
    }
}
