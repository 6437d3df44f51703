//! Dashed live preview line between the open endpoint and the probe.

use armeasure_math::{normalize_or_zero, Point3};
use armeasure_metrics::{LengthUnit, Segment};
use serde::Serialize;

/// Spacing of preview dash markers in meters.
pub const DEFAULT_DASH_INTERVAL: f32 = 0.02;

/// Lines shorter than this carry no length label (meters).
pub const DEFAULT_MIN_LABEL_LENGTH: f32 = 0.08;

/// Marker positions every `interval` meters from `start` towards `end`.
///
/// A zero-length line (or a non-positive interval) yields only `start`.
pub fn dash_positions(start: Point3, end: Point3, interval: f32) -> Vec<Point3> {
    let delta = end - start;
    let length = delta.norm();
    if length <= 0.0 || interval <= 0.0 {
        return vec![start];
    }
    let dir = normalize_or_zero(&delta);
    (0..)
        .map(|k| k as f32 * interval)
        .take_while(|t| *t < length)
        .map(|t| start + dir * t)
        .collect()
}

/// Rendering data for the live preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewLine {
    /// Open endpoint to effective probe.
    pub segment: Segment,
    /// Length in meters.
    pub length: f32,
    /// Dash marker positions.
    pub dashes: Vec<Point3>,
    /// Length label, absent for short lines.
    pub label: Option<String>,
}

impl PreviewLine {
    /// Sample dashes and label a preview segment.
    pub fn new(segment: Segment, dash_interval: f32, min_label_length: f32, unit: LengthUnit) -> Self {
        let length = segment.length();
        let label = (length >= min_label_length).then(|| unit.format(length));
        Self {
            dashes: dash_positions(segment.start, segment.end, dash_interval),
            segment,
            length,
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_length_single_marker() {
        let a = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(dash_positions(a, a, DEFAULT_DASH_INTERVAL), vec![a]);
    }

    #[test]
    fn test_dash_spacing() {
        let dashes = dash_positions(Point3::origin(), Point3::new(0.1, 0.0, 0.0), 0.03);
        assert_eq!(dashes.len(), 4);
        assert_relative_eq!(dashes[3].x, 0.09, epsilon = 1e-6);
        assert!(dashes.iter().all(|d| d.x < 0.1));
    }

    #[test]
    fn test_label_threshold() {
        let short = Segment::new(Point3::origin(), Point3::new(0.05, 0.0, 0.0));
        let long = Segment::new(Point3::origin(), Point3::new(0.5, 0.0, 0.0));
        let unit = LengthUnit::Centimeters;
        assert!(PreviewLine::new(short, 0.02, DEFAULT_MIN_LABEL_LENGTH, unit)
            .label
            .is_none());
        let line = PreviewLine::new(long, 0.02, DEFAULT_MIN_LABEL_LENGTH, unit);
        assert_eq!(line.label.as_deref(), Some("50 cm"));
        assert_relative_eq!(line.length, 0.5);
    }
}
