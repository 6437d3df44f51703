//! Numeric summary of a measured path.

use std::fmt;

use armeasure_math::Point3;
use armeasure_metrics::{polygon_area, polygon_edges, LengthUnit, Segment};
use armeasure_track::{DrawMode, Path};
use serde::Serialize;

use crate::config::MeasureConfig;

/// A value in SI units with its formatted label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    /// Meters or square meters.
    pub value: f32,
    /// Formatted text.
    pub label: String,
}

/// One measured edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentReport {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
    /// Length with label.
    pub length: Quantity,
}

/// Lengths, perimeter and area of one path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementReport {
    /// Draw mode of the path.
    pub mode: DrawMode,
    /// Label unit.
    pub unit: LengthUnit,
    /// Whether an area polygon was closed.
    pub closed: bool,
    /// Independent segments (distance) or polygon edges (area).
    pub segments: Vec<SegmentReport>,
    /// Polygon perimeter, area mode only.
    pub perimeter: Option<Quantity>,
    /// Polygon area, area mode with a resolvable plane only.
    pub area: Option<Quantity>,
}

impl MeasurementReport {
    /// Measure `path` with the settings in `config`.
    pub fn for_path(path: &Path, config: &MeasureConfig) -> Self {
        let unit = config.unit;
        let tol = config.tolerance();
        let length = |meters: f32| Quantity {
            value: meters,
            label: unit.format(meters),
        };
        let report = |s: &Segment| SegmentReport {
            start: s.start,
            end: s.end,
            length: length(s.length()),
        };

        match path.mode() {
            DrawMode::Distance => Self {
                mode: DrawMode::Distance,
                unit,
                closed: false,
                segments: path.segments(&tol).iter().map(report).collect(),
                perimeter: None,
                area: None,
            },
            DrawMode::Area => {
                let vertices = path.polygon_vertices();
                let edges = polygon_edges(vertices, &tol);
                let perimeter = (!edges.is_empty())
                    .then(|| length(edges.iter().map(Segment::length).sum()));
                let area = polygon_area(vertices, config.area_plane.into(), config.basis, &tol)
                    .map(|a| Quantity {
                        value: a,
                        label: unit.format_area(a),
                    });
                Self {
                    mode: DrawMode::Area,
                    unit,
                    closed: path.is_closed(),
                    segments: edges.iter().map(report).collect(),
                    perimeter,
                    area,
                }
            }
        }
    }

    /// Sum of all segment lengths in meters.
    pub fn total_length(&self) -> f32 {
        self.segments.iter().map(|s| s.length.value).sum()
    }
}

impl fmt::Display for MeasurementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            DrawMode::Distance => writeln!(f, "distance: {} segment(s)", self.segments.len())?,
            DrawMode::Area => writeln!(
                f,
                "area: {} edge(s){}",
                self.segments.len(),
                if self.closed { ", closed" } else { "" }
            )?,
        }
        for (i, s) in self.segments.iter().enumerate() {
            writeln!(f, "  {:>3}  {}", i + 1, s.length.label)?;
        }
        if let Some(p) = &self.perimeter {
            writeln!(f, "  perimeter  {}", p.label)?;
        }
        if let Some(a) = &self.area {
            writeln!(f, "  area       {}", a.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use armeasure_math::Tolerance;

    fn p(x: f32, z: f32) -> Point3 {
        Point3::new(x, 0.0, z)
    }

    #[test]
    fn test_distance_report() {
        let path = Path::from_points(
            DrawMode::Distance,
            vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0), p(0.0, 0.5), p(3.0, 3.0)],
            &Tolerance::DEFAULT,
        );
        let r = MeasurementReport::for_path(&path, &MeasureConfig::default());
        let labels: Vec<&str> = r.segments.iter().map(|s| s.length.label.as_str()).collect();
        assert_eq!(labels, vec!["100 cm", "50 cm"]);
        assert!(r.area.is_none());
        assert_relative_eq!(r.total_length(), 1.5);
    }

    #[test]
    fn test_unit_square_report() {
        let path = Path::from_points(
            DrawMode::Area,
            vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)],
            &Tolerance::DEFAULT,
        );
        let config = MeasureConfig {
            unit: LengthUnit::Meters,
            ..MeasureConfig::default()
        };
        let r = MeasurementReport::for_path(&path, &config);
        assert!(r.closed);
        assert_eq!(r.segments.len(), 4);
        assert!(r.segments.iter().all(|s| s.length.value == 1.0));
        assert_eq!(r.perimeter.as_ref().unwrap().label, "4.00 m");
        assert_eq!(r.area.as_ref().unwrap().label, "1.00 m²");

        let text = r.to_string();
        assert!(text.contains("closed"));
        assert!(text.contains("1.00 m²"));
    }

    #[test]
    fn test_short_polygon_has_no_area() {
        let path = Path::from_points(DrawMode::Area, vec![p(0.0, 0.0), p(1.0, 0.0)], &Tolerance::DEFAULT);
        let r = MeasurementReport::for_path(&path, &MeasureConfig::default());
        assert!(r.area.is_none());
        // Two vertices give a there-and-back edge pair.
        assert_relative_eq!(r.perimeter.unwrap().value, 2.0);
    }
}
