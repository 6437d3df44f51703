//! Dimension panels placed in the 3D scene.

use armeasure_math::{Point3, Tolerance, Vec3};
use armeasure_metrics::{LengthUnit, Segment};
use armeasure_track::Path;
use serde::Serialize;

/// Height of the panel above the measured line (meters).
pub const LABEL_LIFT: f32 = 0.0025;

/// Panel width in meters.
pub const PANEL_WIDTH: f32 = 0.1;

/// Panel height in meters.
pub const PANEL_HEIGHT: f32 = 0.05;

/// A flat text panel lying on a measured segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLabel {
    /// Panel center in world space.
    pub anchor: Point3,
    /// Rotation about world up, in radians.
    pub yaw: f32,
    /// Formatted length.
    pub text: String,
    /// Length in meters.
    pub length: f32,
}

impl SceneLabel {
    /// Panel for one segment.
    pub fn for_segment(segment: &Segment, unit: LengthUnit) -> Self {
        let dir = segment.direction();
        let length = segment.length();
        Self {
            anchor: segment.midpoint() + Vec3::y() * LABEL_LIFT,
            yaw: -dir.z.atan2(dir.x),
            text: unit.format(length),
            length,
        }
    }

    /// Re-format the text in `unit`.
    pub fn relabel(&mut self, unit: LengthUnit) {
        self.text = unit.format(self.length);
    }
}

/// Panels for every finished edge of `path` at least `min_length` long.
pub fn scene_labels(path: &Path, unit: LengthUnit, min_length: f32, tol: &Tolerance) -> Vec<SceneLabel> {
    path.segments(tol)
        .iter()
        .filter(|s| s.length() >= min_length)
        .map(|s| SceneLabel::for_segment(s, unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use armeasure_track::DrawMode;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_panel_sits_above_midpoint() {
        let s = Segment::new(Point3::new(0.0, 1.0, 0.0), Point3::new(0.0, 1.0, 0.5));
        let label = SceneLabel::for_segment(&s, LengthUnit::Centimeters);
        assert_relative_eq!(label.anchor.y, 1.0025, epsilon = 1e-6);
        assert_relative_eq!(label.anchor.z, 0.25);
        // Along +Z the panel turns a quarter clockwise about up.
        assert_relative_eq!(label.yaw, -FRAC_PI_2);
        assert_eq!(label.text, "50 cm");
    }

    #[test]
    fn test_scene_labels_skip_short_segments() {
        let path = Path::from_points(
            DrawMode::Distance,
            vec![
                Point3::origin(),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.03, 0.0, 0.0),
            ],
            &Tolerance::DEFAULT,
        );
        let labels = scene_labels(&path, LengthUnit::Meters, 0.08, &Tolerance::DEFAULT);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "1.00 m");
        assert_relative_eq!(labels[0].yaw, 0.0);
    }
}
