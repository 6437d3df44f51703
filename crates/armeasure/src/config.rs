//! Session configuration, loadable from TOML.

use std::path::Path;

use armeasure_drafting::{DiagramOptions, DiagramStyle};
use armeasure_math::Tolerance;
use armeasure_metrics::LengthUnit;
use armeasure_projection::{Padding, PlaneSource, ProjectionBasis};
use armeasure_snap::{SnapConfig, SnapPolicy, DEFAULT_SNAP_RADIUS};
use armeasure_track::{TrackerConfig, DEFAULT_DASH_INTERVAL, DEFAULT_MIN_LABEL_LENGTH};
use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, Result};

/// Plane used to flatten area polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaPlane {
    /// Horizontal plane through the last vertex.
    #[default]
    WorldUp,
    /// Plane through the first three vertices.
    FromVertices,
}

impl From<AreaPlane> for PlaneSource {
    fn from(plane: AreaPlane) -> Self {
        match plane {
            AreaPlane::WorldUp => PlaneSource::WorldUp,
            AreaPlane::FromVertices => PlaneSource::FromVertices,
        }
    }
}

/// Measurement session settings.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```
/// use armeasure::MeasureConfig;
///
/// let config = MeasureConfig::from_toml_str("snap_radius = 0.03\nunit = \"inches\"").unwrap();
/// assert_eq!(config.snap_radius, 0.03);
/// assert_eq!(config.padding, MeasureConfig::default().padding);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureConfig {
    /// Snap radius in meters.
    pub snap_radius: f32,
    /// Which in-range target to snap to.
    pub snap_policy: SnapPolicy,
    /// Label unit.
    pub unit: LengthUnit,
    /// Shortest labelled length in meters.
    pub min_label_length: f32,
    /// Preview dash spacing in meters.
    pub dash_interval: f32,
    /// Distance within which a vertex closes the polygon (meters).
    pub closure_tolerance: f32,
    /// 2D coordinate basis for diagrams and areas.
    pub basis: ProjectionBasis,
    /// Plane used to flatten area polygons.
    pub area_plane: AreaPlane,
    /// Total diagram padding in viewport units.
    pub padding: Padding,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            snap_radius: DEFAULT_SNAP_RADIUS,
            snap_policy: SnapPolicy::default(),
            unit: LengthUnit::default(),
            min_label_length: DEFAULT_MIN_LABEL_LENGTH,
            dash_interval: DEFAULT_DASH_INTERVAL,
            closure_tolerance: Tolerance::DEFAULT.linear,
            basis: ProjectionBasis::default(),
            area_plane: AreaPlane::default(),
            padding: Padding::default(),
        }
    }
}

impl MeasureConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.snap_radius <= 0.0 {
            return Err(MeasureError::InvalidConfig(
                "snap_radius must be positive".into(),
            ));
        }
        if self.dash_interval <= 0.0 {
            return Err(MeasureError::InvalidConfig(
                "dash_interval must be positive".into(),
            ));
        }
        if self.closure_tolerance <= 0.0 {
            return Err(MeasureError::InvalidConfig(
                "closure_tolerance must be positive".into(),
            ));
        }
        if self.min_label_length < 0.0 {
            return Err(MeasureError::InvalidConfig(
                "min_label_length must not be negative".into(),
            ));
        }
        if self.padding.horizontal < 0.0 || self.padding.vertical < 0.0 {
            return Err(MeasureError::InvalidConfig(
                "padding must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Geometric tolerance with the configured closure distance.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance {
            linear: self.closure_tolerance,
            ..Tolerance::DEFAULT
        }
    }

    /// Snap settings.
    pub fn snap(&self) -> SnapConfig {
        SnapConfig {
            radius: self.snap_radius,
            policy: self.snap_policy,
        }
    }

    /// Tracker settings.
    pub fn tracker(&self) -> TrackerConfig {
        TrackerConfig {
            snap: self.snap(),
            tolerance: self.tolerance(),
        }
    }

    /// Diagram options at an interactive zoom factor.
    pub fn diagram_options(&self, zoom: f32) -> DiagramOptions {
        DiagramOptions {
            unit: self.unit,
            min_label_length: self.min_label_length,
            plane: self.area_plane.into(),
            basis: self.basis,
            tolerance: self.tolerance(),
            style: DiagramStyle::default().at_zoom(zoom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = MeasureConfig::default();
        assert_eq!(c.snap_radius, 0.05);
        assert_eq!(c.min_label_length, 0.08);
        assert_eq!(c.padding.horizontal, 20.0);
        assert_eq!(c.padding.vertical, 80.0);
        assert_eq!(c.unit, LengthUnit::Centimeters);
        assert_eq!(c.snap_policy, SnapPolicy::FirstMatch);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let c = MeasureConfig::from_toml_str(
            r#"
            snap_policy = "nearest_match"
            basis = "orthonormal"
            area_plane = "from_vertices"

            [padding]
            horizontal = 0.0
            vertical = 0.0
            "#,
        )
        .unwrap();
        assert_eq!(c.snap_policy, SnapPolicy::NearestMatch);
        assert_eq!(c.basis, ProjectionBasis::Orthonormal);
        assert_eq!(c.area_plane, AreaPlane::FromVertices);
        assert_eq!(c.padding, Padding::uniform(0.0));
        assert_eq!(c.snap_radius, DEFAULT_SNAP_RADIUS);
    }

    #[test]
    fn test_toml_round_trip() {
        let c = MeasureConfig {
            unit: LengthUnit::Millimeters,
            ..MeasureConfig::default()
        };
        let text = c.to_toml_string().unwrap();
        assert_eq!(MeasureConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            MeasureConfig::from_toml_str("snap_radius = 0.0"),
            Err(MeasureError::InvalidConfig(_))
        ));
        assert!(matches!(
            MeasureConfig::from_toml_str("unit = \"furlongs\""),
            Err(MeasureError::Toml(_))
        ));
        let c = MeasureConfig {
            padding: Padding {
                horizontal: -1.0,
                vertical: 0.0,
            },
            ..MeasureConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            MeasureConfig::load("/nonexistent/armeasure.toml"),
            Err(MeasureError::Io(_))
        ));
    }
}
