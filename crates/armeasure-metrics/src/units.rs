//! Display units for lengths and areas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Centimeters per inch.
pub const CM_PER_INCH: f32 = 2.54;

/// Error returned when parsing an unknown unit name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown length unit: {0:?} (expected m, cm, mm or in)")]
pub struct UnitParseError(pub String);

/// Unit used to label measured lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Meters, two decimals.
    Meters,
    /// Whole centimeters (truncated).
    #[default]
    Centimeters,
    /// Whole millimeters (truncated).
    Millimeters,
    /// Whole inches (rounded).
    Inches,
}

impl LengthUnit {
    /// All units, in display order.
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Meters,
        LengthUnit::Centimeters,
        LengthUnit::Millimeters,
        LengthUnit::Inches,
    ];

    /// Short symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Millimeters => "mm",
            LengthUnit::Inches => "in",
        }
    }

    /// Convert a length in meters to this unit, without rounding.
    pub fn from_meters(&self, meters: f32) -> f32 {
        match self {
            LengthUnit::Meters => meters,
            LengthUnit::Centimeters => meters * 100.0,
            LengthUnit::Millimeters => meters * 1000.0,
            LengthUnit::Inches => meters * 100.0 / CM_PER_INCH,
        }
    }

    /// Label text for a length in meters.
    pub fn format(&self, meters: f32) -> String {
        let v = self.from_meters(meters);
        match self {
            LengthUnit::Meters => format!("{v:.2} m"),
            LengthUnit::Centimeters => format!("{} cm", v.trunc() as i64),
            LengthUnit::Millimeters => format!("{} mm", v.trunc() as i64),
            LengthUnit::Inches => format!("{} in", v.round() as i64),
        }
    }

    /// Label text for an area in square meters.
    pub fn format_area(&self, square_meters: f32) -> String {
        let k = self.from_meters(1.0);
        let v = square_meters * k * k;
        match self {
            LengthUnit::Meters => format!("{v:.2} m²"),
            LengthUnit::Centimeters => format!("{} cm²", v.trunc() as i64),
            LengthUnit::Millimeters => format!("{} mm²", v.trunc() as i64),
            LengthUnit::Inches => format!("{} in²", v.round() as i64),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(LengthUnit::Meters),
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Centimeters),
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Millimeters),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}
