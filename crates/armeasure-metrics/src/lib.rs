#![warn(missing_docs)]

//! Measurement metrics for armeasure.
//!
//! Pure numeric functions over measured points:
//!
//! - **Distance**: Euclidean length of independent segments
//! - **Perimeter**: cyclic polygon edges
//! - **Area**: planar projection followed by the shoelace formula
//! - **Units**: label formatting in meters, centimeters, millimeters or inches
//!
//! # Example
//!
//! ```
//! use armeasure_math::{Point3, Tolerance};
//! use armeasure_metrics::{polygon_area, LengthUnit};
//! use armeasure_projection::{PlaneSource, ProjectionBasis};
//!
//! let square = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 1.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ];
//! let area = polygon_area(
//!     &square,
//!     PlaneSource::WorldUp,
//!     ProjectionBasis::AxisAligned,
//!     &Tolerance::DEFAULT,
//! )
//! .unwrap();
//! assert_eq!(LengthUnit::Meters.format_area(area), "1.00 m²");
//! ```

mod area;
mod segment;
mod units;

pub use area::{polygon_area, shoelace_area};
pub use armeasure_math::distance;
pub use segment::{paired_segments, perimeter, polygon_edges, segment_lengths, Segment};
pub use units::{LengthUnit, UnitParseError, CM_PER_INCH};
