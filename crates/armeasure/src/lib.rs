#![warn(missing_docs)]

//! armeasure: snap-assisted distance and area measurement.
//!
//! Feed one hit-test point per frame and a commit per tap; the session snaps
//! endpoints onto existing ones, keeps the measured path, and produces
//! lengths, polygon areas and flat labelled diagrams.
//!
//! # Example
//!
//! ```
//! use armeasure::{DrawMode, MeasureConfig, Point3, Session};
//!
//! let mut session = Session::new(MeasureConfig::default());
//! session.set_mode(DrawMode::Area);
//! for (x, z) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)] {
//!     let p = Point3::new(x, 0.0, z);
//!     session.frame(Some(p), None);
//!     session.commit(Some(p));
//! }
//! let report = session.report();
//! assert_eq!(report.area.unwrap().label, "10000 cm²");
//!
//! let viewport = session.viewport(400.0, 800.0);
//! let diagram = session.diagram(&viewport, 1.0).unwrap();
//! assert_eq!(diagram.edges.len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod recording;
pub mod report;
pub mod session;

pub use config::{AreaPlane, MeasureConfig};
pub use error::{MeasureError, Result};
pub use recording::{Recording, ReplaySummary, SessionEvent};
pub use report::{MeasurementReport, Quantity, SegmentReport};
pub use session::{Frame, Indicator, Session};

pub use armeasure_drafting::{Diagram, DiagramEdge, DiagramStyle, Label, SceneLabel};
pub use armeasure_math::{Point3, Tolerance};
pub use armeasure_metrics::LengthUnit;
pub use armeasure_projection::{Padding, ProjectionBasis, Viewport};
pub use armeasure_snap::{SnapEvent, SnapPolicy};
pub use armeasure_track::{DrawMode, Path};
