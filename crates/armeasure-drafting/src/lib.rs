#![warn(missing_docs)]

//! Measurement drafting for armeasure.
//!
//! Turns a measured [`Path`](armeasure_track::Path) into renderable output:
//!
//! - **Diagrams**: the path flattened onto a plane, fitted into a viewport,
//!   with an upright length label on every edge and an area label for
//!   polygons
//! - **Scene labels**: dimension panels lying on the measured segments in
//!   world space
//!
//! # Example
//!
//! ```
//! use armeasure_drafting::{build_diagram, DiagramOptions};
//! use armeasure_math::{Point3, Tolerance};
//! use armeasure_projection::Viewport;
//! use armeasure_track::{DrawMode, Path};
//!
//! let path = Path::from_points(
//!     DrawMode::Distance,
//!     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.5, 0.0, 0.0)],
//!     &Tolerance::DEFAULT,
//! );
//! let diagram = build_diagram(&path, &DiagramOptions::default(), &Viewport::new(400.0, 800.0))
//!     .unwrap();
//! assert_eq!(diagram.edges[0].label.as_ref().unwrap().text, "50 cm");
//! ```

pub mod diagram;
pub mod scene;
pub mod types;

pub use diagram::{build_diagram, DiagramOptions};
pub use scene::{scene_labels, SceneLabel, LABEL_LIFT, PANEL_HEIGHT, PANEL_WIDTH};
pub use types::{upright_angle, Diagram, DiagramEdge, DiagramStyle, Label, LabelKind};
