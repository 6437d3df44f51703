#![warn(missing_docs)]

//! Plane projection for flat measurement diagrams.
//!
//! This crate maps an ordered set of 3D measurement vertices to 2D:
//!
//! - **Plane resolution**: a supplied normal, world up, or a normal derived
//!   from the first three polygon vertices
//! - **Projection**: each point is dropped onto the plane along its normal and
//!   expressed in either axis-aligned or orthonormal plane coordinates
//! - **Viewport fit**: uniform scale and centering into a padded viewport
//!
//! # Example
//!
//! ```
//! use armeasure_math::{Point3, Tolerance};
//! use armeasure_projection::{
//!     fit_to_viewport, project_to_plane, PlaneSource, ProjectionBasis, Viewport,
//! };
//!
//! let floor = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 1.0),
//! ];
//! let flat = project_to_plane(
//!     &floor,
//!     PlaneSource::WorldUp,
//!     ProjectionBasis::AxisAligned,
//!     &Tolerance::DEFAULT,
//! )
//! .unwrap();
//! let fit = fit_to_viewport(&flat.points, &Viewport::new(400.0, 800.0)).unwrap();
//! assert!((fit.scale() - 190.0).abs() < 1e-3);
//! ```

pub mod plane;
pub mod types;
pub mod viewport;

pub use plane::{
    project_points, project_to_plane, resolve_plane, PlaneFrame, PlaneSource, Projection,
    ProjectionBasis, ProjectionPlane,
};
pub use types::{BoundingBox2D, Point2D};
pub use viewport::{
    fit_scale, fit_to_viewport, Padding, Viewport, ViewportFit, ViewportTransform,
};
