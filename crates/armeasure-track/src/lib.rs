#![warn(missing_docs)]

//! Point and path tracking for armeasure.
//!
//! A [`Tracker`] receives one optional probe point per frame and commit
//! events from the host. It keeps the measured [`Path`], derives the snap
//! targets for the current draw mode, and substitutes the snapped target for
//! the raw probe whenever a lock is held.
//!
//! # Example
//!
//! ```
//! use armeasure_math::Point3;
//! use armeasure_track::{DrawMode, Tracker, TrackerConfig};
//!
//! let mut tracker = Tracker::new(DrawMode::Distance, TrackerConfig::default());
//! tracker.commit(Some(Point3::new(0.0, 0.0, 0.0)));
//! tracker.commit(Some(Point3::new(1.0, 0.0, 0.0)));
//!
//! // Close to the first segment's end: snaps onto it.
//! tracker.update_probe(Some(Point3::new(1.02, 0.0, 0.0)));
//! let start = tracker.commit(Some(Point3::new(1.02, 0.0, 0.0)));
//! assert_eq!(start, Some(Point3::new(1.0, 0.0, 0.0)));
//! ```

mod path;
pub mod preview;
pub mod probe;
mod tracker;

pub use path::{DrawMode, Path};
pub use preview::{dash_positions, PreviewLine, DEFAULT_DASH_INTERVAL, DEFAULT_MIN_LABEL_LENGTH};
pub use probe::{indicator_scale, ProbeSmoother, SMOOTHING_WINDOW};
pub use tracker::{FrameUpdate, Tracker, TrackerConfig};
