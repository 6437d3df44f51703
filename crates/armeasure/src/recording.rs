//! Recorded input streams that can be replayed into a [`Session`].

use std::path::Path as FsPath;

use armeasure_math::Point3;
use armeasure_track::{DrawMode, Path};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::session::Session;

/// One host input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A frame's hit-test result; `point` is `null` when nothing was hit.
    Probe {
        /// Hit point.
        point: Option<Point3>,
        /// Camera position, for indicator sizing.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        camera: Option<Point3>,
    },
    /// A commit (tap) at the given hit point.
    Commit {
        /// Hit point.
        point: Option<Point3>,
    },
    /// A draw mode switch.
    Mode {
        /// New mode.
        mode: DrawMode,
    },
    /// End the current measurement.
    Finish,
}

/// An ordered list of session events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Events in input order.
    pub events: Vec<SessionEvent>,
}

/// Totals from replaying a recording.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    /// Probe events processed.
    pub frames: usize,
    /// Probe events without a hit.
    pub skipped_frames: usize,
    /// Snap acquisitions (haptic pulses).
    pub snaps: usize,
    /// Commits that placed a point.
    pub commits: usize,
    /// Commits that were ignored.
    pub ignored_commits: usize,
    /// Finished paths, including the one left open at the end.
    pub paths: Vec<Path>,
}

impl Recording {
    /// Parse a JSON recording.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a JSON recording from disk.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Append an event.
    pub fn push(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Feed every event into `session`.
    pub fn replay(&self, session: &mut Session) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        for event in &self.events {
            match *event {
                SessionEvent::Probe { point, camera } => {
                    let frame = session.frame(point, camera);
                    summary.frames += 1;
                    if point.is_none() {
                        summary.skipped_frames += 1;
                    }
                    if frame.is_feedback() {
                        summary.snaps += 1;
                    }
                }
                SessionEvent::Commit { point } => match session.commit(point) {
                    Some(_) => summary.commits += 1,
                    None => summary.ignored_commits += 1,
                },
                SessionEvent::Mode { mode } => session.set_mode(mode),
                SessionEvent::Finish => summary.paths.push(session.finish()),
            }
        }
        if !session.path().is_empty() {
            summary.paths.push(session.finish());
        }
        debug!(
            frames = summary.frames,
            snaps = summary.snaps,
            commits = summary.commits,
            "recording replayed"
        );
        info!(paths = summary.paths.len(), "replay finished");
        summary
    }
}

impl FromIterator<SessionEvent> for Recording {
    fn from_iter<I: IntoIterator<Item = SessionEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}
