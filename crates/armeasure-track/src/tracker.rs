//! Frame-driven path construction with snapped endpoints.

use armeasure_math::{Point3, Tolerance};
use armeasure_metrics::Segment;
use armeasure_snap::{SnapConfig, SnapEvent, SnapResolver};
use tracing::debug;

use crate::path::{DrawMode, Path};

/// Tracker tuning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackerConfig {
    /// Snap radius and candidate policy.
    pub snap: SnapConfig,
    /// Closure and degenerate-edge tolerance.
    pub tolerance: Tolerance,
}

/// Result of one per-frame probe update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// Raw probe, `None` when the hit-test found nothing.
    pub probe: Option<Point3>,
    /// Where a commit would land: the locked target or the raw probe.
    pub effective: Option<Point3>,
    /// Snap transition, `None` for a skipped frame.
    pub snap: Option<SnapEvent>,
    /// Open end of the current segment or polygon to the effective probe.
    pub preview: Option<Segment>,
}

impl FrameUpdate {
    fn skipped() -> Self {
        Self {
            probe: None,
            effective: None,
            snap: None,
            preview: None,
        }
    }

    /// Check if this frame should trigger the one-shot feedback.
    pub fn is_feedback(&self) -> bool {
        self.snap.is_some_and(|e| e.is_feedback())
    }

    /// Check if the frame was skipped for lack of a probe.
    pub fn is_skipped(&self) -> bool {
        self.probe.is_none()
    }
}

/// Builds a [`Path`] from probe updates and commit events.
///
/// Committed endpoints use the snapped target while a lock is held, so
/// segments that share an endpoint share it exactly.
#[derive(Debug, Clone)]
pub struct Tracker {
    path: Path,
    resolver: SnapResolver,
    snap_targets: Vec<Point3>,
    tolerance: Tolerance,
    last_probe: Option<Point3>,
}

impl Tracker {
    /// Create an idle tracker.
    pub fn new(mode: DrawMode, config: TrackerConfig) -> Self {
        Self {
            path: Path::new(mode),
            resolver: SnapResolver::new(config.snap),
            snap_targets: Vec::new(),
            tolerance: config.tolerance,
            last_probe: None,
        }
    }

    /// The active draw mode.
    pub fn mode(&self) -> DrawMode {
        self.path.mode()
    }

    /// The path built so far.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Points the probe can currently snap to.
    pub fn snap_targets(&self) -> &[Point3] {
        &self.snap_targets
    }

    /// Check if the probe is locked onto a snap target.
    pub fn is_locked(&self) -> bool {
        self.resolver.is_locked()
    }

    /// The locked snap target, if any.
    pub fn locked_point(&self) -> Option<Point3> {
        self.resolver.locked_point()
    }

    /// The most recent non-empty probe.
    pub fn last_probe(&self) -> Option<Point3> {
        self.last_probe
    }

    /// Switch draw mode, discarding any in-progress path.
    pub fn set_mode(&mut self, mode: DrawMode) {
        debug!(?mode, discarded = self.path.len(), "draw mode changed");
        self.reset(mode);
    }

    /// Return the path and start a fresh one in the same mode.
    pub fn finish(&mut self) -> Path {
        let mode = self.path.mode();
        let path = std::mem::replace(&mut self.path, Path::new(mode));
        self.reset(mode);
        debug!(points = path.len(), closed = path.is_closed(), "path finished");
        path
    }

    fn reset(&mut self, mode: DrawMode) {
        self.path = Path::new(mode);
        self.snap_targets.clear();
        self.resolver.release();
    }

    /// Feed one frame's hit-test result.
    ///
    /// `None` skips the frame: no snap evaluation and no state change.
    pub fn update_probe(&mut self, probe: Option<Point3>) -> FrameUpdate {
        let Some(raw) = probe else {
            return FrameUpdate::skipped();
        };
        self.last_probe = Some(raw);
        let event = self.resolver.resolve(raw, &self.snap_targets);
        let effective = self.resolver.effective_point(raw);
        FrameUpdate {
            probe: Some(raw),
            effective: Some(effective),
            snap: Some(event),
            preview: self.path.anchor().map(|a| Segment::new(a, effective)),
        }
    }

    /// Commit at `at`, starting or continuing the path as its state requires.
    ///
    /// Returns the point actually appended.
    pub fn commit(&mut self, at: Option<Point3>) -> Option<Point3> {
        if self.path.is_drawing() {
            self.finalize(at)
        } else {
            self.begin(at)
        }
    }

    /// Start a new segment (distance) or polygon (area).
    ///
    /// No-op while a segment or polygon is already in progress, once an area
    /// polygon is closed, or without a probe.
    pub fn begin(&mut self, at: Option<Point3>) -> Option<Point3> {
        let raw = at?;
        if self.path.is_drawing() || self.path.is_closed() {
            return None;
        }
        if self.path.mode() == DrawMode::Area && !self.path.is_empty() {
            return None;
        }
        let p = self.resolver.effective_point(raw);
        self.path.push(p);
        debug!(x = p.x, y = p.y, z = p.z, snapped = self.is_locked(), "path started");
        self.refresh_snap_targets();
        Some(p)
    }

    /// Append the end of the current segment or the next polygon vertex.
    ///
    /// In area mode a vertex on the first vertex closes the polygon once three
    /// vertices exist.
    pub fn finalize(&mut self, at: Option<Point3>) -> Option<Point3> {
        let raw = at?;
        if !self.path.is_drawing() {
            return None;
        }
        let p = self.resolver.effective_point(raw);
        self.path.push(p);
        let closes = self.path.mode() == DrawMode::Area
            && self.path.len() >= 4
            && self.tolerance.points_equal(&p, &self.path.points()[0]);
        if closes {
            self.path.close();
            self.resolver.release();
            debug!(vertices = self.path.len() - 1, "polygon closed");
        } else {
            debug!(x = p.x, y = p.y, z = p.z, snapped = self.is_locked(), "point committed");
        }
        self.refresh_snap_targets();
        Some(p)
    }

    fn refresh_snap_targets(&mut self) {
        match self.path.mode() {
            DrawMode::Distance => {
                // Targets are frozen while a segment is open.
                if !self.path.is_drawing() {
                    self.snap_targets = self.path.points().to_vec();
                }
            }
            DrawMode::Area => {
                self.snap_targets.clear();
                if !self.path.is_closed() && self.path.len() >= 3 {
                    self.snap_targets.push(self.path.points()[0]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f32, z: f32) -> Point3 {
        Point3::new(x, 0.0, z)
    }

    fn distance_tracker() -> Tracker {
        Tracker::new(DrawMode::Distance, TrackerConfig::default())
    }

    #[test]
    fn test_missing_probe_is_noop() {
        let mut t = distance_tracker();
        assert!(t.update_probe(None).is_skipped());
        assert_eq!(t.commit(None), None);
        assert!(t.path().is_empty());
    }

    #[test]
    fn test_distance_segments() {
        let mut t = distance_tracker();
        t.commit(Some(p(0.0, 0.0)));
        t.commit(Some(p(1.0, 0.0)));
        t.commit(Some(p(0.0, 1.0)));
        let lengths: Vec<f32> = t
            .path()
            .segments(&Tolerance::DEFAULT)
            .iter()
            .map(|s| s.length())
            .collect();
        assert_eq!(lengths, vec![1.0]);
        assert!(t.path().is_drawing());
    }

    #[test]
    fn test_snapped_endpoint_is_exact() {
        let mut t = distance_tracker();
        t.commit(Some(p(0.0, 0.0)));
        t.commit(Some(p(1.0, 0.0)));
        assert_eq!(t.snap_targets(), &[p(0.0, 0.0), p(1.0, 0.0)]);

        let update = t.update_probe(Some(p(1.03, 0.01)));
        assert!(update.is_feedback());
        assert_eq!(update.effective, Some(p(1.0, 0.0)));

        assert_eq!(t.commit(Some(p(1.03, 0.01))), Some(p(1.0, 0.0)));
        assert_eq!(t.path().points()[2], p(1.0, 0.0));
    }

    #[test]
    fn test_targets_frozen_while_drawing() {
        let mut t = distance_tracker();
        t.commit(Some(p(0.0, 0.0)));
        t.commit(Some(p(1.0, 0.0)));
        t.commit(Some(p(5.0, 5.0)));
        assert_eq!(t.snap_targets().len(), 2);
        t.commit(Some(p(6.0, 5.0)));
        assert_eq!(t.snap_targets().len(), 4);
    }

    #[test]
    fn test_preview_follows_snap() {
        let mut t = distance_tracker();
        assert!(t.update_probe(Some(p(0.5, 0.5))).preview.is_none());
        t.commit(Some(p(0.0, 0.0)));
        let update = t.update_probe(Some(p(0.5, 0.0)));
        let preview = update.preview.unwrap();
        assert_eq!(preview.start, p(0.0, 0.0));
        assert_relative_eq!(preview.length(), 0.5);
    }

    #[test]
    fn test_area_closure_on_first_vertex() {
        let mut t = Tracker::new(DrawMode::Area, TrackerConfig::default());
        t.commit(Some(p(0.0, 0.0)));
        t.commit(Some(p(1.0, 0.0)));
        assert!(t.snap_targets().is_empty());
        t.commit(Some(p(1.0, 1.0)));
        assert_eq!(t.snap_targets(), &[p(0.0, 0.0)]);
        t.commit(Some(p(0.0, 1.0)));

        // Probe near the first vertex locks on and the commit closes the polygon.
        assert!(t.update_probe(Some(p(0.02, 0.02))).is_feedback());
        assert_eq!(t.commit(Some(p(0.02, 0.02))), Some(p(0.0, 0.0)));
        assert!(t.path().is_closed());
        assert!(!t.is_locked());
        assert_eq!(t.path().polygon_vertices().len(), 4);

        assert_eq!(t.commit(Some(p(3.0, 3.0))), None);
        assert_eq!(t.path().len(), 5);
    }

    #[test]
    fn test_mode_switch_discards_path() {
        let mut t = distance_tracker();
        t.commit(Some(p(0.0, 0.0)));
        t.commit(Some(p(1.0, 0.0)));
        t.update_probe(Some(p(1.0, 0.0)));
        assert!(t.is_locked());
        t.set_mode(DrawMode::Area);
        assert!(t.path().is_empty());
        assert!(!t.is_locked());
        assert!(t.snap_targets().is_empty());
        assert_eq!(t.mode(), DrawMode::Area);
    }

    #[test]
    fn test_finish_returns_path() {
        let mut t = distance_tracker();
        t.commit(Some(p(0.0, 0.0)));
        t.commit(Some(p(2.0, 0.0)));
        let path = t.finish();
        assert_eq!(path.len(), 2);
        assert!(t.path().is_empty());
        assert_eq!(t.mode(), DrawMode::Distance);
    }
}
