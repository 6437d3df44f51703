//! A measurement session: tracker, configuration and derived output.

use armeasure_drafting::{build_diagram, scene_labels, Diagram, SceneLabel};
use armeasure_math::{distance, Point3};
use armeasure_projection::Viewport;
use armeasure_snap::SnapEvent;
use armeasure_track::{
    indicator_scale, DrawMode, FrameUpdate, Path, PreviewLine, ProbeSmoother, Tracker,
};
use serde::Serialize;
use tracing::debug;

use crate::config::MeasureConfig;
use crate::report::MeasurementReport;

/// Where and how large to draw the focus indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Indicator {
    /// Smoothed probe position, or the locked target while snapped.
    pub position: Point3,
    /// Uniform scale from the camera distance (1 without a camera).
    pub scale: f32,
    /// Whether the indicator is pinned to a snap target.
    pub snapped: bool,
}

/// Everything the host needs to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Raw tracker output.
    pub update: FrameUpdate,
    /// Focus indicator, absent for a skipped frame.
    pub indicator: Option<Indicator>,
    /// Live preview line while a segment or polygon is open.
    pub preview: Option<PreviewLine>,
}

impl Frame {
    /// Check if the host should fire its one-shot haptic pulse.
    pub fn is_feedback(&self) -> bool {
        self.update.is_feedback()
    }

    /// The snap transition of this frame.
    pub fn snap(&self) -> Option<SnapEvent> {
        self.update.snap
    }
}

/// Binds a [`Tracker`] to a [`MeasureConfig`].
#[derive(Debug, Clone)]
pub struct Session {
    config: MeasureConfig,
    tracker: Tracker,
    smoother: ProbeSmoother,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MeasureConfig::default())
    }
}

impl Session {
    /// Start an idle distance-mode session.
    pub fn new(config: MeasureConfig) -> Self {
        Self {
            tracker: Tracker::new(DrawMode::Distance, config.tracker()),
            smoother: ProbeSmoother::default(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    /// The underlying tracker.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// The path being measured.
    pub fn path(&self) -> &Path {
        self.tracker.path()
    }

    /// The active draw mode.
    pub fn mode(&self) -> DrawMode {
        self.tracker.mode()
    }

    /// Process one frame's hit-test result.
    ///
    /// `camera` sizes the indicator; without it the indicator scale is 1.
    pub fn frame(&mut self, probe: Option<Point3>, camera: Option<Point3>) -> Frame {
        let update = self.tracker.update_probe(probe);
        let indicator = update.probe.map(|raw| {
            let smoothed = self.smoother.push(raw);
            let locked = self.tracker.locked_point();
            let position = locked.unwrap_or(smoothed);
            Indicator {
                position,
                scale: camera.map_or(1.0, |c| indicator_scale(distance(&c, &position))),
                snapped: locked.is_some(),
            }
        });
        let preview = update.preview.map(|segment| {
            PreviewLine::new(
                segment,
                self.config.dash_interval,
                self.config.min_label_length,
                self.config.unit,
            )
        });
        Frame {
            update,
            indicator,
            preview,
        }
    }

    /// Commit at `at`; returns the point actually placed.
    pub fn commit(&mut self, at: Option<Point3>) -> Option<Point3> {
        self.tracker.commit(at)
    }

    /// Switch draw mode, discarding the current path.
    pub fn set_mode(&mut self, mode: DrawMode) {
        self.tracker.set_mode(mode);
        self.smoother.reset();
    }

    /// Return the current path and start a new one.
    pub fn finish(&mut self) -> Path {
        self.smoother.reset();
        self.tracker.finish()
    }

    /// Change the label unit for subsequent output.
    pub fn set_unit(&mut self, unit: armeasure_metrics::LengthUnit) {
        debug!(%unit, "label unit changed");
        self.config.unit = unit;
    }

    /// Lengths, perimeter and area of the current path.
    pub fn report(&self) -> MeasurementReport {
        self.report_of(self.tracker.path())
    }

    /// Lengths, perimeter and area of any path, with this session's settings.
    pub fn report_of(&self, path: &Path) -> MeasurementReport {
        MeasurementReport::for_path(path, &self.config)
    }

    /// A viewport of the given size with the configured padding.
    pub fn viewport(&self, width: f32, height: f32) -> Viewport {
        Viewport::new(width, height).with_padding(self.config.padding)
    }

    /// Flat diagram of the current path, styled for `zoom`.
    pub fn diagram(&self, viewport: &Viewport, zoom: f32) -> Option<Diagram> {
        self.diagram_of(self.tracker.path(), viewport, zoom)
    }

    /// Flat diagram of any path, with this session's settings.
    pub fn diagram_of(&self, path: &Path, viewport: &Viewport, zoom: f32) -> Option<Diagram> {
        build_diagram(path, &self.config.diagram_options(zoom), viewport)
    }

    /// World-space dimension panels for the current path.
    pub fn scene_labels(&self) -> Vec<SceneLabel> {
        scene_labels(
            self.tracker.path(),
            self.config.unit,
            self.config.min_label_length,
            &self.config.tolerance(),
        )
    }
}
