//! Focus indicator smoothing and sizing.

use std::collections::VecDeque;

use armeasure_math::{Point3, Vec3};

/// Number of recent probe positions averaged for the indicator.
pub const SMOOTHING_WINDOW: usize = 3;

/// Moving average of the last few probe positions.
#[derive(Debug, Clone)]
pub struct ProbeSmoother {
    window: usize,
    recent: VecDeque<Point3>,
}

impl Default for ProbeSmoother {
    fn default() -> Self {
        Self::new(SMOOTHING_WINDOW)
    }
}

impl ProbeSmoother {
    /// A smoother over `window` samples (at least one).
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            recent: VecDeque::with_capacity(window),
        }
    }

    /// Add a sample and return the smoothed position.
    pub fn push(&mut self, p: Point3) -> Point3 {
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back(p);
        self.mean().unwrap_or(p)
    }

    /// Current smoothed position, `None` before the first sample.
    pub fn mean(&self) -> Option<Point3> {
        if self.recent.is_empty() {
            return None;
        }
        let sum: Vec3 = self.recent.iter().map(|p| p.coords).sum();
        Some(Point3::from(sum / self.recent.len() as f32))
    }

    /// Forget all samples.
    pub fn reset(&mut self) {
        self.recent.clear();
    }
}

/// Indicator scale for a camera distance in meters.
///
/// Linear up to 0.7 m, then a quarter of the slope.
pub fn indicator_scale(camera_distance: f32) -> f32 {
    if camera_distance < 0.7 {
        camera_distance / 0.7
    } else {
        0.25 * camera_distance + 0.825
    }
}
