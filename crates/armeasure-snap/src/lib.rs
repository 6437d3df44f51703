#![warn(missing_docs)]

//! Magnetic snap-to-endpoint adsorption.
//!
//! Each frame the host supplies a probe point and the current snap targets.
//! The resolver either holds an existing lock, releases it once the probe
//! leaves the snap radius, or acquires a new one. Acquisition is reported
//! exactly once per transition so the host can fire a single haptic pulse.
//!
//! # Example
//!
//! ```
//! use armeasure_math::Point3;
//! use armeasure_snap::{SnapConfig, SnapEvent, SnapResolver};
//!
//! let mut resolver = SnapResolver::new(SnapConfig::default());
//! let targets = [Point3::origin()];
//!
//! let event = resolver.resolve(Point3::new(0.04, 0.0, 0.0), &targets);
//! assert!(matches!(event, SnapEvent::Acquired(_)));
//!
//! // Staying inside the radius does not re-fire feedback.
//! let event = resolver.resolve(Point3::new(0.03, 0.0, 0.0), &targets);
//! assert!(matches!(event, SnapEvent::Held(_)));
//!
//! let event = resolver.resolve(Point3::new(0.06, 0.0, 0.0), &targets);
//! assert_eq!(event, SnapEvent::Released);
//! ```

use armeasure_math::{distance, Point3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default snap radius in meters (5 cm).
pub const DEFAULT_SNAP_RADIUS: f32 = 0.05;

/// Which candidate to lock onto when several are within the radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapPolicy {
    /// The first candidate in insertion order.
    #[default]
    FirstMatch,
    /// The closest candidate.
    NearestMatch,
}

/// Snap tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Lock radius in meters. Acquisition is inclusive, release is strict.
    pub radius: f32,
    /// Candidate selection policy.
    pub policy: SnapPolicy,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SNAP_RADIUS,
            policy: SnapPolicy::default(),
        }
    }
}

/// Whether the probe is currently locked onto a snap target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdsorptionState {
    locked_point: Option<Point3>,
}

impl AdsorptionState {
    /// The unlocked state.
    pub fn unlocked() -> Self {
        Self { locked_point: None }
    }

    /// A state locked onto `target`.
    pub fn locked_at(target: Point3) -> Self {
        Self {
            locked_point: Some(target),
        }
    }

    /// Check if a lock is held.
    pub fn is_locked(&self) -> bool {
        self.locked_point.is_some()
    }

    /// The locked target, if any.
    pub fn locked_point(&self) -> Option<Point3> {
        self.locked_point
    }

    /// The point a commit should use: the locked target, or the raw probe.
    pub fn effective_point(&self, probe: Point3) -> Point3 {
        self.locked_point.unwrap_or(probe)
    }
}

/// Outcome of one snap evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapEvent {
    /// A lock was just acquired. Fired once per unlocked-to-locked transition.
    Acquired(Point3),
    /// An existing lock is still held.
    Held(Point3),
    /// The probe left the radius and the lock was dropped.
    Released,
    /// No lock held and no candidate in range; indicators rest.
    Idle,
}

impl SnapEvent {
    /// Check if the host should emit its one-shot feedback (haptic pulse).
    pub fn is_feedback(&self) -> bool {
        matches!(self, SnapEvent::Acquired(_))
    }

    /// The locked target after this event.
    pub fn locked_point(&self) -> Option<Point3> {
        match self {
            SnapEvent::Acquired(p) | SnapEvent::Held(p) => Some(*p),
            SnapEvent::Released | SnapEvent::Idle => None,
        }
    }
}

/// Pick the candidate `probe` should lock onto, if any.
pub fn find_target(probe: &Point3, candidates: &[Point3], config: &SnapConfig) -> Option<Point3> {
    let in_range = candidates
        .iter()
        .map(|c| (c, distance(probe, c)))
        .filter(|(_, d)| *d <= config.radius);
    match config.policy {
        SnapPolicy::FirstMatch => in_range.map(|(c, _)| *c).next(),
        SnapPolicy::NearestMatch => in_range
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(c, _)| *c),
    }
}

/// Advance the adsorption state for one probe position.
///
/// While locked only the locked point is considered; other candidates are
/// not re-evaluated until the lock is released. A release does not acquire
/// a new target in the same step.
pub fn step(
    state: AdsorptionState,
    probe: &Point3,
    candidates: &[Point3],
    config: &SnapConfig,
) -> (AdsorptionState, SnapEvent) {
    if let Some(locked) = state.locked_point {
        if distance(probe, &locked) > config.radius {
            return (AdsorptionState::unlocked(), SnapEvent::Released);
        }
        return (state, SnapEvent::Held(locked));
    }
    match find_target(probe, candidates, config) {
        Some(target) => (AdsorptionState::locked_at(target), SnapEvent::Acquired(target)),
        None => (state, SnapEvent::Idle),
    }
}

/// Owns an [`AdsorptionState`] and advances it frame by frame.
#[derive(Debug, Clone, Default)]
pub struct SnapResolver {
    config: SnapConfig,
    state: AdsorptionState,
}

impl SnapResolver {
    /// Create an unlocked resolver.
    pub fn new(config: SnapConfig) -> Self {
        Self {
            config,
            state: AdsorptionState::unlocked(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// The current adsorption state.
    pub fn state(&self) -> AdsorptionState {
        self.state
    }

    /// Check if a lock is held.
    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// The locked target, if any.
    pub fn locked_point(&self) -> Option<Point3> {
        self.state.locked_point()
    }

    /// The point a commit should use for `probe`.
    pub fn effective_point(&self, probe: Point3) -> Point3 {
        self.state.effective_point(probe)
    }

    /// Evaluate one probe position against `candidates`.
    pub fn resolve(&mut self, probe: Point3, candidates: &[Point3]) -> SnapEvent {
        let (state, event) = step(self.state, &probe, candidates, &self.config);
        match event {
            SnapEvent::Acquired(p) => debug!(x = p.x, y = p.y, z = p.z, "snap acquired"),
            SnapEvent::Released => debug!("snap released"),
            SnapEvent::Held(_) | SnapEvent::Idle => {}
        }
        self.state = state;
        event
    }

    /// Drop any lock (mode switch, new path). Returns whether one was held.
    pub fn release(&mut self) -> bool {
        let was_locked = self.state.is_locked();
        self.state = AdsorptionState::unlocked();
        was_locked
    }
}
