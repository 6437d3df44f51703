//! Fit projected points into a padded viewport.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::{BoundingBox2D, Point2D};

/// Extents below this are treated as zero when computing the fit scale.
const EXTENT_EPSILON: f32 = 1e-6;

/// Total padding removed from each viewport dimension (split evenly per side).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    /// Total horizontal padding (left + right).
    pub horizontal: f32,
    /// Total vertical padding (top + bottom).
    pub vertical: f32,
}

impl Padding {
    /// The same total padding on both axes.
    pub fn uniform(total: f32) -> Self {
        Self {
            horizontal: total,
            vertical: total,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            horizontal: 20.0,
            vertical: 80.0,
        }
    }
}

/// Target drawing area in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width.
    pub width: f32,
    /// Viewport height.
    pub height: f32,
    /// Padding kept clear around the drawing.
    #[serde(default)]
    pub padding: Padding,
}

impl Viewport {
    /// Create a viewport with the default padding.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
        }
    }

    /// Replace the padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Drawable width after padding.
    pub fn inner_width(&self) -> f32 {
        self.width - self.padding.horizontal
    }

    /// Drawable height after padding.
    pub fn inner_height(&self) -> f32 {
        self.height - self.padding.vertical
    }
}

/// A uniform scale and translation mapping plane coordinates to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    /// Uniform scale factor.
    pub scale: f32,
    /// Minimum corner of the source bounding box.
    pub source_min: Point2D,
    /// Screen position of the source bounding box's minimum corner.
    pub target_min: Point2D,
}

impl ViewportTransform {
    /// Map one plane point to viewport coordinates.
    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D::new(
            (p.x - self.source_min.x) * self.scale + self.target_min.x,
            (p.y - self.source_min.y) * self.scale + self.target_min.y,
        )
    }

    /// Map a length in plane units to viewport units.
    pub fn apply_length(&self, len: f32) -> f32 {
        len * self.scale
    }
}

/// Result of fitting a point set into a viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportFit {
    /// The mapping that was applied.
    pub transform: ViewportTransform,
    /// Bounding box of the input points.
    pub source_bounds: BoundingBox2D,
    /// Input points in viewport coordinates, same order.
    pub points: Vec<Point2D>,
}

impl ViewportFit {
    /// The uniform scale factor.
    pub fn scale(&self) -> f32 {
        self.transform.scale
    }

    /// Bounding box of the fitted points.
    pub fn bounds(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(&self.points)
    }
}

/// Scale factor that fits a `width` x `height` box into the inner viewport.
///
/// `min((Vw - Ph) / W, (Vh - Pv) / H)`. A zero extent defers to the other
/// axis; a single point gets scale 1.
pub fn fit_scale(width: f32, height: f32, viewport: &Viewport) -> f32 {
    let sx = viewport.inner_width() / width;
    let sy = viewport.inner_height() / height;
    match (width > EXTENT_EPSILON, height > EXTENT_EPSILON) {
        (true, true) => sx.min(sy),
        (true, false) => sx,
        (false, true) => sy,
        (false, false) => 1.0,
    }
}

/// Uniformly scale `points` into the padded viewport and center them.
///
/// Returns `None` for an empty point set or a viewport with no room left
/// after padding.
pub fn fit_to_viewport(points: &[Point2D], viewport: &Viewport) -> Option<ViewportFit> {
    if points.is_empty() {
        return None;
    }
    let inner_w = viewport.inner_width();
    let inner_h = viewport.inner_height();
    if inner_w <= 0.0 || inner_h <= 0.0 {
        warn!(
            width = viewport.width,
            height = viewport.height,
            "viewport smaller than its padding"
        );
        return None;
    }

    let bounds = BoundingBox2D::from_points(points);
    let (w, h) = (bounds.width(), bounds.height());
    let scale = fit_scale(w, h, viewport);

    let offset_x = (inner_w - w * scale) / 2.0;
    let offset_y = (inner_h - h * scale) / 2.0;
    let transform = ViewportTransform {
        scale,
        source_min: Point2D::new(bounds.min_x, bounds.min_y),
        target_min: Point2D::new(
            offset_x + viewport.padding.horizontal / 2.0,
            offset_y + viewport.padding.vertical / 2.0,
        ),
    };
    debug!(scale, width = w, height = h, "fitted points to viewport");

    Some(ViewportFit {
        transform,
        source_bounds: bounds,
        points: points.iter().map(|p| transform.apply(*p)).collect(),
    })
}
