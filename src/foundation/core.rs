pub use kurbo::{Affine, Point, Vec2};

/// Normalized scroll position: `0.0` is the top of the story, `1.0` the bottom.
///
/// Construction always clamps into `[0, 1]`; `NaN` maps to `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Top of the scroll container.
    pub const START: Self = Self(0.0);
    /// Bottom of the scroll container.
    pub const END: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`.
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::START;
        }
        Self(v.clamp(0.0, 1.0))
    }

    /// Normalize a scroll offset against the scrollable height of its container.
    ///
    /// A zero (or otherwise unusable) height yields [`Progress::START`].
    pub fn from_scroll(offset: f64, scrollable_height: f64) -> Self {
        if !scrollable_height.is_finite() || scrollable_height <= 0.0 {
            return Self::START;
        }
        Self::new(offset / scrollable_height)
    }

    /// Raw fraction in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Scroll-driven transform of one layer (a scene section or its content box).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerTransform {
    /// Uniform scale around the layer anchor, default `1.0`.
    pub scale: f64,
    /// Vertical translation in pixels, default `0.0`.
    pub offset_y: f64,
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_y: 0.0,
        }
    }
}

impl LayerTransform {
    /// Returns true when the transform leaves its layer untouched.
    pub fn is_identity(self) -> bool {
        self.scale == 1.0 && self.offset_y == 0.0
    }

    /// Convert to an affine matrix scaling around `anchor` (usually the layer center).
    pub fn to_affine(self, anchor: Point) -> Affine {
        let anchor = anchor.to_vec2();
        // T(offset) * T(anchor) * S(scale) * T(-anchor)
        Affine::translate(Vec2::new(0.0, self.offset_y))
            * Affine::translate(anchor)
            * Affine::scale(self.scale)
            * Affine::translate(-anchor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
