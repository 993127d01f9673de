use crate::{
    foundation::core::Progress,
    foundation::error::{ReelError, ReelResult},
};

/// Ordered thresholds that select the current scene index from progress.
///
/// With thresholds `[t0, t1, ..]`, progress below `t0` is scene 0, progress in
/// `[t0, t1)` is scene 1, and so on; the last scene owns everything from the
/// last threshold up to and including `1.0`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SceneLadder {
    thresholds: Vec<f64>,
}

impl SceneLadder {
    /// Build and validate a ladder.
    pub fn new(thresholds: Vec<f64>) -> ReelResult<Self> {
        let ladder = Self { thresholds };
        ladder.validate()?;
        Ok(ladder)
    }

    /// Upper (exclusive) bounds of every scene but the last.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Number of scenes this ladder distinguishes.
    pub fn scene_count(&self) -> usize {
        self.thresholds.len() + 1
    }

    /// Thresholds must be finite, strictly increasing, and lie in `(0, 1]`.
    pub fn validate(&self) -> ReelResult<()> {
        if let Some(t) = self
            .thresholds
            .iter()
            .find(|t| !t.is_finite() || **t <= 0.0 || **t > 1.0)
        {
            return Err(ReelError::validation(format!(
                "scene threshold {t} must lie in (0, 1]"
            )));
        }
        if let Some(w) = self.thresholds.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ReelError::validation(format!(
                "scene thresholds must be strictly increasing, found {} then {}",
                w[0], w[1]
            )));
        }
        Ok(())
    }

    /// Scene index for `progress`, always in `0..scene_count()`.
    pub fn index_for(&self, progress: Progress) -> usize {
        let p = progress.get();
        self.thresholds.partition_point(|&t| t <= p)
    }

    /// Half-open progress range `[lo, hi)` owned by `index` (the last range is closed).
    pub fn range_of(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.scene_count() {
            return None;
        }
        let lo = if index == 0 {
            0.0
        } else {
            self.thresholds[index - 1]
        };
        let hi = self.thresholds.get(index).copied().unwrap_or(1.0);
        Some((lo, hi))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/ladder.rs"]
mod tests;
