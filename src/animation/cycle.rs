use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// Whether a [`CycleAnim`] plays once or restarts forever.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Play one cycle, then hold the last value.
    #[default]
    Once,
    /// Restart from the first value at the end of every cycle.
    Forever,
}

/// Time-driven keyframe animation.
///
/// `values` are spaced evenly across `duration_s`. Before `delay_s` elapses the
/// first value holds; the delay only applies to the first cycle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CycleAnim {
    /// Keyframe values, evenly spaced over one cycle.
    pub values: Vec<f64>,
    /// Cycle length in seconds (> 0).
    pub duration_s: f64,
    /// Initial delay in seconds.
    #[serde(default)]
    pub delay_s: f64,
    /// Repeat behavior.
    #[serde(default)]
    pub repeat: Repeat,
    /// Ease applied within each keyframe segment.
    #[serde(default)]
    pub ease: Ease,
}

impl CycleAnim {
    /// One-shot animation over `values`.
    pub fn once(values: impl Into<Vec<f64>>, duration_s: f64) -> Self {
        Self {
            values: values.into(),
            duration_s,
            delay_s: 0.0,
            repeat: Repeat::Once,
            ease: Ease::Linear,
        }
    }

    /// Endlessly repeating animation over `values`.
    pub fn forever(values: impl Into<Vec<f64>>, duration_s: f64) -> Self {
        Self {
            repeat: Repeat::Forever,
            ..Self::once(values, duration_s)
        }
    }

    /// Set the initial delay.
    pub fn delayed(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    /// Set the segment ease.
    pub fn eased(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Check values are present and finite and timing is usable.
    pub fn validate(&self) -> ReelResult<()> {
        if self.values.is_empty() {
            return Err(ReelError::animation("cycle needs at least one value"));
        }
        if self.values.iter().any(|v| !v.is_finite()) {
            return Err(ReelError::animation("cycle values must be finite"));
        }
        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(ReelError::animation("cycle duration must be > 0"));
        }
        if !self.delay_s.is_finite() || self.delay_s < 0.0 {
            return Err(ReelError::animation("cycle delay must be >= 0"));
        }
        Ok(())
    }

    /// Seconds into the animation after the delay, or `None` while still delayed.
    fn local_time(&self, time_s: f64) -> Option<f64> {
        let local = time_s - self.delay_s;
        (local > 0.0 && self.duration_s > 0.0).then_some(local)
    }

    /// Position within the current cycle in `[0, 1]`.
    pub fn phase(&self, time_s: f64) -> f64 {
        let Some(local) = self.local_time(time_s) else {
            return 0.0;
        };
        let cycles = local / self.duration_s;
        match self.repeat {
            Repeat::Once => cycles.min(1.0),
            Repeat::Forever => cycles.fract(),
        }
    }

    /// Number of fully completed cycles at `time_s`.
    pub fn completed_cycles(&self, time_s: f64) -> u64 {
        let Some(local) = self.local_time(time_s) else {
            return 0;
        };
        let done = (local / self.duration_s).floor() as u64;
        match self.repeat {
            Repeat::Once => done.min(1),
            Repeat::Forever => done,
        }
    }

    /// Sample at presentation time `time_s` (seconds).
    pub fn sample(&self, time_s: f64) -> f64 {
        let n = self.values.len();
        match n {
            0 => 0.0,
            1 => self.values[0],
            _ => {
                let pos = self.phase(time_s) * (n - 1) as f64;
                let i = (pos.floor() as usize).min(n - 2);
                let t = pos - i as f64;
                let (a, b) = (self.values[i], self.values[i + 1]);
                a + (b - a) * self.ease.apply(t)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/cycle.rs"]
mod tests;
