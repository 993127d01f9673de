use crate::{
    animation::ease::Ease,
    foundation::core::Progress,
    foundation::error::{ReelError, ReelResult},
};

/// One control point of a [`BreakpointTable`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Breakpoint {
    /// Input position (scroll progress for scene tables).
    pub at: f64,
    /// Output value at `at`.
    pub value: f64,
    /// Ease applied toward the next breakpoint.
    #[serde(default, skip_serializing_if = "Ease::is_linear")]
    pub ease: Ease,
}

impl Breakpoint {
    /// Linear breakpoint.
    pub fn new(at: f64, value: f64) -> Self {
        Self {
            at,
            value,
            ease: Ease::Linear,
        }
    }
}

/// Piecewise-linear (optionally eased) curve over ordered breakpoints.
///
/// Inputs before the first breakpoint hold the first value and inputs after
/// the last hold the last value, so endpoints are reproduced exactly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BreakpointTable {
    keys: Vec<Breakpoint>, // strictly increasing by `at`
}

impl BreakpointTable {
    /// Build and validate a table.
    pub fn new(keys: Vec<Breakpoint>) -> ReelResult<Self> {
        let table = Self { keys };
        table.validate()?;
        Ok(table)
    }

    /// Build a linear table from `(at, value)` pairs.
    pub fn linear(points: &[(f64, f64)]) -> ReelResult<Self> {
        Self::new(
            points
                .iter()
                .map(|&(at, value)| Breakpoint::new(at, value))
                .collect(),
        )
    }

    /// Single-key table that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self {
            keys: vec![Breakpoint::new(0.0, value)],
        }
    }

    /// Control points in input order.
    pub fn keys(&self) -> &[Breakpoint] {
        &self.keys
    }

    /// Input range `[first.at, last.at]` covered by the table.
    pub fn span(&self) -> Option<(f64, f64)> {
        Some((self.keys.first()?.at, self.keys.last()?.at))
    }

    /// Check the table is non-empty, finite, and strictly increasing.
    pub fn validate(&self) -> ReelResult<()> {
        if self.keys.is_empty() {
            return Err(ReelError::validation(
                "breakpoint table must have at least one breakpoint",
            ));
        }
        if let Some(k) = self
            .keys
            .iter()
            .find(|k| !k.at.is_finite() || !k.value.is_finite())
        {
            return Err(ReelError::validation(format!(
                "breakpoint ({}, {}) is not finite",
                k.at, k.value
            )));
        }
        if let Some(w) = self.keys.windows(2).find(|w| w[0].at >= w[1].at) {
            return Err(ReelError::validation(format!(
                "breakpoints must be strictly increasing, found {} then {}",
                w[0].at, w[1].at
            )));
        }
        Ok(())
    }

    /// Sample at a scroll progress.
    pub fn sample(&self, progress: Progress) -> f64 {
        self.sample_at(progress.get())
    }

    /// Sample at an arbitrary input position.
    pub fn sample_at(&self, x: f64) -> f64 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            // Unvalidated empty table.
            return 0.0;
        };
        if x <= first.at {
            return first.value;
        }
        if x >= last.at {
            return last.value;
        }

        // first.at < x < last.at, so 1 <= idx < len
        let idx = self.keys.partition_point(|k| k.at <= x);
        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let t = (x - a.at) / (b.at - a.at);
        a.value + (b.value - a.value) * a.ease.apply(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/breakpoints.rs"]
mod tests;
