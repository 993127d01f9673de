use crate::{
    animation::cycle::CycleAnim,
    foundation::core::Point,
    foundation::error::ReelResult,
    foundation::math::{Rng64, stable_hash64},
    story::model::ParticleFieldDef,
};

/// One particle with its per-particle placement and timing fixed at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position in percent of the container width.
    pub x_pct: f64,
    y: CycleAnim,
    opacity: CycleAnim,
}

impl Particle {
    /// Cycle length in seconds.
    pub fn duration_s(&self) -> f64 {
        self.y.duration_s
    }

    /// Initial delay in seconds.
    pub fn delay_s(&self) -> f64 {
        self.y.delay_s
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Particle state at one instant.
pub struct ParticleState {
    /// Horizontal position in percent of the container width.
    pub x_pct: f64,
    /// Vertical position in the field's units.
    pub y: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Completed cycles so far.
    pub cycle: u64,
}

impl ParticleState {
    /// Position in a container `width` units wide; `y` passes through unchanged.
    pub fn position(&self, width: f64) -> Point {
        Point::new(self.x_pct / 100.0 * width, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Snapshot of a whole field.
pub struct ParticleFrame {
    /// Field name.
    pub field: String,
    /// Scene hosting the field, if any.
    pub host_scene: Option<String>,
    /// Particle states in construction order.
    pub particles: Vec<ParticleState>,
}

/// A looping decorative particle field (rain, floating hearts).
///
/// Randomized parameters are drawn exactly once, when the field is built; sampling
/// is a pure function of time, so frames never re-randomize.
#[derive(Clone, Debug)]
pub struct ParticleField {
    name: String,
    host_scene: Option<String>,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Build a field from its declaration under a story seed.
    pub fn from_def(def: &ParticleFieldDef, story_seed: u64) -> ReelResult<Self> {
        def.validate()?;
        let seed = stable_hash64(story_seed, &def.name);
        let mut rng = Rng64::new(seed);

        let particles = (0..def.count)
            .map(|i| {
                // Draw order per particle: x, duration, delay.
                let x_pct = def.x_pct.resolve(i, &mut rng);
                let duration_s = def.duration_s.resolve(i, &mut rng);
                let delay_s = def.delay_s.resolve(i, &mut rng);
                let track = |values: &[f64]| {
                    CycleAnim::forever(values, duration_s)
                        .delayed(delay_s)
                        .eased(def.ease)
                };
                Particle {
                    x_pct,
                    y: track(def.y.as_slice()),
                    opacity: track(def.opacity.as_slice()),
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            field = %def.name,
            count = particles.len(),
            seed,
            "particle field built"
        );
        Ok(Self {
            name: def.name.clone(),
            host_scene: def.host_scene.clone(),
            particles,
        })
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scene hosting the field, if any.
    pub fn host_scene(&self) -> Option<&str> {
        self.host_scene.as_deref()
    }

    /// Particles in construction order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Snapshot every particle at presentation time `time_s`.
    pub fn sample(&self, time_s: f64) -> ParticleFrame {
        ParticleFrame {
            field: self.name.clone(),
            host_scene: self.host_scene.clone(),
            particles: self
                .particles
                .iter()
                .map(|p| ParticleState {
                    x_pct: p.x_pct,
                    y: p.y.sample(time_s),
                    opacity: p.opacity.sample(time_s).clamp(0.0, 1.0),
                    cycle: p.y.completed_cycles(time_s),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/field.rs"]
mod tests;
