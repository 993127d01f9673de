use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    animation::{
        breakpoints::BreakpointTable,
        cycle::{CycleAnim, Repeat},
        ease::Ease,
    },
    foundation::core::{LayerTransform, Progress},
    foundation::error::{ReelError, ReelResult},
    foundation::math::Rng64,
    scroll::ladder::SceneLadder,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete scroll story.
///
/// A story is a pure data model that can be:
/// - built programmatically (see [`crate::StoryBuilder`], [`Story::compassion`])
/// - serialized/deserialized via Serde (JSON)
///
/// Evaluating a story against scroll progress is done by [`crate::SceneAnimator`];
/// a running presentation is driven through [`crate::Presentation`].
pub struct Story {
    /// Human-readable story title.
    pub title: String,
    /// Global deterministic seed for particle fields.
    #[serde(default)]
    pub seed: u64,
    /// Scenes in scroll order.
    pub scenes: Vec<SceneDef>,
    /// Thresholds selecting the highlighted scene.
    pub ladder: SceneLadder,
    /// Decorative time-driven particle fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub particles: Vec<ParticleFieldDef>,
    /// Closing credit lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credits: Vec<String>,
    /// One-shot entrances of fixed elements outside any scene (the audio toggle).
    ///
    /// Only [`RevealTrigger::Mount`] is meaningful here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlay: Vec<RevealTrack>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One full-viewport narrative segment.
pub struct SceneDef {
    /// Stable scene identifier.
    pub id: String,
    /// Short label shown by the navigation indicator.
    pub label: String,
    /// Scene heading.
    pub title: String,
    /// Narrative line under the heading.
    #[serde(default)]
    pub caption: String,
    /// Section opacity over scroll progress.
    pub opacity: BreakpointTable,
    /// Scroll-driven motion of the whole section.
    #[serde(default, skip_serializing_if = "LayerMotion::is_static")]
    pub section: LayerMotion,
    /// Scroll-driven motion of the content box inside the section.
    #[serde(default, skip_serializing_if = "LayerMotion::is_static")]
    pub content: LayerMotion,
    /// Time-driven decorative loops inside the scene.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ambient: Vec<AmbientLoop>,
    /// One-shot entrance animations of the scene's elements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reveal: Vec<RevealTrack>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Optional scroll-driven scale and vertical offset of one layer.
pub struct LayerMotion {
    /// Uniform scale over progress; absent means `1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<BreakpointTable>,
    /// Vertical offset in pixels over progress; absent means `0.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<BreakpointTable>,
}

impl LayerMotion {
    /// True when no parameter is animated.
    pub fn is_static(&self) -> bool {
        self.scale.is_none() && self.offset_y.is_none()
    }

    /// Sample both parameters at `progress`.
    pub fn sample(&self, progress: Progress) -> LayerTransform {
        let identity = LayerTransform::default();
        LayerTransform {
            scale: self
                .scale
                .as_ref()
                .map_or(identity.scale, |t| t.sample(progress)),
            offset_y: self
                .offset_y
                .as_ref()
                .map_or(identity.offset_y, |t| t.sample(progress)),
        }
    }

    fn validate(&self, what: &str) -> ReelResult<()> {
        if let Some(t) = &self.scale {
            t.validate().map_err(in_context(&format!("{what} scale")))?;
        }
        if let Some(t) = &self.offset_y {
            t.validate()
                .map_err(in_context(&format!("{what} offset_y")))?;
        }
        Ok(())
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Visual parameter driven by an [`AmbientLoop`] or a [`RevealTrack`].
pub enum AmbientProperty {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Uniform scale.
    Scale,
    /// Horizontal offset (pixels, or percent for travelling elements).
    OffsetX,
    /// Vertical offset in pixels.
    OffsetY,
    /// Rotation in degrees.
    RotationDeg,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Named time-driven loop on one element of a scene.
pub struct AmbientLoop {
    /// Element name, unique within the scene.
    pub name: String,
    /// Driven parameter.
    pub property: AmbientProperty,
    /// Animation over presentation time.
    pub anim: CycleAnim,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// When a [`RevealTrack`] starts its clock.
pub enum RevealTrigger {
    /// At presentation time 0.
    #[default]
    Mount,
    /// The first time the owning scene becomes visible.
    InView,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One-shot entrance of one element property (fade in, slide up, pop).
///
/// The animation plays once from its trigger and then holds its last value.
/// Several tracks may share a `name` to move different properties of the same
/// element.
pub struct RevealTrack {
    /// Element name.
    pub name: String,
    /// Driven parameter.
    pub property: AmbientProperty,
    /// What starts the clock.
    #[serde(default)]
    pub trigger: RevealTrigger,
    /// Animation measured from the trigger; must not repeat.
    pub anim: CycleAnim,
}

impl RevealTrack {
    /// Track on `name` triggered at presentation start.
    pub fn on_mount(name: impl Into<String>, property: AmbientProperty, anim: CycleAnim) -> Self {
        Self {
            name: name.into(),
            property,
            trigger: RevealTrigger::Mount,
            anim,
        }
    }

    /// Track on `name` triggered when its scene first shows.
    pub fn in_view(name: impl Into<String>, property: AmbientProperty, anim: CycleAnim) -> Self {
        Self {
            trigger: RevealTrigger::InView,
            ..Self::on_mount(name, property, anim)
        }
    }

    /// Value `elapsed_s` seconds after the trigger, or the first value when
    /// the trigger has not fired yet.
    pub fn sample(&self, elapsed_s: Option<f64>) -> f64 {
        self.anim.sample(elapsed_s.unwrap_or(0.0))
    }

    fn validate(&self, what: &str) -> ReelResult<()> {
        let what = format!("{what} reveal '{}'", self.name);
        self.anim.validate().map_err(in_context(&what))?;
        if self.anim.repeat != Repeat::Once {
            return Err(ReelError::validation(format!("{what} must play once")));
        }
        Ok(())
    }
}

/// Reject two tracks driving the same property of the same element.
fn validate_reveals(tracks: &[RevealTrack], what: &str) -> ReelResult<()> {
    let mut seen = BTreeSet::new();
    for track in tracks {
        track.validate(what)?;
        if !seen.insert((track.name.as_str(), track.property)) {
            return Err(ReelError::validation(format!(
                "{what} has duplicate reveal '{}' {:?}",
                track.name, track.property
            )));
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How a per-particle parameter is chosen when a field is built.
pub enum Spread {
    /// Same value for every particle.
    Fixed(f64),
    /// Drawn once per particle, uniformly in `[min, max)`.
    Uniform {
        /// Inclusive lower bound.
        min: f64,
        /// Exclusive upper bound.
        max: f64,
    },
    /// `start + index * step`.
    Step {
        /// Value for particle 0.
        start: f64,
        /// Increment per particle index.
        step: f64,
    },
}

impl Spread {
    /// Smallest value this spread can produce across `count` particles.
    pub fn min_over(&self, count: usize) -> f64 {
        match *self {
            Self::Fixed(v) => v,
            Self::Uniform { min, .. } => min,
            Self::Step { start, step } => {
                let last = start + step * count.saturating_sub(1) as f64;
                start.min(last)
            }
        }
    }

    fn validate(&self, what: &str) -> ReelResult<()> {
        let finite = match *self {
            Self::Fixed(v) => v.is_finite(),
            Self::Uniform { min, max } => min.is_finite() && max.is_finite(),
            Self::Step { start, step } => start.is_finite() && step.is_finite(),
        };
        if !finite {
            return Err(ReelError::validation(format!("{what} must be finite")));
        }
        if let Self::Uniform { min, max } = *self
            && min > max
        {
            return Err(ReelError::validation(format!(
                "{what} uniform range is inverted ({min} > {max})"
            )));
        }
        Ok(())
    }

    /// Value for particle `index`; draws from `rng` only for [`Spread::Uniform`].
    pub(crate) fn resolve(&self, index: usize, rng: &mut Rng64) -> f64 {
        match *self {
            Self::Fixed(v) => v,
            Self::Uniform { min, max } => rng.range(min, max),
            Self::Step { start, step } => start + step * index as f64,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Declaration of a looping particle field (rain, floating hearts, ...).
///
/// Every particle plays the same `y`/`opacity` keyframes forever; position,
/// cycle duration, and initial delay vary per particle.
pub struct ParticleFieldDef {
    /// Field name, unique within the story; also salts the field seed.
    pub name: String,
    /// Scene whose section hosts the field, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_scene: Option<String>,
    /// Number of particles.
    pub count: usize,
    /// Horizontal position in percent of the container width.
    pub x_pct: Spread,
    /// Cycle duration in seconds.
    pub duration_s: Spread,
    /// Initial delay in seconds.
    pub delay_s: Spread,
    /// Vertical keyframes over one cycle.
    pub y: Vec<f64>,
    /// Opacity keyframes over one cycle.
    pub opacity: Vec<f64>,
    /// Segment ease for both keyframe tracks.
    #[serde(default)]
    pub ease: Ease,
}

impl ParticleFieldDef {
    /// Check counts, spreads, and keyframes.
    pub fn validate(&self) -> ReelResult<()> {
        let what = format!("particle field '{}'", self.name);
        if self.name.trim().is_empty() {
            return Err(ReelError::validation("particle field name must be non-empty"));
        }
        if self.count == 0 {
            return Err(ReelError::validation(format!("{what} needs count > 0")));
        }
        self.x_pct.validate(&format!("{what} x_pct"))?;
        self.duration_s.validate(&format!("{what} duration_s"))?;
        self.delay_s.validate(&format!("{what} delay_s"))?;
        if self.duration_s.min_over(self.count) <= 0.0 {
            return Err(ReelError::validation(format!(
                "{what} durations must be > 0"
            )));
        }
        if self.delay_s.min_over(self.count) < 0.0 {
            return Err(ReelError::validation(format!("{what} delays must be >= 0")));
        }
        for (track, values) in [("y", &self.y), ("opacity", &self.opacity)] {
            if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
                return Err(ReelError::validation(format!(
                    "{what} {track} keyframes must be non-empty and finite"
                )));
            }
        }
        Ok(())
    }
}

impl Story {
    /// Parse and validate a story from a JSON reader.
    pub fn from_reader(r: impl Read) -> ReelResult<Self> {
        let story: Self = serde_json::from_reader(r)?;
        story.validate()?;
        Ok(story)
    }

    /// Parse and validate a story from a JSON string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let story: Self = serde_json::from_str(s)?;
        story.validate()?;
        Ok(story)
    }

    /// Parse and validate a story JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| ReelError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON form of the story.
    pub fn to_json_pretty(&self) -> ReelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: &str) -> Option<&SceneDef> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// Position of a scene in scroll order.
    pub fn scene_index(&self, id: &str) -> Option<usize> {
        self.scenes.iter().position(|s| s.id == id)
    }

    /// Validate every table, ladder, loop, and particle field.
    pub fn validate(&self) -> ReelResult<()> {
        if self.scenes.is_empty() {
            return Err(ReelError::validation("story must have at least one scene"));
        }

        let mut ids = BTreeSet::new();
        for scene in &self.scenes {
            if scene.id.trim().is_empty() {
                return Err(ReelError::validation("scene id must be non-empty"));
            }
            if !ids.insert(scene.id.as_str()) {
                return Err(ReelError::validation(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }
            scene.validate()?;
        }

        self.ladder.validate()?;
        if self.ladder.scene_count() != self.scenes.len() {
            return Err(ReelError::validation(format!(
                "ladder selects {} scenes but story has {}",
                self.ladder.scene_count(),
                self.scenes.len()
            )));
        }

        let mut fields = BTreeSet::new();
        for field in &self.particles {
            field.validate()?;
            if !fields.insert(field.name.as_str()) {
                return Err(ReelError::validation(format!(
                    "duplicate particle field '{}'",
                    field.name
                )));
            }
            if let Some(host) = &field.host_scene
                && !ids.contains(host.as_str())
            {
                return Err(ReelError::validation(format!(
                    "particle field '{}' references unknown scene '{host}'",
                    field.name
                )));
            }
        }

        validate_reveals(&self.overlay, "overlay")?;
        if let Some(track) = self
            .overlay
            .iter()
            .find(|t| t.trigger != RevealTrigger::Mount)
        {
            return Err(ReelError::validation(format!(
                "overlay reveal '{}' has no scene to come into view",
                track.name
            )));
        }
        Ok(())
    }
}

impl SceneDef {
    fn validate(&self) -> ReelResult<()> {
        let what = format!("scene '{}'", self.id);
        self.opacity
            .validate()
            .map_err(in_context(&format!("{what} opacity")))?;
        self.section.validate(&format!("{what} section"))?;
        self.content.validate(&format!("{what} content"))?;

        let mut names = BTreeSet::new();
        for amb in &self.ambient {
            if !names.insert(amb.name.as_str()) {
                return Err(ReelError::validation(format!(
                    "{what} has duplicate ambient loop '{}'",
                    amb.name
                )));
            }
            amb.anim
                .validate()
                .map_err(in_context(&format!("{what} ambient '{}'", amb.name)))?;
        }
        validate_reveals(&self.reveal, &what)
    }
}

/// Re-tag a nested error as a validation error prefixed with `what`.
fn in_context(what: &str) -> impl FnOnce(ReelError) -> ReelError + '_ {
    move |e| {
        let detail = match e {
            ReelError::Validation(m)
            | ReelError::Animation(m)
            | ReelError::Evaluation(m) => m,
            other => other.to_string(),
        };
        ReelError::validation(format!("{what}: {detail}"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/model.rs"]
mod tests;
