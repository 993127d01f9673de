use crate::{
    animation::{breakpoints::BreakpointTable, cycle::CycleAnim},
    foundation::error::{ReelError, ReelResult},
    scroll::ladder::SceneLadder,
    story::model::{
        AmbientLoop, AmbientProperty, LayerMotion, ParticleFieldDef, RevealTrack, SceneDef, Story,
    },
};

/// Builder for [`Story`](crate::Story).
pub struct StoryBuilder {
    title: String,
    seed: u64,
    scenes: Vec<SceneBuilder>,
    thresholds: Vec<f64>,
    particles: Vec<ParticleFieldDef>,
    credits: Vec<String>,
    overlay: Vec<RevealTrack>,
}

impl StoryBuilder {
    /// Create a builder for a new story.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            seed: 0,
            scenes: Vec::new(),
            thresholds: Vec::new(),
            particles: Vec::new(),
            credits: Vec::new(),
            overlay: Vec::new(),
        }
    }

    /// Set global deterministic seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Append a scene in scroll order.
    pub fn scene(mut self, scene: SceneBuilder) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Set the scene-index thresholds (one fewer than the scene count).
    pub fn ladder(mut self, thresholds: impl Into<Vec<f64>>) -> Self {
        self.thresholds = thresholds.into();
        self
    }

    /// Add a particle field.
    pub fn particles(mut self, field: ParticleFieldDef) -> Self {
        self.particles.push(field);
        self
    }

    /// Append a closing credit line.
    pub fn credit(mut self, line: impl Into<String>) -> Self {
        self.credits.push(line.into());
        self
    }

    /// Add an entrance of a fixed element outside the scenes.
    pub fn overlay(mut self, track: RevealTrack) -> Self {
        self.overlay.push(track);
        self
    }

    /// Build and validate final [`Story`](crate::Story).
    pub fn build(self) -> ReelResult<Story> {
        let scenes = self
            .scenes
            .into_iter()
            .map(SceneBuilder::build)
            .collect::<ReelResult<Vec<_>>>()?;
        let story = Story {
            title: self.title,
            seed: self.seed,
            scenes,
            ladder: SceneLadder::new(self.thresholds)?,
            particles: self.particles,
            credits: self.credits,
            overlay: self.overlay,
        };
        story.validate()?;
        Ok(story)
    }
}

type Points = Vec<(f64, f64)>;

/// Builder for one [`SceneDef`](crate::SceneDef).
pub struct SceneBuilder {
    id: String,
    label: String,
    title: String,
    caption: String,
    opacity: Option<Points>,
    section_scale: Option<Points>,
    section_offset_y: Option<Points>,
    content_scale: Option<Points>,
    content_offset_y: Option<Points>,
    ambient: Vec<AmbientLoop>,
    reveal: Vec<RevealTrack>,
}

impl SceneBuilder {
    /// Start a scene with its id and indicator label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            title: String::new(),
            caption: String::new(),
            opacity: None,
            section_scale: None,
            section_offset_y: None,
            content_scale: None,
            content_offset_y: None,
            ambient: Vec::new(),
            reveal: Vec::new(),
        }
    }

    /// Set heading and caption text.
    pub fn text(mut self, title: impl Into<String>, caption: impl Into<String>) -> Self {
        self.title = title.into();
        self.caption = caption.into();
        self
    }

    /// Section opacity breakpoints (required).
    pub fn opacity(mut self, points: &[(f64, f64)]) -> Self {
        self.opacity = Some(points.to_vec());
        self
    }

    /// Section scale breakpoints.
    pub fn section_scale(mut self, points: &[(f64, f64)]) -> Self {
        self.section_scale = Some(points.to_vec());
        self
    }

    /// Section vertical offset breakpoints.
    pub fn section_offset_y(mut self, points: &[(f64, f64)]) -> Self {
        self.section_offset_y = Some(points.to_vec());
        self
    }

    /// Content scale breakpoints.
    pub fn content_scale(mut self, points: &[(f64, f64)]) -> Self {
        self.content_scale = Some(points.to_vec());
        self
    }

    /// Content vertical offset breakpoints.
    pub fn content_offset_y(mut self, points: &[(f64, f64)]) -> Self {
        self.content_offset_y = Some(points.to_vec());
        self
    }

    /// Add a named ambient loop.
    pub fn ambient(
        mut self,
        name: impl Into<String>,
        property: AmbientProperty,
        anim: CycleAnim,
    ) -> Self {
        self.ambient.push(AmbientLoop {
            name: name.into(),
            property,
            anim,
        });
        self
    }

    /// Add a one-shot entrance track.
    pub fn reveal(mut self, track: RevealTrack) -> Self {
        self.reveal.push(track);
        self
    }

    /// Build the scene; table errors name the scene.
    pub fn build(self) -> ReelResult<SceneDef> {
        let id = self.id;
        let table = |what: &str, points: Option<Points>| -> ReelResult<Option<BreakpointTable>> {
            points
                .map(|p| {
                    BreakpointTable::linear(&p).map_err(|e| {
                        ReelError::validation(format!("scene '{id}' {what}: {e}"))
                    })
                })
                .transpose()
        };

        let opacity = table("opacity", self.opacity)?.ok_or_else(|| {
            ReelError::validation(format!("scene '{id}' needs an opacity table"))
        })?;
        let section = LayerMotion {
            scale: table("section scale", self.section_scale)?,
            offset_y: table("section offset_y", self.section_offset_y)?,
        };
        let content = LayerMotion {
            scale: table("content scale", self.content_scale)?,
            offset_y: table("content offset_y", self.content_offset_y)?,
        };

        Ok(SceneDef {
            id,
            label: self.label,
            title: self.title,
            caption: self.caption,
            opacity,
            section,
            content,
            ambient: self.ambient,
            reveal: self.reveal,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/builder.rs"]
mod tests;
