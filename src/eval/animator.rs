use crate::{
    foundation::core::{LayerTransform, Progress},
    story::model::{AmbientProperty, RevealTrack, RevealTrigger, SceneDef, Story},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Scroll-driven style of one scene at a given progress.
pub struct SceneStyle {
    /// Scene identifier.
    pub id: String,
    /// Position in scroll order.
    pub index: usize,
    /// Section opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether any part of the scene shows (`opacity > 0`).
    pub visible: bool,
    /// Transform of the whole section.
    pub section: LayerTransform,
    /// Transform of the content box inside the section.
    pub content: LayerTransform,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One dot of the scene navigation indicator.
pub struct IndicatorDot {
    /// Scene label.
    pub label: String,
    /// Whether this dot marks the current scene.
    pub active: bool,
    /// Dot scale (`1.5` active, `1.0` otherwise).
    pub scale: f64,
    /// Dot opacity (`1.0` active, `0.5` otherwise).
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Sampled value of one ambient loop or reveal track.
pub struct AmbientValue {
    /// Element name.
    pub name: String,
    /// Driven parameter.
    pub property: AmbientProperty,
    /// Value at the sampled time.
    pub value: f64,
}

/// Stateless mapping from scroll progress to per-scene styles.
pub struct SceneAnimator;

impl SceneAnimator {
    #[tracing::instrument(level = "trace", skip(story, progress), fields(progress = progress.get()))]
    /// Evaluate every scene of `story` at `progress`.
    pub fn eval_scenes(story: &Story, progress: Progress) -> Vec<SceneStyle> {
        story
            .scenes
            .iter()
            .enumerate()
            .map(|(index, scene)| Self::eval_scene(scene, index, progress))
            .collect()
    }

    /// Evaluate one scene's opacity and layer transforms.
    pub fn eval_scene(scene: &SceneDef, index: usize, progress: Progress) -> SceneStyle {
        let opacity = scene.opacity.sample(progress).clamp(0.0, 1.0);
        SceneStyle {
            id: scene.id.clone(),
            index,
            opacity,
            visible: opacity > 0.0,
            section: scene.section.sample(progress),
            content: scene.content.sample(progress),
        }
    }

    /// Index of the highlighted scene.
    pub fn current_scene(story: &Story, progress: Progress) -> usize {
        story.ladder.index_for(progress)
    }

    /// Navigation indicator with `current` highlighted.
    pub fn indicator(story: &Story, current: usize) -> Vec<IndicatorDot> {
        story
            .scenes
            .iter()
            .enumerate()
            .map(|(i, scene)| {
                let active = i == current;
                IndicatorDot {
                    label: scene.label.clone(),
                    active,
                    scale: if active { 1.5 } else { 1.0 },
                    opacity: if active { 1.0 } else { 0.5 },
                }
            })
            .collect()
    }

    /// Ambient loop values of `scene` at presentation time `time_s`.
    pub fn eval_ambient(scene: &SceneDef, time_s: f64) -> Vec<AmbientValue> {
        scene
            .ambient
            .iter()
            .map(|amb| AmbientValue {
                name: amb.name.clone(),
                property: amb.property,
                value: amb.anim.sample(time_s),
            })
            .collect()
    }

    /// Reveal track values at presentation time `time_s`.
    ///
    /// Mount tracks run on the presentation clock; in-view tracks run from
    /// `in_view_since` and hold their first value until it is set.
    pub fn eval_reveal(
        tracks: &[RevealTrack],
        time_s: f64,
        in_view_since: Option<f64>,
    ) -> Vec<AmbientValue> {
        tracks
            .iter()
            .map(|track| {
                let elapsed = match track.trigger {
                    RevealTrigger::Mount => Some(time_s),
                    RevealTrigger::InView => in_view_since.map(|t0| (time_s - t0).max(0.0)),
                };
                AmbientValue {
                    name: track.name.clone(),
                    property: track.property,
                    value: track.sample(elapsed),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/animator.rs"]
mod tests;
