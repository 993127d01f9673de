use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    eval::animator::{AmbientValue, IndicatorDot, SceneAnimator, SceneStyle},
    foundation::core::Progress,
    foundation::error::{ReelError, ReelResult},
    particles::field::{ParticleField, ParticleFrame},
    scroll::tracker::{ScrollGeometry, ScrollProgressTracker, SubscriptionId},
    session::audio::AudioControl,
    story::model::{SceneDef, Story},
};

/// Options for [`Presentation::new`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PresentationOpts {
    /// Override the story seed for particle fields.
    pub seed: Option<u64>,
    /// Initial audio state.
    pub audio_playing: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Sampled element values (ambient loops or reveals) of one visible scene.
pub struct SceneAmbient {
    /// Scene identifier.
    pub scene: String,
    /// Sampled tracks.
    pub values: Vec<AmbientValue>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything a renderer needs to paint one frame.
pub struct Frame {
    /// Last published scroll progress.
    pub progress: Progress,
    /// Presentation clock in seconds.
    pub time_s: f64,
    /// Highlighted scene index.
    pub current_scene: usize,
    /// Scroll-driven style of every scene.
    pub scenes: Vec<SceneStyle>,
    /// Navigation indicator.
    pub indicator: Vec<IndicatorDot>,
    /// Ambient loops of visible scenes only.
    pub ambient: Vec<SceneAmbient>,
    /// Entrance animations of visible scenes only.
    pub reveal: Vec<SceneAmbient>,
    /// Entrance animations of fixed elements outside the scenes.
    pub overlay: Vec<AmbientValue>,
    /// Particle field snapshots.
    pub particles: Vec<ParticleFrame>,
    /// Audio toggle state.
    pub audio_playing: bool,
}

/// A running presentation: one tracker feeding one animator subscription per
/// scene and the scene-index selector.
///
/// Scroll events and clock ticks are processed to completion one at a time.
/// [`teardown`](Self::teardown) (or drop) unsubscribes every subscriber.
pub struct Presentation {
    story: Rc<Story>,
    tracker: ScrollProgressTracker,
    subscriptions: Vec<SubscriptionId>,
    styles: Rc<RefCell<Vec<SceneStyle>>>,
    in_view_since: Rc<RefCell<Vec<Option<f64>>>>,
    current_scene: Rc<Cell<usize>>,
    fields: Vec<ParticleField>,
    audio: AudioControl,
    clock: Rc<Cell<f64>>,
}

impl Presentation {
    /// Validate `story`, build its particle fields, and wire the subscribers.
    pub fn new(story: Story, opts: PresentationOpts) -> ReelResult<Self> {
        story.validate()?;
        let seed = opts.seed.unwrap_or(story.seed);
        let fields = story
            .particles
            .iter()
            .map(|def| ParticleField::from_def(def, seed))
            .collect::<ReelResult<Vec<_>>>()?;

        let story = Rc::new(story);
        let mut tracker = ScrollProgressTracker::new();
        let start = tracker.progress();
        let initial = SceneAnimator::eval_scenes(&story, start);
        let clock = Rc::new(Cell::new(0.0));
        let in_view_since = Rc::new(RefCell::new(
            initial
                .iter()
                .map(|s| s.visible.then_some(0.0))
                .collect::<Vec<_>>(),
        ));
        let styles = Rc::new(RefCell::new(initial));
        let current_scene = Rc::new(Cell::new(SceneAnimator::current_scene(&story, start)));

        let mut subscriptions = Vec::with_capacity(story.scenes.len() + 1);
        for index in 0..story.scenes.len() {
            let story = Rc::clone(&story);
            let styles = Rc::clone(&styles);
            let in_view_since = Rc::clone(&in_view_since);
            let clock = Rc::clone(&clock);
            subscriptions.push(tracker.subscribe(move |p| {
                let style = SceneAnimator::eval_scene(&story.scenes[index], index, p);
                if style.visible
                    && let Some(since) = in_view_since.borrow_mut().get_mut(index)
                    && since.is_none()
                {
                    *since = Some(clock.get());
                    tracing::debug!(scene = %style.id, time_s = clock.get(), "scene in view");
                }
                styles.borrow_mut()[index] = style;
            }));
        }
        subscriptions.push({
            let story = Rc::clone(&story);
            let current_scene = Rc::clone(&current_scene);
            tracker.subscribe(move |p| current_scene.set(SceneAnimator::current_scene(&story, p)))
        });

        tracing::info!(
            title = %story.title,
            scenes = story.scenes.len(),
            fields = fields.len(),
            seed,
            "presentation ready"
        );

        Ok(Self {
            story,
            tracker,
            subscriptions,
            styles,
            in_view_since,
            current_scene,
            fields,
            audio: AudioControl::new(opts.audio_playing),
            clock,
        })
    }

    /// The story being presented.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Handle a scroll event given the container offset and scrollable height.
    pub fn on_scroll(&mut self, offset: f64, scrollable_height: f64) -> Progress {
        self.tracker.update(offset, scrollable_height)
    }

    /// Handle a scroll event given a document scroll position.
    pub fn on_scroll_y(&mut self, geometry: &ScrollGeometry, scroll_y: f64) -> Progress {
        self.tracker.update_scroll_y(geometry, scroll_y)
    }

    /// Jump straight to `progress`.
    pub fn seek(&mut self, progress: Progress) -> Progress {
        self.tracker.publish(progress)
    }

    /// Set the presentation clock (seconds since start).
    pub fn tick(&mut self, time_s: f64) -> ReelResult<()> {
        if !time_s.is_finite() || time_s < 0.0 {
            return Err(ReelError::evaluation(format!(
                "presentation time must be finite and >= 0, got {time_s}"
            )));
        }
        self.clock.set(time_s);
        Ok(())
    }

    /// Advance the clock by `dt_s` seconds.
    pub fn advance(&mut self, dt_s: f64) -> ReelResult<()> {
        self.tick(self.clock.get() + dt_s)
    }

    /// Flip the audio toggle, returning the new state.
    pub fn toggle_audio(&mut self) -> bool {
        self.audio.toggle()
    }

    /// Current audio toggle.
    pub fn audio(&self) -> AudioControl {
        self.audio
    }

    /// Last published scroll progress.
    pub fn progress(&self) -> Progress {
        self.tracker.progress()
    }

    /// Presentation clock in seconds.
    pub fn time_s(&self) -> f64 {
        self.clock.get()
    }

    /// Clock time at which scene `index` first became visible.
    pub fn in_view_since(&self, index: usize) -> Option<f64> {
        self.in_view_since.borrow().get(index).copied().flatten()
    }

    /// Scene index as last computed by the selector subscription.
    pub fn current_scene(&self) -> usize {
        self.current_scene.get()
    }

    /// Scene styles as last computed by the animator subscription.
    pub fn scene_styles(&self) -> Vec<SceneStyle> {
        self.styles.borrow().clone()
    }

    /// True once [`teardown`](Self::teardown) ran.
    pub fn is_torn_down(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Unsubscribe the scene animators and the selector. Returns how many were removed.
    ///
    /// Later scroll events still move the tracker but no longer restyle scenes.
    pub fn teardown(&mut self) -> usize {
        let removed = self
            .subscriptions
            .drain(..)
            .filter(|id| self.tracker.unsubscribe(*id))
            .count();
        if removed > 0 {
            tracing::debug!(removed, "presentation torn down");
        }
        removed
    }

    /// Snapshot of everything visible right now.
    pub fn frame(&self) -> Frame {
        let scenes = self.scene_styles();
        let current = self.current_scene();
        let time_s = self.time_s();
        let visible: Vec<(usize, &SceneDef)> = scenes
            .iter()
            .filter(|s| s.visible)
            .filter_map(|s| Some((s.index, self.story.scenes.get(s.index)?)))
            .collect();
        let ambient = visible
            .iter()
            .map(|&(_, scene)| SceneAmbient {
                scene: scene.id.clone(),
                values: SceneAnimator::eval_ambient(scene, time_s),
            })
            .filter(|a| !a.values.is_empty())
            .collect();
        let reveal = visible
            .iter()
            .map(|&(index, scene)| SceneAmbient {
                scene: scene.id.clone(),
                values: SceneAnimator::eval_reveal(
                    &scene.reveal,
                    time_s,
                    self.in_view_since(index),
                ),
            })
            .filter(|a| !a.values.is_empty())
            .collect();

        Frame {
            progress: self.progress(),
            time_s,
            current_scene: current,
            indicator: SceneAnimator::indicator(&self.story, current),
            scenes,
            ambient,
            reveal,
            overlay: SceneAnimator::eval_reveal(&self.story.overlay, time_s, None),
            particles: self.fields.iter().map(|f| f.sample(time_s)).collect(),
            audio_playing: self.audio.is_playing(),
        }
    }
}

impl Drop for Presentation {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/presentation.rs"]
mod tests;
