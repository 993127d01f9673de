//! scrollreel evaluates scroll-driven narrative presentations.
//!
//! A presentation is a fixed sequence of full-viewport scenes. Scrolling moves a
//! single normalized progress value; every scene maps that value through its own
//! breakpoint tables to an opacity and optional scale/offset, while decorative
//! loops (rain, floating hearts, flickering lights) run on wall time.
//!
//! # Pipeline overview
//!
//! 1. **Track**: raw scroll offset -> [`Progress`] in `[0, 1]` ([`ScrollProgressTracker`])
//! 2. **Animate**: `Story + Progress -> Vec<SceneStyle>` ([`SceneAnimator`])
//! 3. **Select**: `Progress -> current scene index` ([`SceneLadder`])
//! 4. **Snapshot**: scroll styles + clock-driven loops + particles -> [`Frame`] ([`Presentation`])
//!
//! Painting, layout, and audio playback are left to the host.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: particle randomness is drawn once per field from the story seed.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod particles;
mod scroll;
mod session;
mod story;

pub use animation::breakpoints::{Breakpoint, BreakpointTable};
pub use animation::cycle::{CycleAnim, Repeat};
pub use animation::ease::Ease;
pub use eval::animator::{AmbientValue, IndicatorDot, SceneAnimator, SceneStyle};
pub use foundation::core::{Affine, LayerTransform, Point, Progress, Vec2};
pub use foundation::error::{ReelError, ReelResult};
pub use particles::field::{Particle, ParticleField, ParticleFrame, ParticleState};
pub use scroll::ladder::SceneLadder;
pub use scroll::tracker::{ScrollGeometry, ScrollProgressTracker, SubscriptionId};
pub use session::audio::AudioControl;
pub use session::presentation::{Frame, Presentation, PresentationOpts, SceneAmbient};
pub use story::builder::{SceneBuilder, StoryBuilder};
pub use story::model::{
    AmbientLoop, AmbientProperty, LayerMotion, ParticleFieldDef, RevealTrack, RevealTrigger,
    SceneDef, Spread, Story,
};
