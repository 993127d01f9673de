use crate::{
    animation::{cycle::CycleAnim, ease::Ease},
    foundation::error::ReelResult,
    story::builder::{SceneBuilder, StoryBuilder},
    story::model::{AmbientProperty as Prop, ParticleFieldDef, RevealTrack, Spread, Story},
};

impl Story {
    /// The built-in six-scene story: a man, a rainy night, and a rescued dog.
    ///
    /// Scene tables overlap so that one or two scenes are visible at any
    /// progress; the ladder switches the indicator at `0.15, 0.30, .., 0.75`.
    pub fn compassion() -> ReelResult<Story> {
        // Looping element keyframes default to a soft in-out curve.
        let soft = |values: &[f64], secs: f64| CycleAnim::forever(values, secs).eased(Ease::InOutQuad);
        // Entrances ease out from `from` to `to`.
        let enter = |from: f64, to: f64, secs: f64, delay: f64| {
            CycleAnim::once([from, to], secs)
                .delayed(delay)
                .eased(Ease::OutCubic)
        };
        let fade = |secs: f64, delay: f64| enter(0.0, 1.0, secs, delay);

        StoryBuilder::new("A Story of Compassion")
            .scene(
                SceneBuilder::new("night", "Night")
                    .text("A Quiet Night", "The city sleeps, but one soul wanders...")
                    .opacity(&[(0.0, 1.0), (0.1, 1.0), (0.15, 0.0)])
                    .section_scale(&[(0.0, 1.0), (0.15, 1.2)])
                    .ambient("man_walking", Prop::OffsetX, CycleAnim::forever([-100.0, 100.0], 20.0))
                    .reveal(RevealTrack::on_mount("content", Prop::Opacity, fade(2.0, 0.5)))
                    .reveal(RevealTrack::on_mount("content", Prop::OffsetY, enter(50.0, 0.0, 2.0, 0.5)))
                    .reveal(RevealTrack::on_mount("title", Prop::Opacity, fade(2.0, 1.5)))
                    .reveal(RevealTrack::on_mount("caption", Prop::Opacity, fade(2.0, 2.0))),
            )
            .scene(
                SceneBuilder::new("discovery", "Discovery")
                    .text(
                        "A Chance Encounter",
                        "Under the soft glow of a streetlight, a small life trembles...",
                    )
                    .opacity(&[(0.1, 0.0), (0.15, 1.0), (0.3, 1.0), (0.35, 0.0)])
                    .content_offset_y(&[(0.15, 100.0), (0.3, 0.0)])
                    .ambient("streetlight", Prop::Opacity, soft(&[0.8, 1.0, 0.8], 3.0))
                    .ambient("injury_mark", Prop::Opacity, soft(&[0.5, 0.8, 0.5], 1.5))
                    .reveal(RevealTrack::on_mount("dog_hiding", Prop::Opacity, fade(1.5, 0.5)))
                    .reveal(RevealTrack::on_mount("dog_hiding", Prop::Scale, enter(0.8, 1.0, 1.5, 0.5)))
                    .reveal(RevealTrack::on_mount("man_discovers", Prop::Opacity, fade(2.0, 1.0)))
                    .reveal(RevealTrack::on_mount(
                        "man_discovers",
                        Prop::OffsetX,
                        enter(-200.0, 0.0, 2.0, 1.0),
                    ))
                    .reveal(RevealTrack::in_view("title", Prop::Opacity, fade(1.5, 0.0)))
                    .reveal(RevealTrack::in_view("caption", Prop::Opacity, fade(1.5, 0.5))),
            )
            .scene(
                SceneBuilder::new("rescue", "Rescue")
                    .text(
                        "Gentle Touch",
                        "With tender care, he lifts the fragile creature into his arms...",
                    )
                    .opacity(&[(0.25, 0.0), (0.3, 1.0), (0.45, 1.0), (0.5, 0.0)])
                    .content_scale(&[(0.3, 0.9), (0.45, 1.0)])
                    .ambient("hands", Prop::OffsetY, soft(&[0.0, -10.0, 0.0], 3.0))
                    .ambient("dog_in_hands", Prop::OffsetY, soft(&[0.0, -10.0, 0.0], 3.0))
                    .ambient(
                        "heart_particles",
                        Prop::Scale,
                        soft(&[0.0, 1.2, 0.0], 2.0).delayed(0.5),
                    )
                    .reveal(RevealTrack::in_view("pickup_moment", Prop::Opacity, fade(2.0, 0.0)))
                    .reveal(RevealTrack::in_view("title", Prop::Opacity, fade(1.5, 0.0)))
                    .reveal(RevealTrack::in_view("title", Prop::OffsetY, enter(30.0, 0.0, 1.5, 0.0)))
                    .reveal(RevealTrack::in_view("caption", Prop::Opacity, fade(1.5, 0.5))),
            )
            .scene(
                SceneBuilder::new("home", "Home")
                    .text(
                        "A Warm Home",
                        "Safe at last, the little one discovers warmth and nourishment...",
                    )
                    .opacity(&[(0.4, 0.0), (0.45, 1.0), (0.6, 1.0), (0.65, 0.0)])
                    .ambient("rain_outside", Prop::Opacity, soft(&[0.3, 0.6, 0.3], 2.0))
                    .ambient("food", Prop::Scale, soft(&[1.0, 1.1, 1.0], 1.0))
                    .ambient("dog_head", Prop::RotationDeg, soft(&[-5.0, 5.0, -5.0], 0.5))
                    .ambient("dog_tail", Prop::RotationDeg, soft(&[-20.0, 20.0, -20.0], 0.3))
                    .reveal(RevealTrack::in_view("food_bowl", Prop::Opacity, fade(1.0, 0.0)))
                    .reveal(RevealTrack::in_view("food_bowl", Prop::OffsetY, enter(20.0, 0.0, 1.0, 0.0)))
                    .reveal(RevealTrack::in_view("dog_eating", Prop::Opacity, fade(1.5, 0.5)))
                    .reveal(RevealTrack::in_view(
                        "dog_eating",
                        Prop::OffsetX,
                        enter(-50.0, 0.0, 1.5, 0.5),
                    ))
                    .reveal(RevealTrack::in_view("man_watching", Prop::Opacity, fade(1.5, 1.0)))
                    .reveal(RevealTrack::on_mount("smile", Prop::Scale, enter(0.0, 1.0, 0.5, 1.5)))
                    .reveal(RevealTrack::in_view("title", Prop::Opacity, fade(1.5, 0.0)))
                    .reveal(RevealTrack::in_view("caption", Prop::Opacity, fade(1.5, 0.5))),
            )
            .scene(
                SceneBuilder::new("healing", "Healing")
                    .text(
                        "Healing Together",
                        "Days turn to weeks. Wounds heal. Joy returns. Two souls mend as one...",
                    )
                    .opacity(&[(0.55, 0.0), (0.6, 1.0), (0.75, 1.0), (0.8, 0.0)])
                    .ambient("ball_x", Prop::OffsetX, soft(&[-100.0, 100.0, -100.0], 3.0))
                    .ambient("ball_y", Prop::OffsetY, soft(&[0.0, -50.0, 0.0], 3.0))
                    .ambient("dog_playing", Prop::OffsetX, soft(&[-80.0, 80.0, -80.0], 3.0))
                    .ambient("dog_tail", Prop::RotationDeg, soft(&[-30.0, 30.0, -30.0], 0.2))
                    .ambient("dog_walking", Prop::OffsetY, soft(&[-2.0, 2.0, -2.0], 0.4))
                    .ambient("walking_dog_tail", Prop::RotationDeg, soft(&[-40.0, 40.0, -40.0], 0.3))
                    .reveal(RevealTrack::in_view("playing_scene", Prop::Opacity, fade(1.5, 0.0)))
                    .reveal(RevealTrack::in_view(
                        "playing_scene",
                        Prop::Scale,
                        enter(0.8, 1.0, 1.5, 0.0),
                    ))
                    .reveal(RevealTrack::in_view("walking_together", Prop::Opacity, fade(2.0, 0.5)))
                    .reveal(RevealTrack::in_view(
                        "walking_together",
                        Prop::OffsetX,
                        enter(-100.0, 0.0, 2.0, 0.5),
                    ))
                    .reveal(RevealTrack::in_view("hearts_floating", Prop::Opacity, fade(1.0, 1.0)))
                    .reveal(RevealTrack::in_view("title", Prop::Opacity, fade(1.5, 0.0)))
                    .reveal(RevealTrack::in_view("caption", Prop::Opacity, fade(1.5, 0.5))),
            )
            .scene(
                SceneBuilder::new("forever", "Forever")
                    .text(
                        "Forever Changed",
                        "In saving a life, he found his own salvation.\nSometimes the ones we rescue... rescue us.",
                    )
                    .opacity(&[(0.7, 0.0), (0.75, 1.0), (1.0, 1.0)])
                    .section_scale(&[(0.75, 0.8), (1.0, 1.0)])
                    .ambient("sun_scale", Prop::Scale, soft(&[1.0, 1.1, 1.0], 3.0))
                    .ambient("sun_glow", Prop::Opacity, soft(&[0.8, 1.0, 0.8], 3.0))
                    .ambient("dog_tail", Prop::RotationDeg, soft(&[-30.0, 30.0, -30.0], 0.3))
                    .ambient("final_heart", Prop::Scale, soft(&[0.8, 1.2, 0.8], 2.0))
                    .reveal(RevealTrack::in_view("final_scene", Prop::Opacity, fade(2.0, 0.0)))
                    .reveal(RevealTrack::in_view("title", Prop::Opacity, fade(2.0, 0.0)))
                    .reveal(RevealTrack::in_view("title", Prop::OffsetY, enter(30.0, 0.0, 2.0, 0.0)))
                    .reveal(RevealTrack::in_view("caption", Prop::Opacity, fade(2.0, 0.5)))
                    .reveal(RevealTrack::in_view("credits", Prop::Opacity, fade(2.0, 2.0))),
            )
            .ladder([0.15, 0.3, 0.45, 0.6, 0.75])
            .particles(ParticleFieldDef {
                name: "rain".to_string(),
                host_scene: None,
                count: 50,
                x_pct: Spread::Uniform { min: 0.0, max: 100.0 },
                duration_s: Spread::Uniform { min: 1.0, max: 2.0 },
                delay_s: Spread::Uniform { min: 0.0, max: 2.0 },
                y: vec![0.0, 100.0],
                opacity: vec![0.0, 0.6, 0.0],
                ease: Ease::Linear,
            })
            .particles(ParticleFieldDef {
                name: "hearts".to_string(),
                host_scene: Some("healing".to_string()),
                count: 8,
                x_pct: Spread::Step { start: 10.0, step: 12.0 },
                duration_s: Spread::Fixed(3.0),
                delay_s: Spread::Step { start: 0.0, step: 0.3 },
                y: vec![0.0, -100.0, -200.0],
                opacity: vec![0.0, 1.0, 0.0],
                ease: Ease::InOutQuad,
            })
            .credit("A Story of Compassion")
            .credit("Scroll to experience the journey")
            .overlay(RevealTrack::on_mount("audio_control", Prop::Opacity, fade(0.3, 1.0)))
            .build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/compassion.rs"]
mod tests;
