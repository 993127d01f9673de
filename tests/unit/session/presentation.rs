use super::*;

fn presentation() -> Presentation {
    Presentation::new(Story::compassion().unwrap(), PresentationOpts::default()).unwrap()
}

#[test]
fn initial_frame_shows_first_scene() {
    let p = presentation();
    let f = p.frame();
    assert_eq!(f.progress, Progress::START);
    assert_eq!(f.current_scene, 0);
    assert_eq!(f.scenes[0].opacity, 1.0);
    assert!(f.indicator[0].active);
    assert!(!f.audio_playing);
    assert_eq!(f.particles.len(), 2);
}

#[test]
fn scroll_events_flow_through_subscriptions() {
    let mut p = presentation();
    let progress = p.on_scroll(2_500.0, 5_000.0);
    assert_eq!(progress.get(), 0.5);
    assert_eq!(p.current_scene(), 3);
    let home = &p.scene_styles()[3];
    assert_eq!(home.id, "home");
    assert_eq!(home.opacity, 1.0);
}

#[test]
fn scrolling_back_restores_earlier_scenes() {
    let mut p = presentation();
    p.on_scroll(5_000.0, 5_000.0);
    assert_eq!(p.current_scene(), 5);
    p.on_scroll(0.0, 5_000.0);
    assert_eq!(p.current_scene(), 0);
    assert_eq!(p.scene_styles()[5].opacity, 0.0);
}

#[test]
fn document_scroll_uses_geometry() {
    let mut p = presentation();
    let g = ScrollGeometry {
        container_top: 0.0,
        container_height: 7_000.0,
        viewport_height: 1_000.0,
    };
    assert_eq!(p.on_scroll_y(&g, 6_000.0), Progress::END);
    assert_eq!(p.current_scene(), 5);
}

#[test]
fn teardown_stops_restyling() {
    let mut p = presentation();
    p.seek(Progress::new(0.2));
    assert_eq!(p.teardown(), 7);
    assert!(p.is_torn_down());
    assert_eq!(p.teardown(), 0);

    p.seek(Progress::END);
    assert_eq!(p.progress(), Progress::END);
    assert_eq!(p.current_scene(), 1);
}

#[test]
fn ambient_only_for_visible_scenes() {
    let mut p = presentation();
    p.seek(Progress::new(0.5));
    p.tick(1.0).unwrap();
    let f = p.frame();
    let scenes: Vec<&str> = f.ambient.iter().map(|a| a.scene.as_str()).collect();
    assert_eq!(scenes, vec!["home"]);
}

#[test]
fn clock_rejects_bad_times() {
    let mut p = presentation();
    assert!(p.tick(-1.0).is_err());
    assert!(p.tick(f64::NAN).is_err());
    p.tick(2.0).unwrap();
    p.advance(0.5).unwrap();
    assert_eq!(p.time_s(), 2.5);
}

#[test]
fn seed_override_changes_rain_only() {
    let story = Story::compassion().unwrap();
    let a = Presentation::new(story.clone(), PresentationOpts::default()).unwrap();
    let b = Presentation::new(
        story,
        PresentationOpts {
            seed: Some(99),
            ..PresentationOpts::default()
        },
    )
    .unwrap();
    let (fa, fb) = (a.frame(), b.frame());
    assert_ne!(fa.particles[0], fb.particles[0]);
    assert_eq!(fa.particles[1], fb.particles[1]);
}

#[test]
fn audio_toggle_is_reported_in_frame() {
    let mut p = Presentation::new(
        Story::compassion().unwrap(),
        PresentationOpts {
            audio_playing: true,
            ..PresentationOpts::default()
        },
    )
    .unwrap();
    assert!(p.frame().audio_playing);
    assert!(!p.toggle_audio());
    assert!(!p.frame().audio_playing);
}

#[test]
fn invalid_story_is_rejected() {
    let mut story = Story::compassion().unwrap();
    story.scenes.pop();
    assert!(Presentation::new(story, PresentationOpts::default()).is_err());
}

fn reveal_of(frame: &Frame, scene: &str, name: &str) -> f64 {
    frame
        .reveal
        .iter()
        .find(|r| r.scene == scene)
        .and_then(|r| r.values.iter().find(|v| v.name == name))
        .map(|v| v.value)
        .unwrap()
}

#[test]
fn each_scene_has_its_own_subscription() {
    let p = presentation();
    assert_eq!(p.subscriptions.len(), p.story().scenes.len() + 1);
    assert_eq!(p.tracker.subscriber_count(), 7);
}

#[test]
fn in_view_reveal_starts_when_scene_first_shows() {
    let mut p = presentation();
    assert_eq!(p.in_view_since(0), Some(0.0));
    assert_eq!(p.in_view_since(3), None);

    p.tick(10.0).unwrap();
    p.seek(Progress::new(0.5));
    assert_eq!(p.in_view_since(3), Some(10.0));
    assert_eq!(reveal_of(&p.frame(), "home", "title"), 0.0);

    p.tick(12.0).unwrap();
    assert_eq!(reveal_of(&p.frame(), "home", "title"), 1.0);

    p.seek(Progress::START);
    p.tick(20.0).unwrap();
    p.seek(Progress::new(0.5));
    assert_eq!(p.in_view_since(3), Some(10.0));
}

#[test]
fn mount_reveals_and_overlay_run_from_start() {
    let mut p = presentation();
    let f = p.frame();
    assert_eq!(reveal_of(&f, "night", "title"), 0.0);
    assert_eq!(f.overlay[0].value, 0.0);

    p.tick(4.0).unwrap();
    let f = p.frame();
    assert_eq!(reveal_of(&f, "night", "title"), 1.0);
    assert_eq!(reveal_of(&f, "night", "caption"), 1.0);
    assert_eq!(f.overlay[0].name, "audio_control");
    assert_eq!(f.overlay[0].value, 1.0);
}

#[test]
fn hidden_scenes_report_no_reveals() {
    let p = presentation();
    let frame = p.frame();
    let scenes: Vec<&str> = frame.reveal.iter().map(|r| r.scene.as_str()).collect();
    assert_eq!(scenes, vec!["night"]);
}
