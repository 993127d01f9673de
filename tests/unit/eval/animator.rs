use super::*;

fn story() -> Story {
    Story::compassion().unwrap()
}

fn style<'a>(styles: &'a [SceneStyle], id: &str) -> &'a SceneStyle {
    styles.iter().find(|s| s.id == id).unwrap()
}

#[test]
fn start_shows_only_first_scene() {
    let s = story();
    let styles = SceneAnimator::eval_scenes(&s, Progress::START);
    assert_eq!(style(&styles, "night").opacity, 1.0);
    assert_eq!(style(&styles, "night").section, LayerTransform::default());
    assert_eq!(styles.iter().filter(|s| s.visible).count(), 1);
    assert_eq!(SceneAnimator::current_scene(&s, Progress::START), 0);
}

#[test]
fn midpoint_highlights_home() {
    let s = story();
    let p = Progress::new(0.5);
    let styles = SceneAnimator::eval_scenes(&s, p);
    assert_eq!(SceneAnimator::current_scene(&s, p), 3);
    assert_eq!(style(&styles, "home").opacity, 1.0);
    // rescue is fading out between 0.45 and 0.5
    assert_eq!(style(&styles, "rescue").opacity, 0.0);
}

#[test]
fn end_settles_final_scene() {
    let s = story();
    let styles = SceneAnimator::eval_scenes(&s, Progress::END);
    let last = style(&styles, "forever");
    assert_eq!(last.opacity, 1.0);
    assert_eq!(last.section.scale, 1.0);
    assert_eq!(SceneAnimator::current_scene(&s, Progress::END), 5);
}

#[test]
fn secondary_parameters_track_progress() {
    let s = story();
    let styles = SceneAnimator::eval_scenes(&s, Progress::new(0.075));
    assert!((style(&styles, "night").section.scale - 1.1).abs() < 1e-9);

    let styles = SceneAnimator::eval_scenes(&s, Progress::new(0.225));
    assert!((style(&styles, "discovery").content.offset_y - 50.0).abs() < 1e-9);

    let styles = SceneAnimator::eval_scenes(&s, Progress::new(0.375));
    assert!((style(&styles, "rescue").content.scale - 0.95).abs() < 1e-9);
}

#[test]
fn one_or_two_scenes_visible_everywhere() {
    let s = story();
    for i in 0..=1_000 {
        let p = Progress::new(f64::from(i) / 1_000.0);
        let visible = SceneAnimator::eval_scenes(&s, p)
            .iter()
            .filter(|s| s.visible)
            .count();
        assert!((1..=2).contains(&visible), "{visible} visible at {}", p.get());
    }
}

#[test]
fn transitions_overlap() {
    let s = story();
    let styles = SceneAnimator::eval_scenes(&s, Progress::new(0.125));
    assert!(style(&styles, "night").visible);
    assert!(style(&styles, "discovery").visible);
}

#[test]
fn indicator_marks_exactly_one_dot() {
    let s = story();
    let dots = SceneAnimator::indicator(&s, 2);
    assert_eq!(dots.len(), 6);
    assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
    assert_eq!(dots[2].label, "Rescue");
    assert_eq!((dots[2].scale, dots[2].opacity), (1.5, 1.0));
    assert_eq!((dots[0].scale, dots[0].opacity), (1.0, 0.5));
}

#[test]
fn ambient_values_follow_clock() {
    let s = story();
    let night = s.scene("night").unwrap();
    let at_start = SceneAnimator::eval_ambient(night, 0.0);
    assert_eq!(at_start.len(), 1);
    assert_eq!(at_start[0].value, -100.0);
    let halfway = SceneAnimator::eval_ambient(night, 10.0);
    assert!(halfway[0].value.abs() < 1e-9);
    assert_eq!(halfway[0].property, AmbientProperty::OffsetX);
}

fn reveal_value(values: &[AmbientValue], name: &str, property: AmbientProperty) -> f64 {
    values
        .iter()
        .find(|v| v.name == name && v.property == property)
        .map(|v| v.value)
        .unwrap()
}

#[test]
fn mount_reveal_holds_until_delay_then_settles() {
    let s = story();
    let night = s.scene("night").unwrap();
    let title = |t: f64| {
        reveal_value(
            &SceneAnimator::eval_reveal(&night.reveal, t, None),
            "title",
            AmbientProperty::Opacity,
        )
    };
    assert_eq!(title(0.0), 0.0);
    assert_eq!(title(1.5), 0.0);
    let mid = title(2.5);
    assert!(mid > 0.0 && mid < 1.0, "{mid}");
    assert_eq!(title(3.5), 1.0);
    assert_eq!(title(60.0), 1.0);
}

#[test]
fn in_view_reveal_waits_for_its_scene() {
    let s = story();
    let home = s.scene("home").unwrap();
    let caption = |t: f64, since: Option<f64>| {
        reveal_value(
            &SceneAnimator::eval_reveal(&home.reveal, t, since),
            "caption",
            AmbientProperty::Opacity,
        )
    };
    assert_eq!(caption(30.0, None), 0.0);
    assert_eq!(caption(30.0, Some(29.0)), caption(1.0, Some(0.0)));
    assert_eq!(caption(30.0, Some(30.0)), 0.0);
    assert_eq!(caption(32.0, Some(30.0)), 1.0);
}

#[test]
fn mount_reveals_ignore_scene_visibility() {
    let s = story();
    let home = s.scene("home").unwrap();
    let smile = |since: Option<f64>| {
        reveal_value(
            &SceneAnimator::eval_reveal(&home.reveal, 2.0, since),
            "smile",
            AmbientProperty::Scale,
        )
    };
    assert_eq!(smile(None), 1.0);
    assert_eq!(smile(Some(2.0)), 1.0);
}
