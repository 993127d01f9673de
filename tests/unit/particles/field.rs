use super::*;
use crate::{animation::ease::Ease, story::model::Spread};

fn rain() -> ParticleFieldDef {
    ParticleFieldDef {
        name: "rain".to_string(),
        host_scene: None,
        count: 50,
        x_pct: Spread::Uniform {
            min: 0.0,
            max: 100.0,
        },
        duration_s: Spread::Uniform { min: 1.0, max: 2.0 },
        delay_s: Spread::Uniform { min: 0.0, max: 2.0 },
        y: vec![0.0, 100.0],
        opacity: vec![0.0, 0.6, 0.0],
        ease: Ease::Linear,
    }
}

fn hearts() -> ParticleFieldDef {
    ParticleFieldDef {
        name: "hearts".to_string(),
        host_scene: Some("healing".to_string()),
        count: 8,
        x_pct: Spread::Step {
            start: 10.0,
            step: 12.0,
        },
        duration_s: Spread::Fixed(3.0),
        delay_s: Spread::Step {
            start: 0.0,
            step: 0.3,
        },
        y: vec![0.0, -100.0, -200.0],
        opacity: vec![0.0, 1.0, 0.0],
        ease: Ease::Linear,
    }
}

#[test]
fn randomized_parameters_stay_in_range() {
    let field = ParticleField::from_def(&rain(), 0).unwrap();
    assert_eq!(field.particles().len(), 50);
    for p in field.particles() {
        assert!((0.0..100.0).contains(&p.x_pct));
        assert!((1.0..2.0).contains(&p.duration_s()));
        assert!((0.0..2.0).contains(&p.delay_s()));
    }
}

#[test]
fn same_seed_same_field() {
    let a = ParticleField::from_def(&rain(), 42).unwrap();
    let b = ParticleField::from_def(&rain(), 42).unwrap();
    let c = ParticleField::from_def(&rain(), 43).unwrap();
    assert_eq!(a.particles(), b.particles());
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn sampling_never_rerandomizes() {
    let field = ParticleField::from_def(&rain(), 5).unwrap();
    let a = field.sample(3.7);
    let b = field.sample(3.7);
    assert_eq!(a, b);
    let xs: Vec<f64> = field.sample(100.0).particles.iter().map(|p| p.x_pct).collect();
    let xs0: Vec<f64> = a.particles.iter().map(|p| p.x_pct).collect();
    assert_eq!(xs, xs0);
}

#[test]
fn stepped_hearts_are_staggered() {
    let field = ParticleField::from_def(&hearts(), 0).unwrap();
    let xs: Vec<f64> = field.particles().iter().map(|p| p.x_pct).collect();
    assert_eq!(xs, vec![10.0, 22.0, 34.0, 46.0, 58.0, 70.0, 82.0, 94.0]);
    assert!((field.particles()[7].delay_s() - 2.1).abs() < 1e-9);
    assert_eq!(field.host_scene(), Some("healing"));
}

#[test]
fn particles_loop_forever() {
    let field = ParticleField::from_def(&hearts(), 0).unwrap();
    // First heart: no delay, 3 s cycle.
    let mid = field.sample(1.5).particles[0];
    assert!((mid.y + 100.0).abs() < 1e-9);
    assert!((mid.opacity - 1.0).abs() < 1e-9);
    assert_eq!(mid.cycle, 0);

    let restarted = field.sample(3.0).particles[0];
    assert_eq!(restarted.y, 0.0);
    assert_eq!(restarted.cycle, 1);

    let later = field.sample(301.5).particles[0];
    assert!((later.y - mid.y).abs() < 1e-6);
    assert_eq!(later.cycle, 100);
}

#[test]
fn delayed_particles_wait_at_first_keyframe() {
    let field = ParticleField::from_def(&hearts(), 0).unwrap();
    let last = field.sample(1.0).particles[7];
    assert_eq!(last.y, 0.0);
    assert_eq!(last.opacity, 0.0);
}

#[test]
fn invalid_definition_is_rejected() {
    let mut def = rain();
    def.duration_s = Spread::Fixed(0.0);
    assert!(ParticleField::from_def(&def, 0).is_err());
}

#[test]
fn position_scales_percent_to_width() {
    let state = ParticleState {
        x_pct: 25.0,
        y: -40.0,
        opacity: 1.0,
        cycle: 0,
    };
    assert_eq!(state.position(800.0), crate::foundation::core::Point::new(200.0, -40.0));
}
