// Host-side tests for the particle background model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn generated_particles_stay_in_attribute_ranges() {
    let set = ParticleSet::new(30, seeded(7));
    assert_eq!(set.len(), 30);
    for p in set.particles() {
        assert!(p.size_px >= 2.0 && p.size_px < 6.0, "size {}", p.size_px);
        assert!(p.left_percent >= 0.0 && p.left_percent < 100.0);
        assert!(p.animation_delay_sec >= 0.0 && p.animation_delay_sec < 20.0);
        assert!(p.animation_duration_sec >= 15.0 && p.animation_duration_sec < 25.0);
    }
}

#[test]
fn both_colors_show_up() {
    let set = ParticleSet::new(30, seeded(11));
    let primary = set
        .particles()
        .iter()
        .filter(|p| p.color == ParticleColor::Primary)
        .count();
    assert!(primary > 0 && primary < 30);
}

#[test]
fn regeneration_only_on_count_change() {
    let mut set = ParticleSet::new(30, seeded(1));
    let before = set.particles().to_vec();
    assert!(!set.regenerate_if_changed(30));
    assert_eq!(set.particles(), &before[..]);

    assert!(set.regenerate_if_changed(20));
    assert_eq!(set.len(), 20);
    assert_ne!(set.particles(), &before[..20]);

    assert!(set.regenerate_if_changed(0));
    assert!(set.is_empty());
}

#[test]
fn drift_never_leaves_the_track() {
    let mut set = ParticleSet::new(30, seeded(3));
    for _ in 0..10_000 {
        set.drift_all();
        for p in set.particles() {
            assert!((0.0..=100.0).contains(&p.left_percent));
        }
    }
}

#[test]
fn drift_step_is_bounded() {
    let mut rng = seeded(5);
    let mut p = Particle::random(&mut rng);
    p.left_percent = 50.0;
    for _ in 0..1_000 {
        let before = p.left_percent;
        p.drift(&mut rng);
        assert!((p.left_percent - before).abs() <= 1.0 + 1e-9);
    }
}

#[test]
fn drift_at_edge_drops_outward_steps() {
    let mut rng = seeded(9);
    let mut p = Particle::random(&mut rng);
    p.left_percent = 0.0;
    for _ in 0..100 {
        let before = p.left_percent;
        let moved = p.drift(&mut rng);
        if !moved {
            assert_eq!(p.left_percent, before);
        }
        assert!(p.left_percent >= 0.0);
    }
}

#[test]
fn inline_style_carries_every_attribute() {
    let p = Particle {
        size_px: 3.5,
        left_percent: 42.0,
        color: ParticleColor::Accent,
        animation_delay_sec: 1.25,
        animation_duration_sec: 18.0,
    };
    let css = p.inline_style();
    assert!(css.contains("width: 3.50px"));
    assert!(css.contains("height: 3.50px"));
    assert!(css.contains("left: 42.000%"));
    assert!(css.contains("background: var(--accent-color)"));
    assert!(css.contains("animation-delay: 1.25s"));
    assert!(css.contains("animation-duration: 18.00s"));
}

#[test]
fn get_follows_particle_order() {
    let set = ParticleSet::new(6, seeded(9));
    for (i, p) in set.particles().iter().enumerate() {
        assert_eq!(set.get(i), Some(p));
    }
    assert!(set.get(set.len()).is_none());
    assert!(!set.is_empty());
    assert!(ParticleSet::new(0, seeded(9)).is_empty());
}
