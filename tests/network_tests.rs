//! Integration tests for the animation core.
//!
//! These drive [`AnimationLoop`] and its parts through the public API,
//! recording into a [`DisplayList`] instead of a real window.

use plexus::{connector, Link, INTERACTION_RADIUS};
use plexus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(viewport: Viewport, seed: u64) -> AnimationLoop<StdRng> {
    AnimationLoop::new(viewport, StdRng::seed_from_u64(seed))
}

// ============================================================================
// Field sizing
// ============================================================================

#[test]
fn test_count_for_1400_by_900() {
    let anim = seeded(Viewport::new(1400, 900), 1);
    assert_eq!(anim.field().len(), 140);
}

#[test]
fn test_resize_discards_old_particles() {
    let mut anim = seeded(Viewport::new(1400, 900), 2);
    let before: Vec<Vec2> = anim.field().particles().iter().map(|p| p.position).collect();

    anim.resize(Viewport::new(640, 480));
    assert_eq!(anim.state(), LoopState::Running);
    assert_eq!(anim.field().len(), 640 * 480 / 9000);

    // Fresh particles all spawn inside the new, smaller viewport.
    for p in anim.field().particles() {
        assert!(p.position.x < 640.0 && p.position.y < 480.0);
    }
    let after: Vec<Vec2> = anim.field().particles().iter().map(|p| p.position).collect();
    assert_ne!(before[..after.len()], after[..]);
}

#[test]
fn test_repeated_resizes_track_dimensions() {
    let mut anim = seeded(Viewport::new(100, 100), 3);
    for (w, h) in [(1920, 1080), (800, 600), (3000, 2000), (90, 100)] {
        anim.resize(Viewport::new(w, h));
        assert_eq!(
            anim.field().len(),
            ParticleField::particle_count(Viewport::new(w, h))
        );
    }
    assert_eq!(anim.field().len(), 1);
}

#[test]
fn test_minimize_empties_field_until_restore() {
    let mut anim = seeded(Viewport::new(1400, 900), 12);
    let mut list = DisplayList::new();

    anim.resize(Viewport::new(0, 0));
    assert!(anim.field().is_empty());
    let stats = anim.frame(&PointerSnapshot::at(10.0, 10.0), &mut list);
    assert_eq!(stats, FrameStats::default());

    anim.resize(Viewport::new(1400, 900));
    assert_eq!(anim.field().len(), 140);
    assert_eq!(anim.rebuilds(), 3);
}

// ============================================================================
// Particle motion
// ============================================================================

#[test]
fn test_velocity_flips_only_on_crossing() {
    let vp = Viewport::new(800, 600);
    let mut anim = seeded(vp, 4);
    let pointer = PointerSnapshot::absent();
    let mut list = DisplayList::new();

    for _ in 0..2000 {
        let before: Vec<(Vec2, Vec2)> = anim
            .field()
            .particles()
            .iter()
            .map(|p| (p.position, p.velocity))
            .collect();

        anim.frame(&pointer, &mut list);

        for ((pos, vel), p) in before.iter().zip(anim.field().particles()) {
            let out_x = pos.x > 800.0 || pos.x < 0.0;
            let out_y = pos.y > 600.0 || pos.y < 0.0;
            assert_eq!(p.velocity.x == -vel.x && vel.x != 0.0, out_x);
            assert_eq!(p.velocity.y == -vel.y && vel.y != 0.0, out_y);
        }
    }
}

#[test]
fn test_absent_pointer_means_pure_drift() {
    let vp = Viewport::new(1000, 1000);
    let mut anim = seeded(vp, 5);
    let mut list = DisplayList::new();

    let before: Vec<Particle> = anim.field().particles().to_vec();
    anim.frame(&PointerSnapshot::absent(), &mut list);

    // Freshly spawned particles are inside, so no reflection either.
    for (old, new) in before.iter().zip(anim.field().particles()) {
        assert_eq!(new.position, old.position + old.velocity);
    }
}

#[test]
fn test_pointer_only_affects_particles_within_radius() {
    let vp = Viewport::new(1000, 1000);
    let mut anim = seeded(vp, 6);
    let mut list = DisplayList::new();
    let pointer = PointerSnapshot::at(500.0, 500.0);

    let before: Vec<Particle> = anim.field().particles().to_vec();
    anim.frame(&pointer, &mut list);

    let target = Vec2::new(500.0, 500.0);
    for (old, new) in before.iter().zip(anim.field().particles()) {
        let drift_only = old.position + old.velocity;
        if old.position.distance(target) >= INTERACTION_RADIUS {
            assert_eq!(new.position, drift_only);
        }
    }
}

#[test]
fn test_pointer_ahead_of_particle_pulls_it_forward() {
    // Up and left of the pointer on both axes, so both push components are added.
    let vp = Viewport::new(800, 600);
    let mut particle = Particle::new(
        Vec2::new(100.0, 100.0),
        Vec2::ZERO,
        2.0,
        Rgba::WHITE,
        10.0,
    );
    particle.update(vp, &PointerSnapshot::at(175.0, 175.0));

    assert!((particle.position.x - 102.071).abs() < 1e-3);
    assert!((particle.position.y - 102.071).abs() < 1e-3);
}

#[test]
fn test_base_position_is_kept() {
    let mut anim = seeded(Viewport::new(500, 500), 7);
    let bases: Vec<Vec2> = anim.field().particles().iter().map(|p| p.base).collect();
    let mut list = DisplayList::new();
    for _ in 0..10 {
        anim.frame(&PointerSnapshot::at(250.0, 250.0), &mut list);
    }
    let now: Vec<Vec2> = anim.field().particles().iter().map(|p| p.base).collect();
    assert_eq!(bases, now);
}

// ============================================================================
// Links
// ============================================================================

#[test]
fn test_lines_match_pairs_under_threshold() {
    let vp = Viewport::new(1400, 900);
    let mut anim = seeded(vp, 8);
    let mut list = DisplayList::new();
    let stats = anim.frame(&PointerSnapshot::absent(), &mut list);

    let cutoff = connector::threshold(vp);
    let particles = anim.field().particles();
    let mut expected = 0;
    for a in 0..particles.len() {
        for b in a + 1..particles.len() {
            if particles[a].position.distance_squared(particles[b].position) < cutoff {
                expected += 1;
            }
        }
    }

    assert_eq!(stats.links, expected);
    assert_eq!(list.line_count(), expected);
    assert_eq!(list.circle_count(), 140);
}

#[test]
fn test_line_opacity_never_negative_and_decreasing() {
    let vp = Viewport::new(1400, 900);
    let mut anim = seeded(vp, 9);
    let mut list = DisplayList::new();
    anim.frame(&PointerSnapshot::absent(), &mut list);

    let mut links: Vec<Link> = connector::links(anim.field().particles(), vp).collect();
    links.sort_by(|a, b| a.squared_distance.total_cmp(&b.squared_distance));
    for link in &links {
        assert!(link.opacity >= 0.0);
        assert!(link.opacity <= 1.0);
    }
    for pair in links.windows(2) {
        assert!(pair[0].opacity >= pair[1].opacity);
    }

    for (_, _, width, color) in list.lines() {
        assert_eq!(width, 1.0);
        assert!(color.a >= 0.0);
    }
}

#[test]
fn test_single_particle_draws_no_lines() {
    // 95 * 95 = 9025 square pixels: exactly one particle.
    let mut anim = seeded(Viewport::new(95, 95), 10);
    let mut list = DisplayList::new();
    let stats = anim.frame(&PointerSnapshot::absent(), &mut list);
    assert_eq!(stats, FrameStats { particles: 1, links: 0 });
}

#[test]
fn test_empty_viewport_draws_nothing() {
    let mut anim = seeded(Viewport::new(0, 0), 11);
    let mut list = DisplayList::new();
    let stats = anim.frame(&PointerSnapshot::absent(), &mut list);
    assert_eq!(stats, FrameStats::default());
    assert!(list.is_empty());
}

// ============================================================================
// Deterministic spawning
// ============================================================================

#[test]
fn test_sequence_source_spawns_identically() {
    let vp = Viewport::new(600, 600);
    let samples = vec![0.1, 0.9, 0.3, 0.7, 0.5, 0.2, 0.8];
    let a = AnimationLoop::new(vp, SequenceSource::new(samples.clone()));
    let b = AnimationLoop::new(vp, SequenceSource::new(samples));
    assert_eq!(a.field().particles(), b.field().particles());
}

#[test]
fn test_tiny_viewport_spawns_without_panicking() {
    // Narrower than 4 * size: the spawn interval is empty but the formula
    // still produces a finite position.
    let mut field = ParticleField::new();
    let mut src = SequenceSource::new(vec![0.99, 0.5, 0.5, 0.5, 0.5, 0.5]);
    field.init(Viewport::new(3, 9000), &mut src);
    assert_eq!(field.len(), 3);
    for p in field.particles() {
        assert!(p.position.is_finite());
        assert!(p.position.x > 3.0 - 2.0 * p.size);
    }
}
