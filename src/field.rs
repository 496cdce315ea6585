//! The particle collection.
//!
//! A [`ParticleField`] is always rebuilt wholesale: on startup and after
//! every resize it throws away every particle and spawns a fresh set sized
//! to the new viewport. Particles are never added or removed one at a time.

use crate::canvas::Canvas;
use crate::particle::Particle;
use crate::pointer::PointerSnapshot;
use crate::spawn::RandomSource;
use crate::viewport::{Viewport, AREA_PER_PARTICLE};

#[derive(Debug, Default, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of particles a field holds for `viewport`:
    /// `floor(width * height / 9000)`.
    pub fn particle_count(viewport: Viewport) -> usize {
        (viewport.area() / AREA_PER_PARTICLE) as usize
    }

    /// Discard all particles and spawn a new set for `viewport`.
    pub fn init(&mut self, viewport: Viewport, rng: &mut impl RandomSource) {
        let count = Self::particle_count(viewport);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::spawn(viewport, rng));
        }
    }

    /// Update then draw each particle, in list order.
    pub fn update_and_draw(
        &mut self,
        viewport: Viewport,
        pointer: &PointerSnapshot,
        canvas: &mut impl Canvas,
    ) {
        for particle in &mut self.particles {
            particle.update(viewport, pointer);
            particle.draw(canvas);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DisplayList;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_count_from_area() {
        assert_eq!(ParticleField::particle_count(Viewport::new(1400, 900)), 140);
        assert_eq!(ParticleField::particle_count(Viewport::new(1920, 1080)), 230);
        assert_eq!(ParticleField::particle_count(Viewport::new(94, 95)), 0);
        assert_eq!(ParticleField::particle_count(Viewport::new(0, 0)), 0);
    }

    #[test]
    fn test_init_spawns_inside_margins() {
        let vp = Viewport::new(1400, 900);
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::new();
        field.init(vp, &mut rng);

        assert_eq!(field.len(), 140);
        for p in field.particles() {
            assert!((1.0..3.0).contains(&p.size));
            assert!((1.0..31.0).contains(&p.density));
            assert!(p.velocity.x >= -1.0 && p.velocity.x < 1.0);
            assert!(p.velocity.y >= -1.0 && p.velocity.y < 1.0);
            assert!(p.position.x >= 2.0 * p.size && p.position.x <= 1400.0 - 2.0 * p.size);
            assert!(p.position.y >= 2.0 * p.size && p.position.y <= 900.0 - 2.0 * p.size);
        }
    }

    #[test]
    fn test_init_replaces_previous_particles() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new();
        field.init(Viewport::new(1400, 900), &mut rng);
        assert_eq!(field.len(), 140);

        field.init(Viewport::new(300, 300), &mut rng);
        assert_eq!(field.len(), 10);
        for p in field.particles() {
            assert!(p.position.x <= 300.0 && p.position.y <= 300.0);
        }
    }

    #[test]
    fn test_update_and_draw_draws_every_particle() {
        let vp = Viewport::new(600, 600);
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::new();
        field.init(vp, &mut rng);

        let mut list = DisplayList::new();
        field.update_and_draw(vp, &PointerSnapshot::absent(), &mut list);
        assert_eq!(list.circle_count(), field.len());
        assert_eq!(list.line_count(), 0);
    }
}
