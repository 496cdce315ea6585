//! A single drifting particle.

use glam::Vec2;

use crate::canvas::{Canvas, Rgba};
use crate::pointer::{PointerSnapshot, PointerState};
use crate::spawn::RandomSource;
use crate::viewport::Viewport;

/// Fill color of every particle: white at 80% opacity.
pub const PARTICLE_COLOR: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.8);

/// Smallest particle radius; radii are drawn from `[MIN_SIZE, MIN_SIZE + SIZE_SPAN)`.
pub const MIN_SIZE: f32 = 1.0;
pub const SIZE_SPAN: f32 = 2.0;

/// Density is drawn from `[MIN_DENSITY, MIN_DENSITY + DENSITY_SPAN)`.
pub const MIN_DENSITY: f32 = 1.0;
pub const DENSITY_SPAN: f32 = 30.0;

/// Pointer repulsion strength at `distance` from the pointer.
///
/// Falls linearly from 1 at distance 0 to 0 at `radius`, and stays 0 beyond.
pub fn repulsion_force(distance: f32, radius: f32) -> f32 {
    if distance < radius {
        (radius - distance) / radius
    } else {
        0.0
    }
}

/// A moving point in viewport space.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position in pixels.
    pub position: Vec2,
    /// Position at creation. Kept for reference, never read by the animation.
    pub base: Vec2,
    /// Pixels per frame, each component in `[-1, 1)`.
    pub velocity: Vec2,
    /// Radius in pixels.
    pub size: f32,
    pub color: Rgba,
    /// Scales how far the pointer pushes this particle.
    pub density: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: Rgba, density: f32) -> Self {
        Self {
            position,
            base: position,
            velocity,
            size,
            color,
            density,
        }
    }

    /// Sample a particle for `viewport`.
    ///
    /// Draw order is size, x, y, vx, vy, density. Positions land in
    /// `[2 * size, dimension - 2 * size)`; when a dimension is smaller than
    /// `4 * size` the same formula is applied and the result falls outside
    /// that (then empty) interval.
    pub fn spawn(viewport: Viewport, rng: &mut impl RandomSource) -> Self {
        let size = rng.span(MIN_SIZE, SIZE_SPAN);
        let margin = size * 2.0;
        let x = rng.span(margin, viewport.width_f32() - margin * 2.0);
        let y = rng.span(margin, viewport.height_f32() - margin * 2.0);
        let vx = rng.span(-1.0, 2.0);
        let vy = rng.span(-1.0, 2.0);
        let density = rng.span(MIN_DENSITY, DENSITY_SPAN);

        Self::new(Vec2::new(x, y), Vec2::new(vx, vy), size, PARTICLE_COLOR, density)
    }

    /// Advance one frame: bounce, pointer push, then drift.
    pub fn update(&mut self, viewport: Viewport, pointer: &PointerSnapshot) {
        self.reflect(viewport);
        self.repel(pointer);
        self.position += self.velocity;
    }

    /// Flip a velocity component when the position is past that edge.
    ///
    /// Only the velocity changes; a particle may sit outside the viewport
    /// for a frame before drifting back.
    fn reflect(&mut self, viewport: Viewport) {
        let (w, h) = (viewport.width_f32(), viewport.height_f32());
        if self.position.x > w || self.position.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y > h || self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    fn repel(&mut self, pointer: &PointerSnapshot) {
        let PointerState::Present(target) = pointer.state else {
            return;
        };

        let delta = target - self.position;
        let distance = delta.length();
        // Direction is undefined when the pointer sits exactly on the particle.
        if distance == 0.0 || distance >= pointer.radius {
            return;
        }

        let direction = delta / distance;
        let push = direction * repulsion_force(distance, pointer.radius) * self.density;

        if self.position.x > target.x {
            self.position.x -= push.x;
        } else {
            self.position.x += push.x;
        }
        if self.position.y > target.y {
            self.position.y -= push.y;
        } else {
            self.position.y += push.y;
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_circle(self.position, self.size, self.color);
    }
}
