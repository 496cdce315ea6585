//! Lines between nearby particles.
//!
//! Every unordered pair of particles is tested against a cutoff on squared
//! distance. Pairs under the cutoff get a white line whose opacity falls
//! off with squared distance.
//!
//! The cutoff is `(width / 7) * (height / 7)`, compared directly against
//! squared pixel distance. It is a visual tuning value rather than a squared
//! length, and is used as-is.

use glam::Vec2;

use crate::canvas::{Canvas, Rgba};
use crate::particle::Particle;
use crate::viewport::Viewport;

/// Each viewport dimension is divided by this before forming the cutoff.
pub const THRESHOLD_DIVISOR: f32 = 7.0;

/// Squared distance at which a line becomes fully transparent.
pub const OPACITY_FALLOFF: f32 = 20_000.0;

pub const LINE_WIDTH: f32 = 1.0;

/// Line color before opacity is applied.
pub const LINE_COLOR: Rgba = Rgba::WHITE;

/// A pair of particles close enough to be linked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle (always less than `b`).
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub squared_distance: f32,
    pub opacity: f32,
}

/// Squared-distance cutoff for `viewport`.
pub fn threshold(viewport: Viewport) -> f32 {
    (viewport.width_f32() / THRESHOLD_DIVISOR) * (viewport.height_f32() / THRESHOLD_DIVISOR)
}

/// Line opacity for a pair at `squared_distance`.
///
/// Never negative. There is no upper clamp, though with non-negative input
/// the value cannot exceed 1.
pub fn opacity(squared_distance: f32) -> f32 {
    (1.0 - squared_distance / OPACITY_FALLOFF).max(0.0)
}

/// Yields every linked pair `(a, b)` with `a < b`, in row-major order.
///
/// A particle is never paired with itself.
pub fn links(particles: &[Particle], viewport: Viewport) -> impl Iterator<Item = Link> + '_ {
    let cutoff = threshold(viewport);
    (0..particles.len()).flat_map(move |a| {
        let from = particles[a].position;
        particles[a + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(offset, other)| {
                let to = other.position;
                let squared_distance = from.distance_squared(to);
                (squared_distance < cutoff).then(|| Link {
                    a,
                    b: a + 1 + offset,
                    from,
                    to,
                    squared_distance,
                    opacity: opacity(squared_distance),
                })
            })
    })
}

/// Stroke a line for every linked pair. Returns the number of lines drawn.
pub fn connect(particles: &[Particle], viewport: Viewport, canvas: &mut impl Canvas) -> usize {
    let mut drawn = 0;
    for link in links(particles, viewport) {
        canvas.stroke_line(link.from, link.to, LINE_WIDTH, LINE_COLOR.with_alpha(link.opacity));
        drawn += 1;
    }
    drawn
}
