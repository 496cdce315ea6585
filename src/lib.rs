//! # plexus
//!
//! A full-window animated particle network. Particles drift, bounce off the
//! window edges and get pushed around by the pointer; every pair of nearby
//! particles is joined by a line that fades with distance.
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() -> Result<(), plexus::AppError> {
//!     plexus::run(plexus::AppConfig::new().with_title("plexus"))
//! }
//! ```
//!
//! ## Core Concepts
//!
//! The animation core is independent of any window or GPU and can be driven
//! directly, which is how the tests use it:
//!
//! ```ignore
//! use plexus::prelude::*;
//!
//! let mut anim = AnimationLoop::new(Viewport::new(1400, 900), rand::thread_rng());
//! let mut list = DisplayList::new();
//! let stats = anim.frame(&PointerSnapshot::at(700.0, 450.0), &mut list);
//! assert_eq!(stats.particles, 140);
//! ```
//!
//! - [`Particle`]: one point; bounces, is pushed by the pointer, drifts.
//! - [`ParticleField`]: the particle list, sized `floor(w * h / 9000)` and
//!   rebuilt from scratch on every resize.
//! - [`PointerTracker`]: last pointer position, or absent once the pointer
//!   leaves the window.
//! - [`connector`]: links pairs whose squared distance is under
//!   `(w / 7) * (h / 7)`.
//! - [`AnimationLoop`]: clear, update and draw particles, then link them.
//!
//! Pointer and viewport are passed into each frame as plain values
//! ([`PointerSnapshot`], [`Viewport`]); nothing is global.
//!
//! Drawing goes through the [`Canvas`] trait. The window shell records into a
//! [`DisplayList`] and hands it to a wgpu renderer.

pub mod animation;
pub mod canvas;
mod config;
pub mod connector;
mod error;
pub mod field;
mod gpu;
pub mod particle;
pub mod pointer;
pub mod spawn;
pub mod time;
pub mod viewport;
mod window;

pub use animation::{AnimationLoop, FrameStats, LoopState};
pub use canvas::{Canvas, DisplayList, DrawCommand, Rgba};
pub use config::AppConfig;
pub use connector::Link;
pub use error::{AppError, GpuError};
pub use field::ParticleField;
pub use glam::Vec2;
pub use particle::Particle;
pub use pointer::{PointerSnapshot, PointerState, PointerTracker, INTERACTION_RADIUS};
pub use spawn::{RandomSource, SequenceSource};
pub use viewport::Viewport;

use winit::event_loop::{ControlFlow, EventLoop};

/// Open a window and run the animation until it is closed.
///
/// Errors raised while creating the window or GPU inside the event loop are
/// returned once the loop has exited.
pub fn run(config: AppConfig) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    // Redraws are requested once per presented frame; sleep in between.
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = window::App::new(config);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Prelude module for convenient imports.
///
/// ```ignore
/// use plexus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::{AnimationLoop, FrameStats, LoopState};
    pub use crate::canvas::{Canvas, DisplayList, DrawCommand, Rgba};
    pub use crate::config::AppConfig;
    pub use crate::field::ParticleField;
    pub use crate::particle::Particle;
    pub use crate::pointer::{PointerSnapshot, PointerState, PointerTracker};
    pub use crate::spawn::{RandomSource, SequenceSource};
    pub use crate::viewport::Viewport;
    pub use crate::Vec2;
}
