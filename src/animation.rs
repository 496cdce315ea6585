//! The per-frame driver.
//!
//! ```ignore
//! let mut anim = AnimationLoop::new(Viewport::new(1400, 900), rand::thread_rng());
//! let mut list = DisplayList::new();
//!
//! // once per display refresh
//! let stats = anim.frame(&pointer.snapshot(), &mut list);
//!
//! // on resize
//! anim.resize(Viewport::new(800, 600));
//! ```

use crate::canvas::Canvas;
use crate::connector;
use crate::field::ParticleField;
use crate::pointer::PointerSnapshot;
use crate::spawn::RandomSource;
use crate::viewport::Viewport;

/// Lifecycle of the loop. `Initializing` is only observable while the field
/// is being rebuilt; every public method returns with the loop `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Initializing,
    Running,
}

/// What one frame drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
}

pub struct AnimationLoop<R: RandomSource> {
    field: ParticleField,
    viewport: Viewport,
    state: LoopState,
    rng: R,
    frames: u64,
    rebuilds: u64,
}

impl<R: RandomSource> AnimationLoop<R> {
    /// Build the field for `viewport` and start running.
    pub fn new(viewport: Viewport, rng: R) -> Self {
        let mut anim = Self {
            field: ParticleField::new(),
            viewport,
            state: LoopState::Initializing,
            rng,
            frames: 0,
            rebuilds: 0,
        };
        anim.rebuild();
        anim
    }

    /// Adopt a new viewport and rebuild the field from scratch.
    pub fn resize(&mut self, viewport: Viewport) {
        self.state = LoopState::Initializing;
        self.viewport = viewport;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.field.init(self.viewport, &mut self.rng);
        self.rebuilds += 1;
        self.state = LoopState::Running;
        log::debug!(
            "particle field built: {}x{} -> {} particles",
            self.viewport.width,
            self.viewport.height,
            self.field.len()
        );
    }

    /// Render one frame: clear, update and draw every particle, then link
    /// nearby pairs.
    pub fn frame(&mut self, pointer: &PointerSnapshot, canvas: &mut impl Canvas) -> FrameStats {
        canvas.clear(self.viewport);
        self.field.update_and_draw(self.viewport, pointer, canvas);
        let links = connector::connect(self.field.particles(), self.viewport, canvas);
        self.frames += 1;

        FrameStats {
            particles: self.field.len(),
            links,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Frames rendered since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Times the field has been built, including the initial build.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}
