use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::animation::AnimationLoop;
use crate::canvas::DisplayList;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::gpu::Renderer;
use crate::pointer::PointerTracker;
use crate::time::FrameClock;
use crate::viewport::Viewport;

/// Everything that only exists once the window is up.
struct Running {
    window: Arc<Window>,
    renderer: Renderer,
    animation: AnimationLoop<rand::rngs::ThreadRng>,
}

/// winit application driving one animation frame per redraw.
pub struct App {
    config: AppConfig,
    running: Option<Running>,
    pointer: PointerTracker,
    display_list: DisplayList,
    clock: FrameClock,
    error: Option<AppError>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            running: None,
            pointer: PointerTracker::new(),
            display_list: DisplayList::new(),
            clock: FrameClock::new(),
            error: None,
        }
    }

    /// Error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<AppError> {
        self.error.take()
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<Running, AppError> {
        let (width, height) = self.config.inner_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = pollster::block_on(Renderer::new(window.clone(), self.config.background))?;

        let viewport = renderer.viewport();
        let animation = AnimationLoop::new(viewport, rand::thread_rng());
        log::info!(
            "window {}x{}: {} particles",
            viewport.width,
            viewport.height,
            animation.field().len()
        );

        Ok(Running {
            window,
            renderer,
            animation,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        self.error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(running) = &mut self.running else {
            return;
        };

        let stats = running
            .animation
            .frame(&self.pointer.snapshot(), &mut self.display_list);

        match running.renderer.render(&self.display_list) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                running.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("skipping frame: {:?}", e),
        }

        if self.clock.tick() {
            log::debug!(
                "frame {}: {} particles, {} links, {:.1} fps",
                self.clock.frame(),
                stats.particles,
                stats.links,
                self.clock.fps()
            );
            if self.config.fps_in_title {
                running.window.set_title(&format!(
                    "{} - {} particles - {:.0} fps",
                    self.config.title,
                    stats.particles,
                    self.clock.fps()
                ));
            }
        }

        running.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(running) => {
                running.window.request_redraw();
                self.running = Some(running);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.pointer.handle_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                let viewport = Viewport::from(physical_size);
                if let Some(running) = &mut self.running {
                    // The surface keeps its last size while minimized.
                    running.renderer.resize(viewport);
                    running.animation.resize(viewport);
                    log::info!(
                        "resized to {}x{}: {} particles",
                        viewport.width,
                        viewport.height,
                        running.animation.field().len()
                    );
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
