//! Window shell settings.
//!
//! These only shape the native window. The animation's own tuning values
//! (particle density, interaction radius, link cutoff) are constants in
//! their modules.

use crate::canvas::Rgba;

/// Settings for [`run`](crate::run), built with method chaining.
///
/// ```ignore
/// plexus::run(
///     AppConfig::new()
///         .with_title("backdrop")
///         .with_inner_size(1400, 900)
///         .with_fps_in_title(true),
/// )?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    /// Initial logical window size.
    pub inner_size: (u32, u32),
    /// Color behind the particles.
    pub background: Rgba,
    /// Append particle count and FPS to the window title.
    pub fps_in_title: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "plexus".to_string(),
            inner_size: (1280, 720),
            background: Rgba::new(0.02, 0.02, 0.05, 1.0),
            fps_in_title: false,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_inner_size(mut self, width: u32, height: u32) -> Self {
        self.inner_size = (width, height);
        self
    }

    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    pub fn with_fps_in_title(mut self, enabled: bool) -> Self {
        self.fps_in_title = enabled;
        self
    }
}
