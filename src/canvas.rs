//! 2D immediate-mode drawing surface.
//!
//! The animation core never talks to the GPU directly. It draws through the
//! [`Canvas`] trait, and the window shell records those calls into a
//! [`DisplayList`] which the renderer then tessellates and uploads.
//!
//! ```ignore
//! let mut list = DisplayList::new();
//! list.clear(viewport);
//! list.fill_circle(Vec2::new(10.0, 10.0), 2.0, Rgba::WHITE);
//! assert_eq!(list.circle_count(), 1);
//! ```

use glam::Vec2;

use crate::viewport::Viewport;

/// Straight RGBA color, each channel in `0.0..=1.0`.
///
/// Alpha is not clamped on construction: the connector can produce values
/// slightly above 1 for very close pairs, and clamping is left to whoever
/// finally rasterizes the color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A drawing surface the animation renders into.
pub trait Canvas {
    /// Erase everything inside `area`.
    fn clear(&mut self, area: Viewport);

    /// Fill a circle of `radius` pixels centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight segment of the given width.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// A [`Canvas`] that records draw calls in order.
///
/// Clearing discards everything recorded so far, so after a frame the list
/// holds exactly what is on screen.
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    area: Option<Viewport>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Area given to the most recent `clear`, if any.
    pub fn area(&self) -> Option<Viewport> {
        self.area
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Iterate recorded lines as `(from, to, width, color)`.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => Some((from, to, width, color)),
            _ => None,
        })
    }
}

impl Canvas for DisplayList {
    fn clear(&mut self, area: Viewport) {
        self.commands.clear();
        self.area = Some(area);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}
