//! Drawing surface dimensions.

use winit::dpi::PhysicalSize;

/// Square pixels of viewport area per particle.
pub const AREA_PER_PARTICLE: u64 = 9000;

/// Pixel dimensions of the drawing surface.
///
/// A `Viewport` is a plain snapshot: it is read once per frame (or once per
/// resize) and passed by value into everything that needs bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    /// Total area in square pixels.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Zero-area viewports show up while a window is minimized.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<PhysicalSize<u32>> for Viewport {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_does_not_overflow() {
        let vp = Viewport::new(100_000, 100_000);
        assert_eq!(vp.area(), 10_000_000_000);
    }

    #[test]
    fn test_from_physical_size() {
        let vp: Viewport = PhysicalSize::new(1400, 900).into();
        assert_eq!(vp, Viewport::new(1400, 900));
        assert!(!vp.is_empty());
        assert!(Viewport::new(0, 900).is_empty());
    }
}
