//! Pointer tracking.
//!
//! [`PointerTracker`] turns raw window events into the last known pointer
//! position. Once per frame the shell takes a [`PointerSnapshot`] and hands it
//! to every particle update, so nothing reads pointer state behind the
//! animation's back.

use glam::Vec2;
use winit::event::WindowEvent;

/// Radius in pixels within which the pointer displaces particles.
pub const INTERACTION_RADIUS: f32 = 150.0;

/// Where the pointer is, if it is over the window at all.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    /// Pointer is over the window at this position (physical pixels).
    Present(Vec2),
    /// No move seen yet, or the pointer left the window.
    #[default]
    Absent,
}

impl PointerState {
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            PointerState::Present(p) => Some(p),
            PointerState::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, PointerState::Present(_))
    }
}

/// Immutable per-frame view of the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSnapshot {
    pub state: PointerState,
    pub radius: f32,
}

impl PointerSnapshot {
    /// Snapshot with the pointer off-window.
    pub fn absent() -> Self {
        Self {
            state: PointerState::Absent,
            radius: INTERACTION_RADIUS,
        }
    }

    /// Snapshot with the pointer at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            state: PointerState::Present(Vec2::new(x, y)),
            radius: INTERACTION_RADIUS,
        }
    }
}

/// Tracks the pointer across window events.
#[derive(Debug)]
pub struct PointerTracker {
    state: PointerState,
    radius: f32,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            state: PointerState::Absent,
            radius: INTERACTION_RADIUS,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Record a pointer move to `(x, y)`.
    pub fn moved(&mut self, x: f32, y: f32) {
        self.state = PointerState::Present(Vec2::new(x, y));
    }

    /// The pointer left the window.
    pub fn left(&mut self) {
        self.state = PointerState::Absent;
    }

    pub fn snapshot(&self) -> PointerSnapshot {
        PointerSnapshot {
            state: self.state,
            radius: self.radius,
        }
    }

    /// Process a winit window event. Returns true if the pointer state changed.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.moved(position.x as f32, position.y as f32);
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.left();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_absent() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.state(), PointerState::Absent);
        assert_eq!(tracker.radius(), 150.0);
    }

    #[test]
    fn test_move_then_leave() {
        let mut tracker = PointerTracker::new();
        tracker.moved(10.0, 20.0);
        assert_eq!(tracker.state().position(), Some(Vec2::new(10.0, 20.0)));

        tracker.moved(30.0, 40.0);
        assert_eq!(tracker.snapshot().state, PointerState::Present(Vec2::new(30.0, 40.0)));

        tracker.left();
        assert!(!tracker.state().is_present());
        assert_eq!(tracker.snapshot(), PointerSnapshot::absent());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut tracker = PointerTracker::new();
        tracker.moved(1.0, 1.0);
        let snap = tracker.snapshot();
        tracker.left();
        assert!(snap.state.is_present());
    }
}
