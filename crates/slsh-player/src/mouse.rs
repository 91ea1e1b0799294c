//! Absolute cursor positions to per-update deltas.

use glam::Vec2;

/// Turns a stream of absolute cursor positions into relative motion.
///
/// The first sample only establishes the reference position and yields a zero
/// delta, so a camera does not jump when tracking starts.
#[derive(Debug, Clone, Default)]
pub struct MouseTracker {
    prev: Option<Vec2>,
    delta: Vec2,
}

impl MouseTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker whose reference position is already known.
    #[must_use]
    pub fn starting_at(position: Vec2) -> Self {
        Self {
            prev: Some(position),
            delta: Vec2::ZERO,
        }
    }

    /// Record the cursor position for this update and return the motion since
    /// the previous one.
    pub fn handle_position(&mut self, position: Vec2) -> Vec2 {
        self.delta = match self.prev {
            Some(prev) => position - prev,
            None => Vec2::ZERO,
        };
        self.prev = Some(position);
        self.delta
    }

    /// Motion recorded by the last [`handle_position`](Self::handle_position).
    pub fn delta(&self) -> Vec2 {
        self.delta
    }
}
