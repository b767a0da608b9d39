//! Pointer state shared between input handlers and the per-frame loop.
//!
//! The mousemove handler only records coordinates here; the frame loop reads
//! them once per display refresh. Neither side owns the other, so the state is
//! passed explicitly to both.

use glam::DVec2;

/// Last known pointer location in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: DVec2,
}

impl PointerState {
    pub fn record(&mut self, x: f64, y: f64) {
        self.position = DVec2::new(x, y);
    }

    /// Top-left corner that centres an element of `size` on the pointer.
    pub fn centered_origin(&self, size: DVec2) -> DVec2 {
        self.position - size * 0.5
    }
}
