use crate::constants::POINTER_OFFSCREEN;
use glam::Vec2;

/// Last known pointer position in viewport coordinates.
///
/// Written by the pointer-move handler and read by the frame loop. Moving the
/// pointer never draws anything by itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::from(POINTER_OFFSCREEN),
        }
    }
}

impl PointerState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }

    #[inline]
    pub fn moved_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Only the origin edges are checked; the right/bottom edge is left to the
    /// host since pointer events stop at the viewport anyway.
    #[inline]
    pub fn on_surface(&self) -> bool {
        self.position.x > 0.0 && self.position.y > 0.0
    }
}
