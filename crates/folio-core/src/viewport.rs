use glam::Vec2;

/// Visible area of the host in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Pointer offset from the viewport centre, normalized to [-1, 1] per axis.
    ///
    /// The left/top edge maps to -1, the right/bottom edge to 1. A degenerate
    /// viewport yields zero so the published value never becomes NaN.
    pub fn parallax_offset(&self, pointer: Vec2) -> Vec2 {
        let axis = |p: f32, extent: f32| {
            if extent > 0.0 {
                ((p / extent - 0.5) * 2.0).clamp(-1.0, 1.0)
            } else {
                0.0
            }
        };
        Vec2::new(axis(pointer.x, self.width), axis(pointer.y, self.height))
    }
}
