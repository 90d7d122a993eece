//! Drawing seam between the animators and whatever raster target hosts them.
//!
//! Animators never touch a platform API directly. They describe each frame as a
//! `clear` followed by filled circles, and the host (a 2D canvas in the browser,
//! a recorder in tests) turns that into pixels.

use glam::Vec2;
use std::fmt;

/// Base color of a shape. Opacity is carried separately in [`Fill::alpha`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgb([u8; 3]),
    Hsl {
        hue: u16,
        saturation: u8,
        lightness: u8,
    },
}

impl Color {
    /// CSS color string without an alpha component.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgb([r, g, b]) => write!(f, "rgb({}, {}, {})", r, g, b),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub color: Color,
    /// Opacity in [0, 1], applied at draw time.
    pub alpha: f32,
}

/// A raster target exclusively owned by one animator.
pub trait Surface {
    /// Erase the whole surface.
    fn clear(&mut self);
    /// Draw a filled circle. `radius` is never negative.
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill);
}

/// Surface that draws nothing; useful for stepping an animator headless.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _fill: Fill) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings_match_canvas_syntax() {
        assert_eq!(Color::Rgb([255, 255, 255]).css(), "rgb(255, 255, 255)");
        let purple = Color::Hsl {
            hue: 260,
            saturation: 100,
            lightness: 70,
        };
        assert_eq!(purple.css(), "hsl(260, 100%, 70%)");
    }
}
