//! Drifting background stars.
//!
//! A fixed population is scattered across the viewport once, then every frame
//! each star moves by its own velocity and reappears on the opposite side once
//! it drifts further than the wrap margin past an edge.

use crate::constants::*;
use crate::error::{check_range, Result};
use crate::sample;
use crate::surface::{Color, Fill, Surface};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct StarfieldParams {
    pub count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub speed_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    pub wrap_margin: f32,
    pub color: Color,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            radius_min: STAR_RADIUS_MIN,
            radius_max: STAR_RADIUS_MAX,
            speed_max: STAR_SPEED_MAX,
            opacity_min: STAR_OPACITY_MIN,
            opacity_max: STAR_OPACITY_MAX,
            wrap_margin: STAR_WRAP_MARGIN,
            color: Color::Rgb(STAR_RGB),
        }
    }
}

impl StarfieldParams {
    pub fn validate(&self) -> Result<()> {
        check_range("star radius", self.radius_min, self.radius_max)?;
        check_range("star speed", 0.0, self.speed_max)?;
        check_range("star opacity", self.opacity_min, self.opacity_max)?;
        check_range("star wrap margin", 0.0, self.wrap_margin)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Star {
    pub fn random<R: Rng>(
        rng: &mut R,
        viewport: Viewport,
        params: &StarfieldParams,
    ) -> Self {
        let s = params.speed_max;
        Self {
            position: Vec2::new(
                sample(rng, 0.0, viewport.width),
                sample(rng, 0.0, viewport.height),
            ),
            velocity: Vec2::new(sample(rng, -s, s), sample(rng, -s, s)),
            radius: sample(rng, params.radius_min, params.radius_max),
            opacity: sample(rng, params.opacity_min, params.opacity_max),
        }
    }

    /// Move one frame and wrap to the far edge if outside the margin.
    #[inline]
    pub fn advance(&mut self, viewport: Viewport, margin: f32) {
        self.position += self.velocity;
        self.position.x = wrap_axis(self.position.x, viewport.width, margin);
        self.position.y = wrap_axis(self.position.y, viewport.height, margin);
    }
}

#[inline]
fn wrap_axis(p: f32, extent: f32, margin: f32) -> f32 {
    if p < -margin {
        extent + margin
    } else if p > extent + margin {
        -margin
    } else {
        p
    }
}

pub struct Starfield {
    stars: Vec<Star>,
    viewport: Viewport,
    params: StarfieldParams,
}

impl Starfield {
    pub fn new<R: Rng>(viewport: Viewport, params: StarfieldParams, rng: &mut R) -> Self {
        let stars = (0..params.count)
            .map(|_| Star::random(rng, viewport, &params))
            .collect::<Vec<_>>();
        log::debug!(
            "[starfield] {} stars over {}x{}",
            stars.len(),
            viewport.width,
            viewport.height
        );
        Self::from_stars(viewport, params, stars)
    }

    /// Build a field from an explicit population.
    pub fn from_stars(viewport: Viewport, params: StarfieldParams, stars: Vec<Star>) -> Self {
        Self {
            stars,
            viewport,
            params,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// New wrap bounds take effect on the next frame; stars are not rescattered.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance every star without drawing.
    pub fn step(&mut self) {
        let (vp, margin) = (self.viewport, self.params.wrap_margin);
        for star in &mut self.stars {
            star.advance(vp, margin);
        }
    }

    /// Clear, advance, and draw one frame.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        let (vp, margin, color) = (self.viewport, self.params.wrap_margin, self.params.color);
        for star in &mut self.stars {
            star.advance(vp, margin);
            surface.fill_circle(
                star.position,
                star.radius,
                Fill {
                    color,
                    alpha: star.opacity,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_axis_jumps_to_opposite_margin() {
        assert_eq!(wrap_axis(-20.5, 1000.0, 20.0), 1020.0);
        assert_eq!(wrap_axis(1020.5, 1000.0, 20.0), -20.0);
        assert_eq!(wrap_axis(-20.0, 1000.0, 20.0), -20.0);
        assert_eq!(wrap_axis(1020.0, 1000.0, 20.0), 1020.0);
        assert_eq!(wrap_axis(500.0, 1000.0, 20.0), 500.0);
    }

    #[test]
    fn default_params_validate() {
        assert!(StarfieldParams::default().validate().is_ok());
        let bad = StarfieldParams {
            opacity_min: 0.9,
            opacity_max: 0.1,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
