//! Cursor-following particle trail.
//!
//! One particle is born at the pointer every frame the pointer is on the
//! surface. Each particle drifts, loses `decay` life per frame, and is drawn
//! with radius `size * life` and opacity `life` until its life runs out.

use crate::constants::*;
use crate::error::{check_range, FolioError, Result};
use crate::pointer::PointerState;
use crate::sample;
use crate::surface::{Color, Fill, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct TrailParams {
    pub size_min: f32,
    pub size_max: f32,
    pub speed_max: f32,
    pub decay_min: f32,
    pub decay_max: f32,
    /// Picked with equal probability for each new particle.
    pub hues: [u16; 2],
    pub saturation: u8,
    pub lightness: u8,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            size_min: PARTICLE_SIZE_MIN,
            size_max: PARTICLE_SIZE_MAX,
            speed_max: PARTICLE_SPEED_MAX,
            decay_min: PARTICLE_DECAY_MIN,
            decay_max: PARTICLE_DECAY_MAX,
            hues: PARTICLE_HUES,
            saturation: PARTICLE_SATURATION,
            lightness: PARTICLE_LIGHTNESS,
        }
    }
}

impl TrailParams {
    pub fn validate(&self) -> Result<()> {
        check_range("particle size", self.size_min, self.size_max)?;
        check_range("particle speed", 0.0, self.speed_max)?;
        check_range("particle decay", self.decay_min, self.decay_max)?;
        if self.decay_min <= 0.0 {
            return Err(FolioError::NonPositiveDecay(self.decay_min));
        }
        Ok(())
    }

    fn color_for(&self, hue: u16) -> Color {
        Color::Hsl {
            hue,
            saturation: self.saturation,
            lightness: self.lightness,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Color,
    pub life: f32,
    pub decay: f32,
}

impl Particle {
    pub fn spawn<R: Rng>(rng: &mut R, at: Vec2, params: &TrailParams) -> Self {
        let hue = if rng.gen_bool(0.5) {
            params.hues[0]
        } else {
            params.hues[1]
        };
        let s = params.speed_max;
        Self {
            position: at,
            velocity: Vec2::new(sample(rng, -s, s), sample(rng, -s, s)),
            size: sample(rng, params.size_min, params.size_max),
            color: params.color_for(hue),
            life: PARTICLE_INITIAL_LIFE,
            decay: sample(rng, params.decay_min, params.decay_max),
        }
    }

    /// Advance one frame. Returns `false` once the particle has expired.
    #[inline]
    pub fn tick(&mut self) -> bool {
        self.position += self.velocity;
        self.life -= self.decay;
        self.life > 0.0
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * self.life
    }

    #[inline]
    pub fn fill(&self) -> Fill {
        Fill {
            color: self.color,
            alpha: self.life,
        }
    }
}

#[derive(Default)]
pub struct ParticleTrail {
    particles: Vec<Particle>,
    params: TrailParams,
    spawned: u64,
}

impl ParticleTrail {
    pub fn new(params: TrailParams) -> Self {
        Self {
            particles: Vec::new(),
            params,
            spawned: 0,
        }
    }

    /// Live particles in insertion order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles created since construction, expired ones included.
    pub fn spawned_total(&self) -> u64 {
        self.spawned
    }

    /// Clear, maybe spawn at the pointer, then advance, cull and draw.
    pub fn frame<R: Rng>(
        &mut self,
        rng: &mut R,
        pointer: PointerState,
        surface: &mut dyn Surface,
    ) {
        surface.clear();
        if pointer.on_surface() {
            self.particles
                .push(Particle::spawn(rng, pointer.position, &self.params));
            self.spawned += 1;
        }
        // retain_mut keeps insertion order and visits each entry exactly once
        self.particles.retain_mut(|p| {
            if !p.tick() {
                return false;
            }
            surface.fill_circle(p.position, p.radius(), p.fill());
            true
        });
    }
}
