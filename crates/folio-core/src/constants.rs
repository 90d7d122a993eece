// Animation tuning shared by every host. Units are CSS pixels per frame unless noted.

// Starfield
pub const STAR_COUNT: usize = 120;
pub const STAR_RADIUS_MIN: f32 = 0.2;
pub const STAR_RADIUS_MAX: f32 = 1.9;
pub const STAR_SPEED_MAX: f32 = 0.06; // per axis, symmetric around zero
pub const STAR_OPACITY_MIN: f32 = 0.22;
pub const STAR_OPACITY_MAX: f32 = 0.82;
pub const STAR_WRAP_MARGIN: f32 = 20.0;
pub const STAR_RGB: [u8; 3] = [255, 255, 255];

// Cursor trail
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 3.0;
pub const PARTICLE_SPEED_MAX: f32 = 0.25; // per axis, symmetric around zero
pub const PARTICLE_DECAY_MIN: f32 = 0.02;
pub const PARTICLE_DECAY_MAX: f32 = 0.04;
pub const PARTICLE_HUES: [u16; 2] = [260, 190]; // purple, cyan
pub const PARTICLE_SATURATION: u8 = 100;
pub const PARTICLE_LIGHTNESS: u8 = 70;
pub const PARTICLE_INITIAL_LIFE: f32 = 1.0;

// Pointer starts off-surface so nothing spawns before the first move.
pub const POINTER_OFFSCREEN: [f32; 2] = [-100.0, -100.0];

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.15; // fraction of the card that must be visible

// Navigation
pub const MOBILE_BREAKPOINT_PX: f32 = 860.0;
