//! Host-independent animation state for the folio page.
//!
//! Nothing here touches a browser API. The web front-end feeds viewport sizes,
//! pointer positions and intersection reports in, and supplies a [`Surface`]
//! to draw on and a [`FrameScheduler`] to drive the loops.

pub mod constants;
pub mod content;
pub mod error;
pub mod mount;
pub mod nav;
pub mod pointer;
pub mod reveal;
pub mod schedule;
pub mod starfield;
pub mod surface;
pub mod trail;
pub mod viewport;

pub use constants::*;
pub use content::*;
pub use error::*;
pub use mount::*;
pub use nav::*;
pub use pointer::*;
pub use reveal::*;
pub use schedule::*;
pub use starfield::*;
pub use surface::*;
pub use trail::*;
pub use viewport::*;

use rand::Rng;

/// Bundle of every animator's parameters.
#[derive(Clone, Debug, Default)]
pub struct FolioConfig {
    pub starfield: StarfieldParams,
    pub trail: TrailParams,
    pub reveal: RevealParams,
}

impl FolioConfig {
    pub fn validate(&self) -> Result<()> {
        self.starfield.validate()?;
        self.trail.validate()?;
        self.reveal.validate()
    }
}

/// Uniform sample in `[min, max)`, or `min` when the range is empty.
#[inline]
pub(crate) fn sample<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
