//! One-shot scroll reveal for project cards.
//!
//! A card starts `Hidden` and becomes `Revealed` the first time the host
//! reports it intersecting the viewport. `Revealed` is terminal: the caller is
//! told to stop observing, and later reports are ignored.

use crate::constants::REVEAL_THRESHOLD;
use crate::error::{FolioError, Result};

pub const CARD_CLASS: &str = "card";
pub const REVEALED_CLASS: &str = "revealed";

#[derive(Clone, Debug)]
pub struct RevealParams {
    /// Fraction of the card that must be visible, in [0, 1].
    pub threshold: f64,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
        }
    }
}

impl RevealParams {
    pub fn validate(&self) -> Result<()> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(FolioError::InvalidThreshold(self.threshold))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

/// What the observer should do after an intersection report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed; keep observing (or already detached).
    Unchanged,
    /// The card just became visible; stop observing it.
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

impl SlideDirection {
    /// Cards alternate sides: even positions come in from the left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            SlideDirection::Left
        } else {
            SlideDirection::Right
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            SlideDirection::Left => "slide-left",
            SlideDirection::Right => "slide-right",
        }
    }
}

#[derive(Clone, Debug)]
pub struct RevealCard {
    index: usize,
    visibility: Visibility,
}

impl RevealCard {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            visibility: Visibility::Hidden,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_revealed(&self) -> bool {
        self.visibility == Visibility::Revealed
    }

    pub fn slide(&self) -> SlideDirection {
        SlideDirection::for_index(self.index)
    }

    /// Feed one intersection report.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Transition {
        match (self.visibility, is_intersecting) {
            (Visibility::Hidden, true) => {
                self.visibility = Visibility::Revealed;
                log::debug!("[reveal] card {} revealed", self.index);
                Transition::Revealed
            }
            _ => Transition::Unchanged,
        }
    }

    /// Full `class` attribute for the card element.
    pub fn class_name(&self) -> String {
        let mut class = format!("{} {}", CARD_CLASS, self.slide().class());
        if self.is_revealed() {
            class.push(' ');
            class.push_str(REVEALED_CLASS);
        }
        class
    }
}
