use crate::constants::MOBILE_BREAKPOINT_PX;

pub const MENU_OPEN_CLASS: &str = "open";

/// Open/closed state of the collapsible mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// The desktop layout has no collapsed menu, so widening past the
    /// breakpoint closes it. Returns `true` if the state changed.
    pub fn on_resize(&mut self, viewport_width: f32) -> bool {
        if viewport_width > MOBILE_BREAKPOINT_PX {
            self.close()
        } else {
            false
        }
    }
}
