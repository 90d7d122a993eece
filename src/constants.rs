// Hooks the page markup provides, and the CSS variables this crate writes.

// Drawing surfaces
pub const STARFIELD_CANVAS_ID: &str = "stars";
pub const TRAIL_CANVAS_ID: &str = "cursor-trail";

// Card grid; cards are rendered here when the container is empty
pub const WORK_GRID_ID: &str = "work-grid";
pub const CARD_SELECTOR: &str = ".card";

// Mobile navigation
pub const MENU_BUTTON_SELECTOR: &str = ".menuBtn";
pub const MOBILE_MENU_SELECTOR: &str = ".mobileMenu";

// Parallax offsets published on <html>, each in [-1, 1]
pub const MOUSE_X_VAR: &str = "--mouse-x";
pub const MOUSE_Y_VAR: &str = "--mouse-y";
pub const PARALLAX_DECIMALS: usize = 4;

// Host events
pub const EV_RESIZE: &str = "resize";
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_CLICK: &str = "click";
