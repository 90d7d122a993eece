// Host-side tests for the page hooks and styling helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use style::*;

#[test]
fn css_variables_are_custom_properties() {
    for var in [MOUSE_X_VAR, MOUSE_Y_VAR] {
        assert!(var.starts_with("--"), "{var} is not a custom property");
    }
    assert_ne!(MOUSE_X_VAR, MOUSE_Y_VAR);
}

#[test]
fn element_hooks_are_well_formed() {
    for id in [STARFIELD_CANVAS_ID, TRAIL_CANVAS_ID, WORK_GRID_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "ids are passed without '#': {id}");
    }
    assert_ne!(STARFIELD_CANVAS_ID, TRAIL_CANVAS_ID);
    for sel in [CARD_SELECTOR, MENU_BUTTON_SELECTOR, MOBILE_MENU_SELECTOR] {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
    }
}

#[test]
fn css_number_uses_fixed_precision() {
    assert_eq!(css_number(0.0), "0.0000");
    assert_eq!(css_number(-1.0), "-1.0000");
    assert_eq!(css_number(0.25), "0.2500");
    assert_eq!(css_number(1.0 / 3.0), "0.3333");
}

#[test]
fn css_number_never_emits_nan() {
    assert_eq!(css_number(f32::NAN), "0.0000");
    assert_eq!(css_number(f32::INFINITY), "0.0000");
}

#[test]
fn trail_overlay_ignores_pointer_and_sits_on_top() {
    let get = |prop: &str| {
        TRAIL_OVERLAY_STYLE
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| *v)
    };
    assert_eq!(get("pointer-events"), Some("none"));
    assert_eq!(get("position"), Some("fixed"));
    assert_eq!(get("top"), Some("0"));
    assert_eq!(get("left"), Some("0"));
    let z: i32 = get("z-index").unwrap().parse().unwrap();
    assert!(z >= 9999);
}
