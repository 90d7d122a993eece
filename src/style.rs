use crate::constants::PARALLAX_DECIMALS;

/// Inline style that pins the trail canvas above everything without eating input.
pub const TRAIL_OVERLAY_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("pointer-events", "none"),
    ("z-index", "9999"),
];

/// Number formatted for a CSS custom property.
#[inline]
pub fn css_number(value: f32) -> String {
    let v = if value.is_finite() { value } else { 0.0 };
    format!("{:.*}", PARALLAX_DECIMALS, v)
}
