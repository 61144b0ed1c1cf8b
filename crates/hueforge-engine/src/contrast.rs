//! Foreground selection via WCAG relative luminance.
//!
//! Luminance is computed in sRGB linear-light space (the WCAG definition),
//! even though every other adjustment in the engine happens in OKLCH —
//! legibility is defined by the display standard, not by perceptual space.

use hueforge_color::{Color, srgb_to_linear};

/// Luminance above which black text reads better than white.
///
/// This is the WCAG midpoint approximation for legible text over an
/// arbitrary background. It is a lookup, not a contrast-ratio optimization:
/// for some saturated mid-lightness brand colors the chosen pair can land
/// below 4.5:1. Kept as-is deliberately — see DESIGN.md.
pub const FOREGROUND_LUMINANCE_SPLIT: f64 = 0.179;

/// Compute the relative luminance of a hex color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Malformed hex degrades to black (luminance 0) rather than failing.
#[must_use]
pub fn relative_luminance(hex: &str) -> f64 {
    let (r, g, b) = Color::hex(hex).unwrap_or(Color::BLACK).to_srgb();
    let r_lin = f64::from(srgb_to_linear(r));
    let g_lin = f64::from(srgb_to_linear(g));
    let b_lin = f64::from(srgb_to_linear(b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Choose a legible foreground (pure black or pure white) for a background.
#[must_use]
pub fn select_foreground(hex: &str) -> &'static str {
    if relative_luminance(hex) > FOREGROUND_LUMINANCE_SPLIT {
        "#000000"
    } else {
        "#ffffff"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(relative_luminance("#000000"), 0.0, 0.001));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(relative_luminance("#ffffff"), 1.0, 0.001));
    }

    #[test]
    fn luminance_pure_red() {
        // Red contributes 0.2126
        assert!(approx_eq(relative_luminance("#ff0000"), 0.2126, 0.01));
    }

    #[test]
    fn luminance_pure_green() {
        // Green contributes 0.7152
        assert!(approx_eq(relative_luminance("#00ff00"), 0.7152, 0.01));
    }

    #[test]
    fn luminance_malformed_degrades_to_black() {
        assert!(approx_eq(relative_luminance("not-a-color"), 0.0, 0.001));
    }

    #[test]
    fn foreground_on_black_is_white() {
        assert_eq!(select_foreground("#000000"), "#ffffff");
    }

    #[test]
    fn foreground_on_white_is_black() {
        assert_eq!(select_foreground("#ffffff"), "#000000");
    }

    #[test]
    fn foreground_midtone_boundary() {
        // #808080 linearizes to ~0.216 luminance — just above the split.
        assert_eq!(select_foreground("#808080"), "#000000");
        // #404040 is ~0.051 — well below.
        assert_eq!(select_foreground("#404040"), "#ffffff");
    }

    #[test]
    fn foreground_saturated_brands() {
        // Vivid yellow is bright despite full saturation.
        assert_eq!(select_foreground("#ffd400"), "#000000");
        // Deep blue is dark despite full saturation.
        assert_eq!(select_foreground("#1d4ed8"), "#ffffff");
    }
}
