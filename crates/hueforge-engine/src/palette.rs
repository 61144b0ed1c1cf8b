//! Theme composition — the bridge from resolved hues to concrete tokens.
//!
//! Takes the five hues from [`crate::harmony`] plus the three adjustment
//! levels and composes one full [`ThemeTokens`] set with properly
//! constrained lightness and chroma per role. Light and dark are *not*
//! inversions of each other: each variant has its own lightness anchors,
//! while both consume the same hues and chroma scaling — that shared half
//! is what keeps brand identity consistent across modes.

use hueforge_color::Color;

use crate::contrast::select_foreground;
use crate::tokens::ThemeTokens;

/// Which half of the theme pair is being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Bright surfaces, dark text.
    Light,
    /// Dark surfaces, light text.
    Dark,
}

/// The three user-facing adjustment levels, each in `[-5, 5]`.
///
/// Range checking is the boundary layer's job; the engine only maps levels
/// to multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjustments {
    /// Chroma scaling: -5 (muted) to 5 (vivid).
    pub saturation: i8,
    /// Surface/text separation: -5 (flat) to 5 (punchy).
    pub contrast: i8,
    /// Overall lightness shift: -5 (dimmer) to 5 (brighter).
    pub brightness: i8,
}

impl Adjustments {
    /// Chroma multiplier: level ±5 swings saturation by ±60%.
    fn saturation_multiplier(self) -> f32 {
        f32::from(self.saturation).mul_add(0.12, 1.0)
    }

    /// Absolute lightness shift applied in the variant's "up" direction.
    fn brightness_shift(self) -> f32 {
        f32::from(self.brightness) * 0.025
    }

    /// Lightness shift pushing surfaces and text apart.
    fn contrast_shift(self) -> f32 {
        f32::from(self.contrast) * 0.02
    }
}

/// Per-variant lightness anchors.
///
/// Light sits near the top of the range, dark near the bottom. Dark brand
/// and status anchors carry a +0.08 boost over their light counterparts so
/// saturated colors stay perceptually vivid on a dark surface instead of
/// reading as desaturated.
struct Anchors {
    bg: f32,
    surface: f32,
    surface_alt: f32,
    text: f32,
    text_muted: f32,
    border: f32,
    brand: f32,
    status: f32,
    ring: f32,
}

const LIGHT_ANCHORS: Anchors = Anchors {
    bg: 0.97,
    surface: 0.94,
    surface_alt: 0.905,
    text: 0.145,
    text_muted: 0.40,
    border: 0.865,
    brand: 0.56,
    status: 0.58,
    ring: 0.60,
};

const DARK_ANCHORS: Anchors = Anchors {
    bg: 0.085,
    surface: 0.125,
    surface_alt: 0.165,
    text: 0.93,
    text_muted: 0.68,
    border: 0.28,
    brand: 0.64,
    status: 0.66,
    ring: 0.70,
};

impl ThemeVariant {
    const fn anchors(self) -> &'static Anchors {
        match self {
            Self::Light => &LIGHT_ANCHORS,
            Self::Dark => &DARK_ANCHORS,
        }
    }

    /// Direction that contrast pushes surfaces: up in light, down in dark.
    const fn surface_direction(self) -> f32 {
        match self {
            Self::Light => 1.0,
            Self::Dark => -1.0,
        }
    }
}

/// Gamut-map an OKLCH value and encode it as hex.
///
/// Lightness is pinned just inside the open interval so adjustment-level
/// extremes never collapse a colored token to the pure black/white
/// short-circuit.
fn solid(l: f32, c: f32, h: f32) -> String {
    Color::oklch(l.clamp(0.02, 0.98), c.max(0.0), h)
        .clamp_to_gamut()
        .to_hex()
}

/// Compose one full token set from resolved hues and adjustment levels.
///
/// `hues[0]` tints the neutral ramp and drives primary; `hues[1]`/`hues[2]`
/// drive secondary and accent. Status hues are fixed regardless of harmony
/// mode — success must read green and danger must read red in every theme.
#[must_use]
pub fn compose(hues: &[f32; 5], variant: ThemeVariant, adjust: Adjustments) -> ThemeTokens {
    let anchors = variant.anchors();
    let dir = variant.surface_direction();

    let sat = adjust.saturation_multiplier();
    let brightness = adjust.brightness_shift();
    let contrast = adjust.contrast_shift();

    let h0 = hues[0];
    let h1 = hues[1];
    let h2 = hues[2];

    // ── Neutral ramp ──────────────────────────────────────────
    // Near-gray with a faint bias toward the base hue for brand cohesion.
    // Contrast pushes surfaces toward the variant's extreme and text away
    // from it; brightness nudges everything the same way.
    let surface_shift = contrast.mul_add(dir, brightness);
    let text_shift = contrast.mul_add(-dir, brightness);

    let bg = solid(anchors.bg + surface_shift, 0.004 * sat, h0);
    let surface = solid(anchors.surface + surface_shift, 0.006 * sat, h0);
    let surface_alt = solid(anchors.surface_alt + surface_shift, 0.008 * sat, h0);
    let text = solid(anchors.text + text_shift, 0.006 * sat, h0);
    let text_muted = solid(anchors.text_muted + text_shift, 0.010 * sat, h0);
    let border = solid(anchors.border + brightness, 0.012 * sat, h0);

    // ── Brand colors ──────────────────────────────────────────
    let base_c = (0.14 * sat).clamp(0.08, 0.18);
    let primary = solid(anchors.brand + brightness, base_c, h0);
    let secondary = solid(anchors.brand + 0.04 + brightness, base_c * 0.85, h1);
    let accent = solid(anchors.brand + 0.02 + brightness, base_c * 1.1, h2);
    let ring = solid(anchors.ring + brightness, base_c * 0.9, h0);

    // ── Status colors (fixed semantic hues) ───────────────────
    let success = solid(anchors.status + brightness, base_c * 0.95, 145.0);
    let warning = solid(anchors.status + 0.06 + brightness, base_c, 85.0);
    let danger = solid(anchors.status + brightness, base_c * 1.05, 25.0);

    // ── Paired foregrounds ────────────────────────────────────
    let primary_fg = select_foreground(&primary).to_owned();
    let secondary_fg = select_foreground(&secondary).to_owned();
    let accent_fg = select_foreground(&accent).to_owned();
    let success_fg = select_foreground(&success).to_owned();
    let warning_fg = select_foreground(&warning).to_owned();
    let danger_fg = select_foreground(&danger).to_owned();

    ThemeTokens {
        bg,
        surface,
        surface_alt,
        text,
        text_muted,
        // Reserved for saturated brand surfaces regardless of their own
        // luminance, so it stays fixed rather than computed.
        text_on_color: "#ffffff".to_owned(),
        primary,
        primary_fg,
        secondary,
        secondary_fg,
        accent,
        accent_fg,
        border,
        ring,
        success,
        success_fg,
        warning,
        warning_fg,
        danger,
        danger_fg,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use hueforge_color::{Color, hue_diff};
    use pretty_assertions::assert_eq;

    use super::*;

    const HUES: [f32; 5] = [259.8, 289.8, 229.8, 274.8, 244.8];

    fn lightness(hex: &str) -> f32 {
        Color::hex(hex).map_or(-1.0, |c| c.l)
    }

    #[test]
    fn light_bg_near_top_of_range() {
        let tokens = compose(&HUES, ThemeVariant::Light, Adjustments::default());
        let l = lightness(&tokens.bg);
        assert!((0.92..=0.99).contains(&l), "light bg lightness {l}");
    }

    #[test]
    fn dark_bg_near_bottom_of_range() {
        let tokens = compose(&HUES, ThemeVariant::Dark, Adjustments::default());
        let l = lightness(&tokens.bg);
        assert!((0.05..=0.12).contains(&l), "dark bg lightness {l}");
    }

    #[test]
    fn light_text_is_dark_and_dark_text_is_light() {
        let light = compose(&HUES, ThemeVariant::Light, Adjustments::default());
        let dark = compose(&HUES, ThemeVariant::Dark, Adjustments::default());
        let lt = lightness(&light.text);
        let dt = lightness(&dark.text);
        assert!((0.10..=0.18).contains(&lt), "light text lightness {lt}");
        assert!((0.90..=0.98).contains(&dt), "dark text lightness {dt}");
    }

    #[test]
    fn surface_ramp_ordering() {
        let light = compose(&HUES, ThemeVariant::Light, Adjustments::default());
        assert!(lightness(&light.bg) >= lightness(&light.surface));
        assert!(lightness(&light.surface) >= lightness(&light.surface_alt));

        let dark = compose(&HUES, ThemeVariant::Dark, Adjustments::default());
        assert!(lightness(&dark.bg) <= lightness(&dark.surface));
        assert!(lightness(&dark.surface) <= lightness(&dark.surface_alt));
    }

    #[test]
    fn neutrals_have_low_chroma() {
        let tokens = compose(&HUES, ThemeVariant::Light, Adjustments::default());
        for hex in [&tokens.bg, &tokens.surface, &tokens.surface_alt, &tokens.border] {
            let c = Color::hex(hex).unwrap().c;
            assert!(c < 0.03, "{hex} chroma too high: {c}");
        }
    }

    #[test]
    fn dark_brand_carries_lightness_boost() {
        let light = compose(&HUES, ThemeVariant::Light, Adjustments::default());
        let dark = compose(&HUES, ThemeVariant::Dark, Adjustments::default());
        let boost = lightness(&dark.primary) - lightness(&light.primary);
        assert!((0.04..=0.12).contains(&boost), "boost was {boost}");
    }

    #[test]
    fn brand_hues_survive_both_variants() {
        for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
            let tokens = compose(&HUES, variant, Adjustments::default());
            let primary = Color::hex(&tokens.primary).unwrap();
            assert!(
                hue_diff(primary.h, HUES[0]) < 2.0,
                "{variant:?} primary hue drifted to {}",
                primary.h
            );
            let secondary = Color::hex(&tokens.secondary).unwrap();
            assert!(hue_diff(secondary.h, HUES[1]) < 2.0);
        }
    }

    #[test]
    fn status_hues_are_mode_independent() {
        // Two wildly different hue arrays must yield the same status hues.
        let a = compose(&HUES, ThemeVariant::Light, Adjustments::default());
        let b = compose(&[25.0, 205.0, 55.0, 235.0, 85.0], ThemeVariant::Light, Adjustments::default());
        assert_eq!(a.success, b.success);
        assert_eq!(a.warning, b.warning);
        assert_eq!(a.danger, b.danger);

        let success = Color::hex(&a.success).unwrap();
        assert!(hue_diff(success.h, 145.0) < 8.0, "success hue {}", success.h);
        let danger = Color::hex(&a.danger).unwrap();
        assert!(hue_diff(danger.h, 25.0) < 8.0, "danger hue {}", danger.h);
    }

    #[test]
    fn foregrounds_match_selector() {
        for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
            let tokens = compose(&HUES, variant, Adjustments::default());
            assert_eq!(tokens.primary_fg, select_foreground(&tokens.primary));
            assert_eq!(tokens.secondary_fg, select_foreground(&tokens.secondary));
            assert_eq!(tokens.accent_fg, select_foreground(&tokens.accent));
            assert_eq!(tokens.success_fg, select_foreground(&tokens.success));
            assert_eq!(tokens.warning_fg, select_foreground(&tokens.warning));
            assert_eq!(tokens.danger_fg, select_foreground(&tokens.danger));
        }
    }

    #[test]
    fn text_on_color_is_fixed_white() {
        for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
            let tokens = compose(&HUES, variant, Adjustments::default());
            assert_eq!(tokens.text_on_color, "#ffffff");
        }
    }

    #[test]
    fn saturation_level_scales_brand_chroma() {
        let muted = compose(&HUES, ThemeVariant::Light, Adjustments { saturation: -5, ..Default::default() });
        let vivid = compose(&HUES, ThemeVariant::Light, Adjustments { saturation: 5, ..Default::default() });
        let muted_c = Color::hex(&muted.primary).unwrap().c;
        let vivid_c = Color::hex(&vivid.primary).unwrap().c;
        assert!(muted_c < vivid_c, "muted {muted_c} vs vivid {vivid_c}");
    }

    #[test]
    fn brightness_level_shifts_background() {
        let darker = compose(&HUES, ThemeVariant::Light, Adjustments { brightness: -5, ..Default::default() });
        let brighter = compose(&HUES, ThemeVariant::Light, Adjustments { brightness: 5, ..Default::default() });
        assert!(lightness(&darker.bg) < lightness(&brighter.bg));
    }

    #[test]
    fn contrast_level_separates_text_from_bg() {
        let flat = compose(&HUES, ThemeVariant::Light, Adjustments { contrast: -5, ..Default::default() });
        let punchy = compose(&HUES, ThemeVariant::Light, Adjustments { contrast: 5, ..Default::default() });
        let flat_gap = lightness(&flat.bg) - lightness(&flat.text);
        let punchy_gap = lightness(&punchy.bg) - lightness(&punchy.text);
        assert!(punchy_gap > flat_gap, "flat {flat_gap} vs punchy {punchy_gap}");
    }

    #[test]
    fn extreme_levels_still_well_formed() {
        for sat in [-5i8, 5] {
            for con in [-5i8, 5] {
                for bri in [-5i8, 5] {
                    let adjust = Adjustments { saturation: sat, contrast: con, brightness: bri };
                    for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
                        let tokens = compose(&HUES, variant, adjust);
                        assert!(tokens.is_well_formed(), "sat={sat} con={con} bri={bri}");
                    }
                }
            }
        }
    }

    #[test]
    fn composition_is_deterministic() {
        let a = compose(&HUES, ThemeVariant::Dark, Adjustments::default());
        let b = compose(&HUES, ThemeVariant::Dark, Adjustments::default());
        assert_eq!(a, b);
    }
}
