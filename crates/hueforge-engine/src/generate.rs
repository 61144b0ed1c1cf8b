//! The dual-theme builder — the engine's single entry point.
//!
//! One pass, no intermediate state: resolve mode and hues, compose the
//! light theme, compose the dark theme with its own anchors, package both
//! with the resolved seed and mode. Light and dark consume the same hues
//! and chroma scaling, so brand identity holds across the pair.

use std::time::{SystemTime, UNIX_EPOCH};

use hueforge_color::Color;
use serde::Serialize;

use crate::harmony::{self, HarmonyMode, PaletteMode};
use crate::palette::{Adjustments, ThemeVariant, compose};
use crate::rng::SeededRng;
use crate::tokens::ThemeTokens;

/// Lightness/chroma at which a derived seed swatch is rendered when no
/// seed color was supplied. Mid-range and comfortably in gamut for every
/// hue, so the swatch's hue survives hex encoding and regenerating from
/// the returned seed reproduces the same base hue.
const SEED_SWATCH_L: f32 = 0.65;
const SEED_SWATCH_C: f32 = 0.12;

/// A validated palette request.
///
/// The boundary layer owns validation: unknown mode names, malformed hex,
/// and out-of-range levels are rejected *before* this struct is built. The
/// engine never re-validates — but it also never panics on bad input; a
/// malformed `base_color` degrades to black rather than faulting a pure
/// computation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Requested harmony mode, possibly the `random` wildcard.
    pub mode: PaletteMode,
    /// Optional 6-digit hex seed color; fixes every randomized choice.
    pub base_color: Option<String>,
    /// Saturation level in `[-5, 5]`.
    pub saturation: i8,
    /// Contrast level in `[-5, 5]`.
    pub contrast: i8,
    /// Brightness level in `[-5, 5]`.
    pub brightness: i8,
}

impl GenerationRequest {
    /// A request with all adjustment levels at zero.
    #[must_use]
    pub const fn new(mode: PaletteMode, base_color: Option<String>) -> Self {
        Self { mode, base_color, saturation: 0, contrast: 0, brightness: 0 }
    }
}

/// A matched light/dark theme pair plus the inputs needed to regenerate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteResult {
    pub light: ThemeTokens,
    pub dark: ThemeTokens,
    /// The originally supplied seed color, or a derived swatch encoding the
    /// randomly resolved base hue.
    pub seed: String,
    /// The resolved concrete mode — never the `random` wildcard.
    pub mode: HarmonyMode,
}

/// Generate a matched light/dark palette pair from a request.
///
/// With a seed color present this is a pure function: identical requests
/// produce byte-identical results. Without one, the generator is seeded
/// from wall-clock entropy and each call yields a fresh palette whose
/// `seed` field makes it reproducible afterwards.
#[must_use]
pub fn generate(request: &GenerationRequest) -> PaletteResult {
    let mut rng = match request.base_color.as_deref() {
        Some(seed) => SeededRng::from_text(seed),
        None => SeededRng::new(entropy_seed()),
    };

    let base_hue = match request.base_color.as_deref() {
        Some(hex) => Color::hex(hex).unwrap_or(Color::BLACK).h,
        None => rng.next_range(0.0, 360.0),
    };

    let (mode, hues) = harmony::resolve(request.mode, base_hue, &mut rng);

    let adjust = Adjustments {
        saturation: request.saturation,
        contrast: request.contrast,
        brightness: request.brightness,
    };

    let light = compose(&hues, ThemeVariant::Light, adjust);
    let dark = compose(&hues, ThemeVariant::Dark, adjust);

    let seed = request
        .base_color
        .clone()
        .unwrap_or_else(|| seed_swatch(base_hue));

    PaletteResult { light, dark, seed, mode }
}

/// Hex swatch encoding a base hue at the fixed representative
/// lightness/chroma.
fn seed_swatch(base_hue: f32) -> String {
    Color::oklch(SEED_SWATCH_L, SEED_SWATCH_C, base_hue)
        .clamp_to_gamut()
        .to_hex()
}

/// Non-deterministic seed for requests without a seed color.
///
/// Subsecond wall-clock entropy; regeneration without a seed color is
/// non-reproducible by design.
fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0x9E37_79B9, |d| (d.as_secs() as u32) ^ d.subsec_nanos())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
