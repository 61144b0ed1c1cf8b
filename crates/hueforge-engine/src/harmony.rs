//! Harmony resolution — pure hue combinatorics.
//!
//! Each harmony mode maps to a fixed table of five hue offsets (degrees)
//! applied to a base hue. The tables are an enum match rather than a keyed
//! lookup so the compiler checks exhaustiveness when a mode is added.
//! The pseudo-mode `random` resolves to one of the concrete modes via the
//! seeded generator before any hue math happens.

use hueforge_color::normalize_hue;

use crate::rng::SeededRng;

/// A concrete harmony mode: a named rule for picking related hues around
/// the color wheel. This is always the *resolved* mode — `random` never
/// appears here (see [`PaletteMode`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyMode {
    /// Single hue; the whole palette leans on lightness and chroma.
    Monochrome,
    /// Neighbors within ±30° of the base.
    Analogous,
    /// Base plus its exact 180° opposite, with near-base accents.
    Complementary,
    /// Base plus the two hues flanking its complement.
    SplitComplementary,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues 90° apart (rectangle on the wheel).
    Tetradic,
    /// Analogous pair blended with the complement region.
    Compound,
    /// Triad points split ±15°.
    TriadicSplit,
}

/// Modes that `random` may resolve to — every concrete mode except
/// monochrome, which would defeat the point of asking for a surprise.
const RANDOM_POOL: [HarmonyMode; 7] = [
    HarmonyMode::Analogous,
    HarmonyMode::Complementary,
    HarmonyMode::SplitComplementary,
    HarmonyMode::Triadic,
    HarmonyMode::Tetradic,
    HarmonyMode::Compound,
    HarmonyMode::TriadicSplit,
];

impl HarmonyMode {
    /// The fixed hue-offset table for this mode, in degrees.
    ///
    /// Index 0 is always the base hue itself. For `Complementary`, index 1
    /// is exactly +180 — callers rely on that exactness, not an
    /// approximation.
    #[must_use]
    pub const fn offsets(self) -> [f32; 5] {
        match self {
            Self::Monochrome => [0.0, 0.0, 0.0, 0.0, 0.0],
            Self::Analogous => [0.0, 30.0, -30.0, 15.0, -15.0],
            Self::Complementary => [0.0, 180.0, 30.0, -30.0, 210.0],
            Self::SplitComplementary => [0.0, 150.0, 210.0, 30.0, 180.0],
            Self::Triadic => [0.0, 120.0, 240.0, 60.0, 180.0],
            Self::Tetradic => [0.0, 90.0, 180.0, 270.0, 45.0],
            Self::Compound => [0.0, 30.0, -30.0, 180.0, 150.0],
            Self::TriadicSplit => [0.0, 105.0, 135.0, 225.0, 255.0],
        }
    }

    /// Human-readable name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Compound => "compound",
            Self::TriadicSplit => "triadic-split",
        }
    }

    /// Parse a mode from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|m| m.name() == lower).copied()
    }

    /// All concrete harmony modes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochrome,
            Self::Analogous,
            Self::Complementary,
            Self::SplitComplementary,
            Self::Triadic,
            Self::Tetradic,
            Self::Compound,
            Self::TriadicSplit,
        ]
    }
}

/// The mode as requested: either a concrete harmony or the `random`
/// wildcard, which resolves deterministically from the seeded generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMode {
    /// A specific harmony mode.
    Harmony(HarmonyMode),
    /// Pick one of the non-monochrome modes from the seeded sequence.
    Random,
}

impl PaletteMode {
    /// Parse from a name string; accepts the 8 concrete names plus `random`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("random") {
            Some(Self::Random)
        } else {
            HarmonyMode::from_name(name).map(Self::Harmony)
        }
    }

    /// The request-level name (`random` stays `random`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Harmony(mode) => mode.name(),
            Self::Random => "random",
        }
    }
}

/// Resolve a requested mode into a concrete mode and its five hues.
///
/// Final hues are `(base_hue + offset) mod 360`, always non-negative.
/// The `random` draw consumes exactly one value from `rng`, so callers that
/// seed the generator from the same string get the same concrete mode.
#[must_use]
pub fn resolve(mode: PaletteMode, base_hue: f32, rng: &mut SeededRng) -> (HarmonyMode, [f32; 5]) {
    let mode = match mode {
        PaletteMode::Harmony(mode) => mode,
        PaletteMode::Random => *rng.pick(&RANDOM_POOL),
    };

    let mut hues = [0.0f32; 5];
    for (slot, offset) in hues.iter_mut().zip(mode.offsets()) {
        *slot = normalize_hue(base_hue + offset);
    }
    (mode, hues)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_fixed(mode: HarmonyMode, base: f32) -> [f32; 5] {
        let mut rng = SeededRng::new(0);
        resolve(PaletteMode::Harmony(mode), base, &mut rng).1
    }

    #[test]
    fn first_hue_is_base() {
        for &mode in HarmonyMode::all() {
            let hues = resolve_fixed(mode, 210.0);
            assert!((hues[0] - 210.0).abs() < 1e-6, "{mode:?} moved the base hue");
        }
    }

    #[test]
    fn all_hues_in_range() {
        for &mode in HarmonyMode::all() {
            for base in [0.0, 90.0, 181.5, 270.0, 359.9] {
                for h in resolve_fixed(mode, base) {
                    assert!(
                        (0.0..360.0).contains(&h),
                        "{mode:?} base={base} produced hue {h}"
                    );
                }
            }
        }
    }

    #[test]
    fn complementary_is_exact() {
        for base in [0.0, 37.0, 179.5, 200.25, 359.0] {
            let hues = resolve_fixed(HarmonyMode::Complementary, base);
            assert_eq!(
                hues[1],
                (hues[0] + 180.0) % 360.0,
                "complement not exact for base {base}"
            );
        }
    }

    #[test]
    fn monochrome_is_all_base() {
        let hues = resolve_fixed(HarmonyMode::Monochrome, 123.4);
        for h in hues {
            assert!((h - 123.4).abs() < 1e-6);
        }
    }

    #[test]
    fn negative_offsets_wrap() {
        // Analogous at base 10 includes -30 → 340.
        let hues = resolve_fixed(HarmonyMode::Analogous, 10.0);
        assert!((hues[2] - 340.0).abs() < 1e-4, "got {}", hues[2]);
    }

    #[test]
    fn random_is_seeded_not_wall_clock() {
        let mut a = SeededRng::from_text("#3B82F6");
        let mut b = SeededRng::from_text("#3B82F6");
        let (mode_a, hues_a) = resolve(PaletteMode::Random, 250.0, &mut a);
        let (mode_b, hues_b) = resolve(PaletteMode::Random, 250.0, &mut b);
        assert_eq!(mode_a, mode_b);
        assert_eq!(hues_a, hues_b);
    }

    #[test]
    fn random_never_resolves_monochrome() {
        for seed in 0..200 {
            let mut rng = SeededRng::new(seed);
            let (mode, _) = resolve(PaletteMode::Random, 0.0, &mut rng);
            assert_ne!(mode, HarmonyMode::Monochrome, "seed {seed}");
        }
    }

    #[test]
    fn name_round_trips() {
        for &mode in HarmonyMode::all() {
            assert_eq!(HarmonyMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(HarmonyMode::from_name("Triadic-Split"), Some(HarmonyMode::TriadicSplit));
        assert_eq!(HarmonyMode::from_name("nope"), None);
    }

    #[test]
    fn palette_mode_parses_random() {
        assert_eq!(PaletteMode::from_name("random"), Some(PaletteMode::Random));
        assert_eq!(PaletteMode::from_name("RANDOM"), Some(PaletteMode::Random));
        assert_eq!(
            PaletteMode::from_name("triadic"),
            Some(PaletteMode::Harmony(HarmonyMode::Triadic))
        );
        assert_eq!(PaletteMode::from_name(""), None);
    }

    #[test]
    fn serde_name_matches_display_name() {
        for &mode in HarmonyMode::all() {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.name()));
        }
    }
}
