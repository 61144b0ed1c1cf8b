// SPDX-License-Identifier: MIT
//
// hueforge-color — OKLCH-native color core.
//
// Single-character variable names (r, g, b, l, c, h, s, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Palette generation happens entirely in OKLCH, the cylindrical form of
// Björn Ottosson's Oklab space. Equal numeric steps in OKLCH correspond
// to roughly equal perceived steps, which is what makes harmony math
// (rotate hue, anchor lightness, scale chroma) produce colors that look
// related instead of merely being numerically related.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ LMS ↔ Linear sRGB ↔ sRGB ↔ #rrggbb
//
// Gamut mapping reduces chroma until an OKLCH value survives the trip
// into 8-bit sRGB and back without visible distortion.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color stored in OKLCH space.
///
/// Pure value type: no method mutates in place; every operation returns a
/// fresh value. Hue is in degrees, lightness and chroma are unit-ish floats.
///
/// # Examples
///
/// ```
/// use hueforge_color::Color;
///
/// let brand = Color::hex("#3b82f6").unwrap();
/// let vivid = Color::oklch(0.62, 0.19, brand.h).clamp_to_gamut();
/// assert!(vivid.c <= 0.19);
/// assert_eq!(vivid.to_hex().len(), 7);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f32,

    /// Chroma (colorfulness): 0.0 (gray) to ~0.37 (most vivid).
    /// Unbounded in theory, but sRGB gamut limits practical values.
    pub c: f32,

    /// Hue angle in degrees: 0.0 to 360.0.
    /// 0° = pink/red, 90° = yellow, 180° = cyan/green, 270° = blue/purple.
    pub h: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH values.
    ///
    /// - `l`: Lightness, 0.0 to 1.0
    /// - `c`: Chroma, 0.0 to ~0.37
    /// - `h`: Hue angle in degrees, 0.0 to 360.0
    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Create a color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse a 6-digit hex color (`#rrggbb`, with or without `#`).
    ///
    /// Returns `None` if the string is not a well-formed 6-digit hex color.
    /// Callers in the generation pipeline degrade `None` to [`Color::BLACK`]
    /// rather than propagating an error — a malformed seed still produces a
    /// structurally valid palette.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return None;
        }
        let bytes = s.as_bytes();
        let r = parse_hex_byte(&bytes[0..2])?;
        let g = parse_hex_byte(&bytes[2..4])?;
        let b = parse_hex_byte(&bytes[4..6])?;
        Some(Self::rgb8(r, g, b))
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    /// Whether this color is achromatic (no visible chroma).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB with channels clamped to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB with channels clamped to 0–255.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to a lowercase `#rrggbb` hex string.
    ///
    /// Lightness extremes short-circuit to pure black/white: at `l <= 0` and
    /// `l >= 1` the matrix pipeline degenerates (tiny negative channels,
    /// cube-root blow-up), so the only sensible answers are the endpoints.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.l <= 0.0 {
            return "#000000".to_owned();
        }
        if self.l >= 1.0 {
            return "#ffffff".to_owned();
        }
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Whether this color is within the sRGB gamut.
    ///
    /// Colors outside the gamut get their channels clamped during
    /// conversion, which shifts the perceived hue. Use [`clamp_to_gamut`]
    /// to reduce chroma instead, preserving hue and lightness.
    ///
    /// [`clamp_to_gamut`]: Self::clamp_to_gamut
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&g) && (0.0..=1.0).contains(&b)
    }

    /// Reduce chroma until this color survives 8-bit sRGB quantization.
    ///
    /// Binary search on chroma over `[0, c]`, fixed at 10 iterations so the
    /// search is bounded for any input. A probe passes when converting it to
    /// hex and back preserves both lightness and chroma within 0.02 absolute
    /// — i.e. the color round-trips without visible distortion. The highest
    /// passing chroma wins. If the full chroma already passes, the color is
    /// returned bit-identical.
    #[must_use]
    pub fn clamp_to_gamut(self) -> Self {
        if round_trip_stable(self) {
            return self;
        }

        let mut lo: f32 = 0.0;
        let mut hi: f32 = self.c;
        let mut best: f32 = 0.0;

        for _ in 0..10 {
            let mid = (lo + hi) * 0.5;
            let probe = Self { c: mid, ..self };
            if round_trip_stable(probe) {
                best = mid;
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: best, ..self }
    }
}

/// Whether a color survives the hex round-trip within gamut tolerance.
fn round_trip_stable(probe: Color) -> bool {
    match Color::hex(&probe.to_hex()) {
        Some(rt) => (rt.l - probe.l).abs() <= 0.02 && (rt.c - probe.c).abs() <= 0.02,
        None => false,
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point
        const EPS: f32 = 1e-5;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic() || other.is_achromatic() || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Default is black — the same value malformed hex input degrades to.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Hue Helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
#[must_use]
pub fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// These implement the Oklab color space math created by Björn Ottosson.
// Reference: https://bottosson.github.io/posts/oklab/
//
// The coefficients are the published ones, verbatim — approximations here
// would break the round-trip tolerance the gamut mapper relies on.

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

/// Convert OKLCH chroma and hue to Oklab a, b components.
#[inline]
fn oklch_to_oklab_ab(c: f32, h: f32) -> (f32, f32) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// Convert Oklab a, b components to OKLCH chroma and hue.
#[inline]
fn oklab_ab_to_oklch(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    let h = if c < 1e-8 {
        0.0 // Achromatic — hue is undefined, default to 0
    } else {
        let h = b.atan2(a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    };
    (c, h)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// The Oklab ↔ Linear sRGB conversion goes through an intermediate LMS
// (Long, Medium, Short cone response) space. The matrices below are from
// Björn Ottosson's original specification.

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    // Oklab → LMS (cube roots)
    let l_ = 0.215_803_76f32.mul_add(b, 0.396_337_78f32.mul_add(a, l_ok));
    let m_ = 0.063_854_17f32.mul_add(-b, 0.105_561_346f32.mul_add(-a, l_ok));
    let s_ = 1.291_485_5f32.mul_add(-b, 0.089_484_18f32.mul_add(-a, l_ok));

    // Undo cube root
    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → Linear sRGB
    let r = 0.230_969_94f32.mul_add(s, 4.076_741_7f32.mul_add(l, -(3.307_711_6 * m)));
    let g = 0.341_319_38f32.mul_add(-s, (-1.268_438f32).mul_add(l, 2.609_757_4 * m));
    let bl = 1.707_614_7f32.mul_add(s, (-0.004_196_086_3f32).mul_add(l, -(0.703_418_6 * m)));

    (r, g, bl)
}

/// Convert linear sRGB to Oklab (L, a, b).
#[inline]
fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    // Linear sRGB → LMS
    let l = 0.051_445_995f32.mul_add(b, 0.412_221_47f32.mul_add(r, 0.536_332_55 * g));
    let m = 0.107_396_96f32.mul_add(b, 0.211_903_5f32.mul_add(r, 0.680_699_5 * g));
    let s = 0.629_978_7f32.mul_add(b, 0.088_302_46f32.mul_add(r, 0.281_718_84 * g));

    // Cube root (LMS → Oklab intermediate)
    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // Oklab intermediate → Oklab
    let l_ok = 0.004_072_047f32.mul_add(-s_, 0.210_454_26f32.mul_add(l_, 0.793_617_8 * m_));
    let a = 0.450_593_7f32.mul_add(s_, 1.977_998_5f32.mul_add(l_, -(2.428_592_2 * m_)));
    let b_ok = 0.808_675_77f32.mul_add(-s_, 0.025_904_037f32.mul_add(l_, 0.782_771_77 * m_));

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────
//
// sRGB uses a piecewise transfer function (gamma curve) to encode linear
// light values into the perceptual domain. WCAG relative luminance is
// defined over the linear values, so both directions are public.

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

/// Convert sRGB (0.0–1.0) → OKLCH.
fn srgb_to_oklch(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let lr = srgb_to_linear(r);
    let lg = srgb_to_linear(g);
    let lb = srgb_to_linear(b);
    let (l, a, b_ok) = linear_srgb_to_oklab(lr, lg, lb);
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

/// Convert OKLCH → sRGB (0.0–1.0, may be out of gamut).
fn oklch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
