//! The 20-token semantic theme contract.
//!
//! A [`ThemeTokens`] value is the engine's unit of output: every token is a
//! 6-digit lowercase-or-uppercase `#rrggbb` string, every key is always
//! present, and field order is the canonical serialization order.

use serde::{Deserialize, Serialize};

/// One complete semantic token set (a single light *or* dark theme).
///
/// Token roles carry meaning, not values: consumers style against `primary`
/// or `border`, never against a literal color, so the same markup works
/// across every generated theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeTokens {
    // ── Neutral ramp ──────────────────────────────────────────
    /// Page background.
    pub bg: String,
    /// Card surface.
    pub surface: String,
    /// Secondary card surface (nested panels, wells).
    pub surface_alt: String,
    /// Primary text.
    pub text: String,
    /// De-emphasized text (captions, placeholders).
    pub text_muted: String,
    /// Fixed white reserved for text atop saturated brand surfaces.
    pub text_on_color: String,

    // ── Brand ─────────────────────────────────────────────────
    pub primary: String,
    pub primary_fg: String,
    pub secondary: String,
    pub secondary_fg: String,
    pub accent: String,
    pub accent_fg: String,

    // ── Surfaces ──────────────────────────────────────────────
    /// Hairline borders and dividers.
    pub border: String,
    /// Focus ring.
    pub ring: String,

    // ── Status (fixed semantic hues) ──────────────────────────
    pub success: String,
    pub success_fg: String,
    pub warning: String,
    pub warning_fg: String,
    pub danger: String,
    pub danger_fg: String,
}

impl ThemeTokens {
    /// Number of semantic keys in a token set.
    pub const KEY_COUNT: usize = 20;

    /// All tokens as ordered `(key, value)` pairs.
    ///
    /// Key strings match the serde serialization names.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); Self::KEY_COUNT] {
        [
            ("bg", &self.bg),
            ("surface", &self.surface),
            ("surface-alt", &self.surface_alt),
            ("text", &self.text),
            ("text-muted", &self.text_muted),
            ("text-on-color", &self.text_on_color),
            ("primary", &self.primary),
            ("primary-fg", &self.primary_fg),
            ("secondary", &self.secondary),
            ("secondary-fg", &self.secondary_fg),
            ("accent", &self.accent),
            ("accent-fg", &self.accent_fg),
            ("border", &self.border),
            ("ring", &self.ring),
            ("success", &self.success),
            ("success-fg", &self.success_fg),
            ("warning", &self.warning),
            ("warning-fg", &self.warning_fg),
            ("danger", &self.danger),
            ("danger-fg", &self.danger_fg),
        ]
    }

    /// Whether every token is a well-formed `#rrggbb` string.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.entries().iter().all(|(_, v)| is_hex_token(v))
    }
}

/// `#` plus exactly six hex digits.
fn is_hex_token(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s.as_bytes()[1..].iter().all(u8::is_ascii_hexdigit)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
