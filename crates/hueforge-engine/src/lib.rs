//! # hueforge-engine — deterministic semantic palette generation.
//!
//! Turns a harmony mode, an optional seed color, and three bounded
//! adjustment levels into a matched light/dark pair of 20-token semantic
//! color sets. Identical inputs (with a seed color) always produce
//! byte-identical output.
//!
//! # Architecture
//!
//! ```text
//! GenerationRequest (mode + seed color + adjustment levels)
//!     │
//!     ▼
//! rng.rs:      seeded deterministic float sequence
//!     │
//!     ▼
//! harmony.rs:  resolve mode, base hue, and the 5-hue array
//!     │
//!     ▼
//! palette.rs:  compose one theme (neutral ramp, brand, status, foregrounds)
//!     │          — invoked once for light, once for dark anchors
//!     ▼
//! generate.rs: package both themes with the resolved seed and mode
//! ```
//!
//! The engine is a pure computation pipeline: no shared state, no I/O, no
//! caches. All color math happens in OKLCH via [`hueforge_color`], and
//! every emitted token is gamut-mapped before hex encoding.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Mathematical code uses small integer-to-float casts (indices, angles).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Composition is inherently long — one block per token family.
#![allow(clippy::too_many_lines)]
// f64→f32 truncation is intentional (PRNG values don't need f64 precision).
#![allow(clippy::cast_possible_truncation)]

pub mod contrast;
pub mod generate;
pub mod harmony;
pub mod palette;
pub mod rng;
pub mod tokens;

pub use generate::{GenerationRequest, PaletteResult, generate};
pub use harmony::{HarmonyMode, PaletteMode};
pub use palette::{Adjustments, ThemeVariant};
pub use tokens::ThemeTokens;
