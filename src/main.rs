// SPDX-License-Identifier: MIT
//
// hueforge — deterministic OKLCH palette generator.
//
// This is the calling layer that wires together the crates:
//
//   hueforge-color  → OKLCH math, hex codec, gamut mapping
//   hueforge-engine → harmony resolution, token composition, dual themes
//
// Everything the engine deliberately does not do lives here: argument
// parsing, boundary validation (unknown modes, malformed hex, out-of-range
// levels are rejected *before* the engine runs), and the JSON response
// envelope with its philosophy string and generation timestamp.

use std::process;
use std::sync::LazyLock;

use anyhow::{Result, bail};
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use hueforge_engine::{GenerationRequest, HarmonyMode, PaletteMode, ThemeTokens, generate};
use regex::Regex;
use serde::Serialize;

// ─── CLI ────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "hueforge", version, about = "Generate a matched light/dark semantic color palette")]
struct Args {
    /// Harmony mode: monochrome, analogous, complementary,
    /// split-complementary, triadic, tetradic, compound, triadic-split,
    /// or random.
    #[arg(default_value = "random")]
    mode: String,

    /// Seed color as a 6-digit hex string; fixes every randomized choice
    /// so the same invocation always reproduces the same palette.
    #[arg(long, value_name = "HEX")]
    base_color: Option<String>,

    /// Saturation level, -5 (muted) to 5 (vivid).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    saturation: i8,

    /// Contrast level, -5 (flat) to 5 (punchy).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    contrast: i8,

    /// Brightness level, -5 (dimmer) to 5 (brighter).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    brightness: i8,

    /// Pretty-print the JSON response.
    #[arg(long)]
    pretty: bool,
}

// ─── Response envelope ──────────────────────────────────────────────────────

/// What the palette consumer receives: the engine's result plus the
/// human-facing extras that are this layer's concern.
#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct Response<'a> {
    seed: &'a str,
    mode: HarmonyMode,
    philosophy: &'static str,
    generated_at: String,
    light: &'a ThemeTokens,
    dark: &'a ThemeTokens,
}

/// One-line design rationale per resolved mode.
const fn philosophy(mode: HarmonyMode) -> &'static str {
    match mode {
        HarmonyMode::Monochrome => {
            "One hue, many weights — hierarchy carried entirely by lightness and chroma."
        }
        HarmonyMode::Analogous => {
            "Neighboring hues blend into a calm, cohesive range with no hard color breaks."
        }
        HarmonyMode::Complementary => {
            "Opposites on the wheel give maximum hue tension between brand and accent."
        }
        HarmonyMode::SplitComplementary => {
            "The complement's flanks keep contrast high while softening the clash."
        }
        HarmonyMode::Triadic => "Three equidistant hues balance vibrancy against stability.",
        HarmonyMode::Tetradic => {
            "A rectangle of four hues — the richest scheme, held together by shared anchors."
        }
        HarmonyMode::Compound => {
            "Analogous warmth with a complementary counterpoint for emphasis."
        }
        HarmonyMode::TriadicSplit => {
            "A loosened triad — equidistant hues split apart for a less formal balance."
        }
    }
}

// ─── Boundary validation ────────────────────────────────────────────────────

/// Validate arguments and build the engine request.
///
/// The engine assumes validated input, so every rejection happens here.
fn into_request(args: &Args) -> Result<GenerationRequest> {
    let Some(mode) = PaletteMode::from_name(&args.mode) else {
        let names: Vec<&str> = HarmonyMode::all().iter().map(|m| m.name()).collect();
        bail!(
            "unknown mode '{}' (expected one of: {}, random)",
            args.mode,
            names.join(", ")
        );
    };

    let base_color = match args.base_color.as_deref() {
        Some(raw) => Some(validate_hex(raw)?),
        None => None,
    };

    for (name, level) in [
        ("saturation", args.saturation),
        ("contrast", args.contrast),
        ("brightness", args.brightness),
    ] {
        if !(-5..=5).contains(&level) {
            bail!("--{name} must be between -5 and 5, got {level}");
        }
    }

    Ok(GenerationRequest {
        mode,
        base_color,
        saturation: args.saturation,
        contrast: args.contrast,
        brightness: args.brightness,
    })
}

/// Six hex digits, optionally `#`-prefixed.
static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("valid literal pattern"));

/// Accept exactly six hex digits, with or without a leading `#`, and
/// normalize to the `#`-prefixed form the engine echoes back.
fn validate_hex(raw: &str) -> Result<String> {
    if !HEX_PATTERN.is_match(raw) {
        bail!("--base-color must be a 6-digit hex color like #3B82F6, got '{raw}'");
    }
    if raw.starts_with('#') {
        Ok(raw.to_owned())
    } else {
        Ok(format!("#{raw}"))
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn run(args: &Args) -> Result<String> {
    let request = into_request(args)?;
    let result = generate(&request);

    let response = Response {
        seed: &result.seed,
        mode: result.mode,
        philosophy: philosophy(result.mode),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        light: &result.light,
        dark: &result.dark,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(json)
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("hueforge: {err:#}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
