// THEORY:
// The theme color is the accent the UI tints its highlights with. It comes from one
// of three places: the OS accent color, the active theme (no override), or a color
// the user picked. Whatever the source, the accent is brightened before use so it
// reads well on the window chrome: a large lift in dark mode, a small one in light
// mode. The result is delivered as a CSS custom property declaration that the UI
// layer drops into a stylesheet.
//
// The same layer can also switch animations off globally; that declaration is a
// fixed string built here next to the accent one.

use crate::core_modules::color_sample::color_sample::{Alpha, ColorSample};
use crate::core_modules::pixel::pixel::{Channel, Pixel};
use crate::error::ThemeError;
use tracing::debug;

pub const DARK_MODE_BRIGHTEN: Channel = 100;
pub const LIGHT_MODE_BRIGHTEN: Channel = 20;

const ALL_ELEMENTS: &str = "*,*::before,*::after";
const NO_ANIMATION_RULES: &str = "animation:none!important;transition:none!important;";

/// Where the accent color comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeColorSource {
    /// OS accent color, as reported by the platform (`rrggbbaa`, `#` optional).
    System(String),
    /// Use the theme's own accent; no override is emitted.
    Theme,
    /// A user-chosen CSS color (hex or `rgb()`/`rgba()`).
    Custom(String),
}

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
pub fn parse_hex_color(input: &str) -> Result<Pixel, ThemeError> {
    let invalid = || ThemeError::InvalidColor(input.to_string());
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    let nibble = |i: usize| byte(&hex[i..i + 1]).map(|n| n * 17);
    let pair = |i: usize| byte(&hex[i..i + 2]);
    match hex.len() {
        3 => Ok(Pixel::new(nibble(0)?, nibble(1)?, nibble(2)?, u8::MAX)),
        4 => Ok(Pixel::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Ok(Pixel::new(pair(0)?, pair(2)?, pair(4)?, u8::MAX)),
        8 => Ok(Pixel::new(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
        _ => Err(invalid()),
    }
}

/// Parses a hex color or CSS `rgb()`/`rgba()` into a sample with fractional alpha.
///
/// Functional notation accepts comma or space separated channels, an optional
/// `/ alpha`, and percentages. Out-of-range values are clamped. Named colors and
/// other color spaces (`hsl()`, ...) are rejected.
pub fn parse_css_color(input: &str) -> Result<ColorSample, ThemeError> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'));

    let Some(args) = args else {
        let pixel = parse_hex_color(trimmed)?;
        return Ok(ColorSample::from_pixel(pixel, pixel.alpha as Alpha / 255.0));
    };

    let invalid = || ThemeError::InvalidColor(input.to_string());
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let (rgb, alpha) = match parts.as_slice() {
        [r, g, b] => ([*r, *g, *b], None),
        [r, g, b, a] => ([*r, *g, *b], Some(*a)),
        _ => return Err(invalid()),
    };

    let mut channels = [0u8; 3];
    for (channel, text) in channels.iter_mut().zip(rgb) {
        let value = parse_css_number(text, 255.0).ok_or_else(invalid)?;
        *channel = value.clamp(0.0, 255.0).round() as u8;
    }
    let a = match alpha {
        Some(text) => parse_css_number(text, 1.0).ok_or_else(invalid)?.clamp(0.0, 1.0) as Alpha,
        None => 1.0,
    };

    Ok(ColorSample::new(channels[0], channels[1], channels[2], a))
}

/// A plain number, or a percentage of `full_scale`.
fn parse_css_number(text: &str, full_scale: f64) -> Option<f64> {
    let value = match text.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().ok()? / 100.0 * full_scale,
        None => text.parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

/// Lifts every RGB channel by the mode-dependent amount, clamping at 255. Alpha is kept.
pub fn brighten_accent(color: ColorSample, dark_mode: bool) -> ColorSample {
    let delta = if dark_mode { DARK_MODE_BRIGHTEN } else { LIGHT_MODE_BRIGHTEN };
    color.brightened(delta)
}

/// Builds the `--theme-color` declaration for `source`, or `None` when the theme decides.
pub fn theme_color_declaration(
    source: &ThemeColorSource,
    dark_mode: bool,
) -> Result<Option<String>, ThemeError> {
    let color = match source {
        ThemeColorSource::Theme => return Ok(None),
        ThemeColorSource::System(color) | ThemeColorSource::Custom(color) => color,
    };
    let accent = brighten_accent(parse_css_color(color)?, dark_mode);
    debug!(source = ?source, accent = %accent, dark_mode, "theme color resolved");
    Ok(Some(format!("{ALL_ELEMENTS}{{--theme-color:{accent};}}")))
}

/// The global animation kill switch, or `None` when animations stay on.
pub fn animation_override_declaration(disable_animation: bool) -> Option<String> {
    disable_animation.then(|| format!("{ALL_ELEMENTS}{{{NO_ANIMATION_RULES}}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_hex_lengths() {
        assert_eq!(parse_hex_color("#0078d7").unwrap(), Pixel::new(0, 120, 215, 255));
        assert_eq!(parse_hex_color("0078d780").unwrap(), Pixel::new(0, 120, 215, 128));
        assert_eq!(parse_hex_color("#fa0").unwrap(), Pixel::new(255, 170, 0, 255));
        assert_eq!(parse_hex_color("#f008").unwrap(), Pixel::new(255, 0, 0, 136));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#12345", "#gggggg", "#ééé"] {
            assert_eq!(parse_hex_color(bad), Err(ThemeError::InvalidColor(bad.to_string())));
        }
    }

    #[test]
    fn parses_functional_rgb() {
        assert_eq!(parse_css_color("rgb(16, 32, 48)").unwrap(), ColorSample::opaque(16, 32, 48));
        assert_eq!(
            parse_css_color("RGBA(255,0,0,0.5)").unwrap(),
            ColorSample::new(255, 0, 0, 0.5)
        );
        assert_eq!(
            parse_css_color("rgb(100% 0% 50% / 25%)").unwrap(),
            ColorSample::new(255, 0, 128, 0.25)
        );
    }

    #[test]
    fn functional_rgb_clamps_out_of_range_channels() {
        assert_eq!(
            parse_css_color("rgba(300, -5, 12, 2)").unwrap(),
            ColorSample::new(255, 0, 12, 1.0)
        );
    }

    #[test]
    fn hex_alpha_becomes_fraction() {
        assert_eq!(parse_css_color("#0078d7").unwrap(), ColorSample::opaque(0, 120, 215));
        let half = parse_css_color("#00000080").unwrap();
        assert!((half.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_unsupported_css_colors() {
        for bad in [
            "rgb(1,2)",
            "rgb(a,b,c)",
            "rgb(1,2,3",
            "rgb(1,2,3,4,5)",
            "rgb(inf,0,0)",
            "hsl(0,0%,0%)",
            "red",
        ] {
            assert_eq!(parse_css_color(bad), Err(ThemeError::InvalidColor(bad.to_string())));
        }
    }

    #[test]
    fn dark_mode_lifts_more_than_light_mode() {
        let accent = ColorSample::opaque(0, 120, 215);
        assert_eq!(brighten_accent(accent, true).to_string(), "rgba(100,220,255,1)");
        assert_eq!(brighten_accent(accent, false).to_string(), "rgba(20,140,235,1)");
    }

    #[test]
    fn theme_source_emits_nothing() {
        assert_eq!(theme_color_declaration(&ThemeColorSource::Theme, true), Ok(None));
    }

    #[test]
    fn custom_hex_source_emits_declaration() {
        // #102030 is (16, 32, 48); light mode adds 20.
        let source = ThemeColorSource::Custom("#102030".into());
        assert_eq!(
            theme_color_declaration(&source, false).unwrap().as_deref(),
            Some("*,*::before,*::after{--theme-color:rgba(36,52,68,1);}")
        );
    }

    #[test]
    fn custom_rgba_source_keeps_its_alpha() {
        let source = ThemeColorSource::Custom("rgba(200, 10, 10, 0.5)".into());
        assert_eq!(
            theme_color_declaration(&source, true).unwrap().as_deref(),
            Some("*,*::before,*::after{--theme-color:rgba(255,110,110,0.5);}")
        );
    }

    #[test]
    fn system_source_with_bad_color_is_an_error() {
        let source = ThemeColorSource::System("nope".into());
        assert!(theme_color_declaration(&source, true).is_err());
    }

    #[test]
    fn animation_override_only_when_disabled() {
        assert_eq!(animation_override_declaration(false), None);
        assert_eq!(
            animation_override_declaration(true).as_deref(),
            Some("*,*::before,*::after{animation:none!important;transition:none!important;}")
        );
    }
}
