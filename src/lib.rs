// THEORY:
// `backdrop_tone` turns an image into the color a UI should sit on top of it. The
// public entry point is `ColorAnalyzer` (or the free `analyze` function): average
// the pixels, decide light or dark by perceived luminance, and brighten once if dark.
//
// Next to it live the small pieces a desktop shell needs around that decision: the
// acrylic stack blur run in the background, accent color brightening for the
// `--theme-color` property, short timestamp text, and best-effort directory removal.
// None of them keep global state; callers pass in everything they depend on.

pub mod acrylic;
pub mod color_analyzer;
pub mod core_modules;
pub mod error;
pub mod fs_util;
pub mod theme_color;
pub mod time_text;

pub use color_analyzer::{AnalyzerConfig, ColorAnalysisResult, ColorAnalyzer, analyze};
pub use core_modules::color_sample::color_sample::ColorSample;
pub use core_modules::pixel_buffer::pixel_buffer::PixelBuffer;
pub use error::{AnalysisError, BlurError, ThemeError};
