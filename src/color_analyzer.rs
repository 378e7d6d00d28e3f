// THEORY:
// The `color_analyzer` module is the top-level API for deriving a backdrop color from
// an image. It runs a fixed three-stage pipeline over one pixel buffer:
//
//   Stage 1: average the RGB channels (alpha ignored)
//   Stage 2: classify the average as dark or light by Rec. 601 luma
//   Stage 3: if dark, brighten once and classify again
//
// Stage 3 is single-shot. A color that is still dark after one brighten is reported
// as dark; it is never brightened a second time. Mid-tone backgrounds get nudged,
// near-black ones stay recognizably dark.
//
// The analyzer holds no state between calls. It borrows the caller's bytes and
// returns a fresh result, so it can be shared freely across threads.

use crate::core_modules::color_sample::color_sample::{Alpha, ColorSample, OPAQUE};
use crate::core_modules::pixel::pixel::{Channel, Luminance};
use crate::core_modules::pixel_buffer::pixel_buffer::PixelBuffer;
use crate::core_modules::utils::image_helper::image_helper::load_rgba;
use crate::error::AnalysisError;
use image::RgbaImage;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_DARK_THRESHOLD: Luminance = 192.0;
pub const DEFAULT_BRIGHTEN_DELTA: Channel = 50;

/// Tunables for the analysis pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Luminance (0..255) below which a color is considered dark.
    pub dark_threshold: Luminance,
    /// Amount added to each RGB channel when the average is dark.
    pub brighten_delta: Channel,
    /// Alpha written into the result. Input alpha never influences it.
    pub alpha: Alpha,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            dark_threshold: DEFAULT_DARK_THRESHOLD,
            brighten_delta: DEFAULT_BRIGHTEN_DELTA,
            alpha: OPAQUE,
        }
    }
}

/// Final color of an analysis and its light/dark classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAnalysisResult {
    color: ColorSample,
    is_dark: bool,
}

impl ColorAnalysisResult {
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn color(&self) -> ColorSample {
        self.color
    }

    /// The color as `rgba(R,G,B,A)`.
    pub fn rgba(&self) -> String {
        self.color.to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColorAnalyzer {
    config: AnalyzerConfig,
}

impl ColorAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, pixels: &[u8]) -> Result<ColorAnalysisResult, AnalysisError> {
        let buffer = PixelBuffer::new(pixels)?;
        Ok(self.analyze_buffer(&buffer))
    }

    pub fn analyze_buffer(&self, buffer: &PixelBuffer<'_>) -> ColorAnalysisResult {
        // Stage 1: Average Color
        let mut color = ColorSample::from_pixel(buffer.average_pixel(), self.config.alpha);

        // Stage 2: Luminance Classification
        let mut is_dark = color.is_dark(self.config.dark_threshold);

        // Stage 3: Single-Shot Contrast Correction
        if is_dark {
            debug!(average = %color, "average color is dark, brightening");
            color.brighten(self.config.brighten_delta);
            is_dark = color.is_dark(self.config.dark_threshold);
        }

        debug!(
            pixels = buffer.pixel_count(),
            color = %color,
            is_dark,
            "color analysis complete"
        );

        ColorAnalysisResult { color, is_dark }
    }

    pub fn analyze_image(&self, image: &RgbaImage) -> Result<ColorAnalysisResult, AnalysisError> {
        self.analyze(image.as_raw())
    }

    /// Decodes any format the `image` crate supports and analyzes it as RGBA8.
    pub fn analyze_path(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ColorAnalysisResult, AnalysisError> {
        let image = load_rgba(path)?;
        self.analyze_image(&image)
    }
}

/// Analyzes `pixels` with the default configuration.
pub fn analyze(pixels: &[u8]) -> Result<ColorAnalysisResult, AnalysisError> {
    ColorAnalyzer::default().analyze(pixels)
}
