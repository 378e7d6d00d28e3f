// THEORY:
// `ColorSample` is the working color the analyzer mutates. Unlike `Pixel` it carries
// a fractional alpha (0.0..1.0) because its only consumer is a CSS-style `rgba(...)`
// string. RGB stays integral and every adjustment saturates at 255.

pub mod color_sample {
    use crate::core_modules::pixel::pixel::{Channel, Luminance, Pixel, luma};
    use std::fmt;

    pub type Alpha = f32;

    pub const OPAQUE: Alpha = 1.0;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ColorSample {
        pub r: Channel,
        pub g: Channel,
        pub b: Channel,
        pub a: Alpha,
    }

    impl ColorSample {
        pub fn new(r: Channel, g: Channel, b: Channel, a: Alpha) -> Self {
            Self { r, g, b, a }
        }

        pub fn opaque(r: Channel, g: Channel, b: Channel) -> Self {
            Self::new(r, g, b, OPAQUE)
        }

        /// Takes RGB from `pixel`; the pixel's own alpha is discarded in favor of `a`.
        pub fn from_pixel(pixel: Pixel, a: Alpha) -> Self {
            Self::new(pixel.red, pixel.green, pixel.blue, a)
        }

        /// Adds `delta` to each of R, G and B, clamping at 255.
        pub fn brighten(&mut self, delta: Channel) {
            self.r = self.r.saturating_add(delta);
            self.g = self.g.saturating_add(delta);
            self.b = self.b.saturating_add(delta);
        }

        pub fn brightened(mut self, delta: Channel) -> Self {
            self.brighten(delta);
            self
        }

        pub fn luminance(&self) -> Luminance {
            luma(self.r as f64, self.g as f64, self.b as f64)
        }

        /// Strict comparison: a luminance equal to `threshold` is light.
        pub fn is_dark(&self, threshold: Luminance) -> bool {
            self.luminance() < threshold
        }
    }

    impl fmt::Display for ColorSample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}
