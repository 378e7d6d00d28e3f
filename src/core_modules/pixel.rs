// THEORY (Single-Pixel Brightness):
// The `Pixel` module is the smallest unit the color analysis works with. It is a
// "dumb" data container for one RGBA8888 quadruple plus the one heuristic the
// backdrop logic needs from a single pixel: perceived luminance.
//
// Luminance uses the Rec. 601 luma weights (0.299, 0.587, 0.114) on the raw
// 0..255 channel values. No gamma decoding happens here; the light/dark threshold
// downstream is tuned against gamma-encoded values.
//
// Anything that needs more than one pixel (averages, blurs) lives in
// `pixel_buffer` or higher.

pub mod pixel {
    pub type Byte = u8;
    pub type Channel = Byte;
    pub type Luminance = f64;

    /// Number of interleaved channels per pixel (R, G, B, A).
    pub const CHANNELS: usize = 4;

    pub const RED_WEIGHT: Luminance = 0.299;
    pub const GREEN_WEIGHT: Luminance = 0.587;
    pub const BLUE_WEIGHT: Luminance = 0.114;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Builds a pixel from an exact 4-byte RGBA slice, `None` for any other length.
        pub fn from_rgba(bytes: &[Byte]) -> Option<Self> {
            match bytes {
                [r, g, b, a] => Some(Pixel::new(*r, *g, *b, *a)),
                _ => None,
            }
        }

        /// Luminance estimate (Rec. 601 luma) on the 0..255 scale.
        pub fn luminance(&self) -> Luminance {
            luma(self.red as f64, self.green as f64, self.blue as f64)
        }
    }

    /// Rec. 601 weighted sum shared by `Pixel` and `ColorSample`.
    #[inline]
    pub fn luma(red: f64, green: f64, blue: f64) -> Luminance {
        RED_WEIGHT * red + GREEN_WEIGHT * green + BLUE_WEIGHT * blue
    }
}
