// THEORY:
// The `PixelBuffer` module is the spatial pooling step of the color analysis. It wraps
// a borrowed RGBA8888 byte slice and knows how to summarize it, the same way a chunk
// summarizes its block of pixels with `average_pixel`.
//
// Key architectural principles:
// 1.  **Validate at the edge**: A buffer is checked once, on construction. Empty
//     buffers and buffers whose length is not a multiple of 4 never reach the
//     averaging loop, so there is no division by zero and no truncated last pixel.
// 2.  **Borrow, don't own**: The buffer only ever reads the caller's slice. Nothing
//     is copied or mutated.
// 3.  **Data Container**: It averages itself and nothing else. Classification and
//     contrast correction belong to the analyzer.

pub mod pixel_buffer {
    use crate::core_modules::pixel::pixel::{Byte, CHANNELS, Pixel};
    use crate::error::AnalysisError;

    /// A validated, read-only view over interleaved RGBA8888 samples.
    #[derive(Debug, Clone, Copy)]
    pub struct PixelBuffer<'a> {
        bytes: &'a [Byte],
    }

    impl<'a> PixelBuffer<'a> {
        pub fn new(bytes: &'a [Byte]) -> Result<Self, AnalysisError> {
            if bytes.is_empty() {
                return Err(AnalysisError::EmptyBuffer);
            }
            if bytes.len() % CHANNELS != 0 {
                return Err(AnalysisError::MalformedBuffer { len: bytes.len() });
            }
            Ok(Self { bytes })
        }

        pub fn pixel_count(&self) -> usize {
            self.bytes.len() / CHANNELS
        }

        /// Pixels in buffer order.
        pub fn pixels(&self) -> impl Iterator<Item = Pixel> + 'a {
            // Construction guarantees whole quadruples, so `from_rgba` never drops one.
            self.bytes.chunks_exact(CHANNELS).filter_map(Pixel::from_rgba)
        }

        /// Floored mean of every channel across the buffer.
        pub fn average_pixel(&self) -> Pixel {
            let num_pixels = self.pixel_count() as u64;

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            let mut sum_a = 0u64;

            for pixel in self.pixels() {
                sum_r += pixel.red as u64;
                sum_g += pixel.green as u64;
                sum_b += pixel.blue as u64;
                sum_a += pixel.alpha as u64;
            }

            // Integer division floors; the mean of u8 values always fits back into a u8.
            Pixel {
                red: (sum_r / num_pixels) as u8,
                green: (sum_g / num_pixels) as u8,
                blue: (sum_b / num_pixels) as u8,
                alpha: (sum_a / num_pixels) as u8,
            }
        }
    }
}
