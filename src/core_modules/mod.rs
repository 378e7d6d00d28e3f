pub mod color_sample;
pub mod pixel;
pub mod pixel_buffer;
pub mod utils;
