pub mod image_helper {
    use image::{ImageEncoder, RgbaImage};
    use std::path::Path;

    /// Decodes any supported format into an RGBA8888 image.
    pub fn load_rgba(path: impl AsRef<Path>) -> Result<RgbaImage, image::error::ImageError> {
        Ok(image::open(path)?.to_rgba8())
    }

    pub fn save_png(
        path: impl AsRef<Path>,
        image: &RgbaImage,
    ) -> Result<(), image::error::ImageError> {
        let output = std::io::BufWriter::new(std::fs::File::create(path)?);
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgba8,
        )?;

        Ok(())
    }
}
