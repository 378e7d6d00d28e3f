// THEORY:
// The acrylic backdrop is a heavily blurred copy of the wallpaper. The blur is a
// stack blur: every output pixel is a triangle-weighted mean of the `2r + 1` pixels
// around it, which looks close to a Gaussian but costs O(1) per pixel regardless of
// radius thanks to a sliding window. It runs as two separable passes, rows then
// columns, and only touches R, G and B. Alpha is left as it was.
//
// Edges are extended by repeating the border pixel, so a uniform image blurs to
// itself exactly.
//
// A radius of 180 on a full-screen image is too slow for an async executor thread,
// so `spawn_acrylic_blur` moves the work onto tokio's blocking pool.

use crate::error::BlurError;
use image::RgbaImage;
use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_ACRYLIC_RADIUS: u32 = 180;
pub const MAX_RADIUS: u32 = 254;

type Rgb = [u8; 3];

/// Blurs the RGB channels of `image` in place.
///
/// `radius` is clamped to `MAX_RADIUS`; a radius of 0 leaves the image unchanged.
pub fn stack_blur_rgb(image: &mut RgbaImage, radius: u32) {
    let radius = radius.min(MAX_RADIUS) as usize;
    let (width, height) = (image.width() as usize, image.height() as usize);
    if radius == 0 || width == 0 || height == 0 {
        return;
    }

    let mut line: Vec<Rgb> = Vec::with_capacity(width.max(height));
    let mut blurred: Vec<Rgb> = Vec::with_capacity(width.max(height));
    let buffer: &mut [u8] = image;

    // Horizontal pass
    for y in 0..height {
        line.clear();
        line.extend((0..width).map(|x| read_rgb(buffer, y * width + x)));
        blur_line(&line, radius, &mut blurred);
        for (x, rgb) in blurred.iter().enumerate() {
            write_rgb(buffer, y * width + x, *rgb);
        }
    }

    // Vertical pass
    for x in 0..width {
        line.clear();
        line.extend((0..height).map(|y| read_rgb(buffer, y * width + x)));
        blur_line(&line, radius, &mut blurred);
        for (y, rgb) in blurred.iter().enumerate() {
            write_rgb(buffer, y * width + x, *rgb);
        }
    }
}

/// Runs `stack_blur_rgb` on the blocking pool and hands the image back through the handle.
///
/// Dropping the handle detaches the task. Must be called from within a tokio runtime.
pub fn spawn_acrylic_blur(mut image: RgbaImage, radius: u32) -> JoinHandle<RgbaImage> {
    tokio::task::spawn_blocking(move || {
        debug!(width = image.width(), height = image.height(), radius, "acrylic blur started");
        stack_blur_rgb(&mut image, radius);
        debug!("acrylic blur finished");
        image
    })
}

pub async fn acrylic_blur(image: RgbaImage, radius: u32) -> Result<RgbaImage, BlurError> {
    Ok(spawn_acrylic_blur(image, radius).await?)
}

#[inline]
fn read_rgb(buffer: &[u8], pixel_index: usize) -> Rgb {
    let i = pixel_index * 4;
    [buffer[i], buffer[i + 1], buffer[i + 2]]
}

#[inline]
fn write_rgb(buffer: &mut [u8], pixel_index: usize, rgb: Rgb) {
    let i = pixel_index * 4;
    buffer[i..i + 3].copy_from_slice(&rgb);
}

/// One-dimensional stack blur with border clamping.
///
/// The weighted sum at `x` is `sum(x) = Σ (r + 1 - |i|) * v(x + i)` for `i` in `-r..=r`.
/// Moving one step right subtracts the left half (`x - r ..= x`) and adds the right
/// half (`x + 1 ..= x + r + 1`), both of which slide by one element.
fn blur_line(line: &[Rgb], radius: usize, out: &mut Vec<Rgb>) {
    out.clear();
    let len = line.len();
    let last = len as isize - 1;
    let at = |j: isize| -> Rgb { line[j.clamp(0, last) as usize] };

    let r = radius as u64;
    let divisor = (r + 1) * (r + 1);
    let mut sum = [0u64; 3];
    let mut sum_out = [0u64; 3];
    let mut sum_in = [0u64; 3];

    let first = at(0);
    for c in 0..3 {
        let v = first[c] as u64;
        sum[c] = v * (r + 1) * (r + 2) / 2;
        sum_out[c] = v * (r + 1);
    }
    for j in 1..=radius + 1 {
        let v = at(j as isize);
        let weight = (radius + 1 - j) as u64;
        for c in 0..3 {
            sum_in[c] += v[c] as u64;
            sum[c] += weight * v[c] as u64;
        }
    }

    for x in 0..len as isize {
        out.push([
            (sum[0] / divisor) as u8,
            (sum[1] / divisor) as u8,
            (sum[2] / divisor) as u8,
        ]);

        let leaving = at(x - radius as isize);
        let entering = at(x + 1);
        let incoming = at(x + radius as isize + 2);
        for c in 0..3 {
            sum[c] = sum[c] + sum_in[c] - sum_out[c];
            sum_out[c] = sum_out[c] + entering[c] as u64 - leaving[c] as u64;
            sum_in[c] = sum_in[c] + incoming[c] as u64 - entering[c] as u64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn uniform_image_is_unchanged() {
        let mut image = RgbaImage::from_pixel(17, 9, Rgba([120, 64, 200, 255]));
        let original = image.clone();
        stack_blur_rgb(&mut image, DEFAULT_ACRYLIC_RADIUS);
        assert_eq!(image, original);
    }

    #[test]
    fn zero_radius_is_a_no_op() {
        let mut image =
            RgbaImage::from_fn(4, 4, |x, y| Rgba([(x * 60) as u8, (y * 60) as u8, 7, 255]));
        let original = image.clone();
        stack_blur_rgb(&mut image, 0);
        assert_eq!(image, original);
    }

    #[test]
    fn spreads_a_single_bright_pixel_with_triangle_weights() {
        let mut image = RgbaImage::from_pixel(3, 1, Rgba([0, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
        stack_blur_rgb(&mut image, 1);
        // Weights 1-2-1 over 4.
        assert_eq!(image.get_pixel(0, 0).0, [63, 63, 63, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [127, 127, 127, 255]);
        assert_eq!(image.get_pixel(2, 0).0, [63, 63, 63, 255]);
    }

    #[test]
    fn alpha_channel_is_untouched() {
        let mut image = RgbaImage::from_fn(8, 8, |x, y| {
            Rgba([(x * 30) as u8, (y * 30) as u8, 90, (x * 8 + y) as u8])
        });
        let alphas: Vec<u8> = image.pixels().map(|p| p.0[3]).collect();
        stack_blur_rgb(&mut image, 3);
        let after: Vec<u8> = image.pixels().map(|p| p.0[3]).collect();
        assert_eq!(alphas, after);
    }

    #[test]
    fn blur_stays_within_input_range() {
        let mut image = RgbaImage::from_fn(12, 5, |x, _| {
            if x < 6 { Rgba([40, 40, 40, 255]) } else { Rgba([200, 200, 200, 255]) }
        });
        stack_blur_rgb(&mut image, 4);
        for pixel in image.pixels() {
            assert!((40..=200).contains(&pixel.0[0]));
        }
        assert!(image.get_pixel(5, 2).0[0] > 40);
        assert!(image.get_pixel(6, 2).0[0] < 200);
    }

    #[test]
    fn single_pixel_image_is_unchanged() {
        let mut image = RgbaImage::from_pixel(1, 1, Rgba([12, 200, 99, 42]));
        stack_blur_rgb(&mut image, DEFAULT_ACRYLIC_RADIUS);
        assert_eq!(image.get_pixel(0, 0).0, [12, 200, 99, 42]);
    }

    /// Direct triangle-weighted filter, one pass per axis, border pixels repeated.
    fn reference_blur(image: &RgbaImage, radius: u32) -> RgbaImage {
        let r = radius as i64;
        let divisor = ((r + 1) * (r + 1)) as u64;
        let (width, height) = (image.width() as i64, image.height() as i64);

        let pass = |source: &RgbaImage, horizontal: bool| {
            let mut target = source.clone();
            for y in 0..height {
                for x in 0..width {
                    let mut sum = [0u64; 3];
                    for i in -r..=r {
                        let weight = (r + 1 - i.abs()) as u64;
                        let (sx, sy) = if horizontal {
                            ((x + i).clamp(0, width - 1), y)
                        } else {
                            (x, (y + i).clamp(0, height - 1))
                        };
                        let p = source.get_pixel(sx as u32, sy as u32).0;
                        for c in 0..3 {
                            sum[c] += weight * p[c] as u64;
                        }
                    }
                    let out = target.get_pixel_mut(x as u32, y as u32);
                    for c in 0..3 {
                        out.0[c] = (sum[c] / divisor) as u8;
                    }
                }
            }
            target
        };

        pass(&pass(image, true), false)
    }

    #[test]
    fn sliding_window_matches_direct_filter() {
        let gradient = RgbaImage::from_fn(23, 11, |x, y| {
            Rgba([(x * 11) as u8, (y * 23) as u8, ((x * y * 7) % 256) as u8, 255])
        });
        for radius in [1, 2, 5, 30, DEFAULT_ACRYLIC_RADIUS] {
            let mut blurred = gradient.clone();
            stack_blur_rgb(&mut blurred, radius);
            assert_eq!(blurred, reference_blur(&gradient, radius), "radius {radius}");
        }
    }

    #[tokio::test]
    async fn background_blur_returns_the_image() {
        let image = RgbaImage::from_pixel(32, 32, Rgba([10, 20, 30, 255]));
        let blurred = acrylic_blur(image.clone(), DEFAULT_ACRYLIC_RADIUS).await.unwrap();
        assert_eq!(blurred, image);
    }
}
