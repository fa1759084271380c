use anyhow::{anyhow, Context, Result};
use image::{DynamicImage, GrayImage, ImageFormat};
use std::io::Cursor;

use super::SpectrogramRingBuffer;

/// Render the spectrogram as an 8-bit grayscale PNG.
///
/// Row 0 of the buffer (most negative velocity) becomes the bottom line of
/// the image, so flow towards the probe is drawn above the baseline.
pub fn encode_png(buffer: &SpectrogramRingBuffer) -> Result<Vec<u8>> {
    let (width, height) = (buffer.width(), buffer.height());
    let intensities = buffer.intensities();

    let mut pixels = Vec::with_capacity(width * height);
    for row in (0..height).rev() {
        pixels.extend(
            intensities[row * width..(row + 1) * width]
                .iter()
                .map(|&v| (v * 255.0).round() as u8),
        );
    }

    let image = GrayImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", width, height))?;

    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(image)
        .write_to(&mut bytes, ImageFormat::Png)
        .context("Failed to encode spectrogram as PNG")?;

    Ok(bytes.into_inner())
}
