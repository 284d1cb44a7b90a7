use image::DynamicImage;
use pixshift_common::{Error, MediaFormat, Result};
use std::io::Cursor;

/// Image encoder producing in-memory target-format bytes
pub struct ImageEncoder;

impl ImageEncoder {
    /// Encode a pixel surface to `format`.
    ///
    /// `quality` is a fraction in [0, 1] and applies only to lossy targets;
    /// lossless targets ignore it.
    pub fn encode(img: &DynamicImage, format: MediaFormat, quality: f32) -> Result<Vec<u8>> {
        let data = match format {
            MediaFormat::Webp => Self::encode_webp(img, quality)?,
            MediaFormat::Png => Self::encode_png(img)?,
        };

        if data.is_empty() {
            return Err(Error::EmptyOutput);
        }

        tracing::debug!("Encoded {} bytes of {}", data.len(), format);
        Ok(data)
    }

    fn encode_webp(img: &DynamicImage, quality: f32) -> Result<Vec<u8>> {
        // libwebp takes quality on a 0-100 scale
        let quality = quality.clamp(0.0, 1.0) * 100.0;
        tracing::debug!("WebP encode quality: {:.0}", quality);

        let rgba = img.to_rgba8();
        let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());
        Ok(encoder.encode(quality).to_vec())
    }

    fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)?;
        Ok(buffer)
    }
}
