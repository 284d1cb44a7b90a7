use crate::metadata::ImageMetadata;
use image::{DynamicImage, ImageReader};
use pixshift_common::Result;
use std::io::Cursor;

/// Image decoder for in-memory file bytes
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode raw file bytes, guessing the container format from content.
    ///
    /// The surface keeps the image's natural dimensions; no resampling.
    pub fn decode(bytes: &[u8]) -> Result<(DynamicImage, ImageMetadata)> {
        let img = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()?;

        let metadata = ImageMetadata {
            width: img.width(),
            height: img.height(),
            color_type: img.color(),
            has_alpha: img.color().has_alpha(),
        };

        tracing::debug!(
            "Decoded {}x{} image ({:.2}MB in memory)",
            metadata.width,
            metadata.height,
            metadata.estimated_memory_mb()
        );

        Ok((img, metadata))
    }
}
