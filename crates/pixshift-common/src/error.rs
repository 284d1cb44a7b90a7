/// Unified error type for all pixshift operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Encoder produced no output")]
    EmptyOutput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Conversion failed: {0}")]
    ConversionError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
