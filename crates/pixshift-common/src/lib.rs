pub mod error;
pub mod format;
pub mod quality;

pub use error::{Error, Result};
pub use format::{ConversionMode, MediaFormat};
pub use quality::Quality;
