use crate::record::ImageRecord;
use crate::store::PreviewStore;
use pixshift_common::{ConversionMode, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A named, ready-to-save conversion result
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: String,
    pub bytes: Arc<[u8]>,
}

impl Download {
    /// Write the bytes into `dir`, returning the full path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Build the download for a converted record; `None` until conversion has
/// succeeded or once the output handle has been released
pub fn prepare_download(
    record: &ImageRecord,
    mode: ConversionMode,
    store: &PreviewStore,
) -> Option<Download> {
    let output = record.converted()?;
    let bytes = store.resolve(output.handle)?;
    Some(Download {
        file_name: download_file_name(&record.file_name, mode),
        bytes,
    })
}

/// `<original-basename>.<target-ext>`, where the basename strips the last
/// dot-delimited extension
pub fn download_file_name(original: &str, mode: ConversionMode) -> String {
    format!(
        "{}.{}",
        strip_extension(original),
        mode.target().extension()
    )
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        // The tail after the last dot must be a plain, non-empty extension
        Some(idx) if idx + 1 < name.len() && !name[idx + 1..].contains('/') => &name[..idx],
        _ => name,
    }
}
