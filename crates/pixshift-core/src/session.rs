use crate::record::{ImageRecord, RecordId};
use crate::store::PreviewStore;
use parking_lot::Mutex;
use pixshift_common::{ConversionMode, Quality};
use std::sync::Arc;

/// A file offered for conversion
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Records are shared with in-flight conversions; a record removed from the
/// session stays alive until its conversion resolves.
pub type SharedRecord = Arc<Mutex<ImageRecord>>;

/// In-memory batch: the ordered record collection plus the two session
/// settings (conversion direction and lossy quality)
pub struct Session {
    records: Vec<SharedRecord>,
    mode: ConversionMode,
    quality: Quality,
    store: Arc<PreviewStore>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_store(Arc::new(PreviewStore::new()))
    }

    pub fn with_store(store: Arc<PreviewStore>) -> Self {
        Self {
            records: Vec::new(),
            mode: ConversionMode::default(),
            quality: Quality::default(),
            store,
        }
    }

    pub fn store(&self) -> Arc<PreviewStore> {
        Arc::clone(&self.store)
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn set_quality(&mut self, quality: Quality) {
        self.quality = quality;
    }

    /// Switch conversion direction. The whole batch is discarded on a real
    /// change: the target format differs, so nothing converted carries over.
    pub fn set_mode(&mut self, mode: ConversionMode) {
        if mode == self.mode {
            return;
        }
        tracing::info!(
            "Conversion mode changed to {:?}, discarding {} record(s)",
            mode,
            self.records.len()
        );
        self.mode = mode;
        self.clear();
    }

    /// Offer a file to the session. Returns the new record's id, or `None`
    /// when the intake filter for the current mode rejects the file.
    pub fn add_file(&mut self, file: FileUpload) -> Option<RecordId> {
        if !self.mode.accepts(&file.mime_type) {
            tracing::debug!(
                "Rejected {} ({}) in {:?} mode",
                file.name,
                file.mime_type,
                self.mode
            );
            return None;
        }

        let source: Arc<[u8]> = file.bytes.into();
        let preview = self.store.create(Arc::clone(&source));
        let record = ImageRecord::new(file.name, file.mime_type, source, preview);
        let id = record.id;
        self.records.push(Arc::new(Mutex::new(record)));
        Some(id)
    }

    /// Remove one record, releasing its renderable handles
    pub fn remove(&mut self, id: RecordId) -> bool {
        let Some(pos) = self.records.iter().position(|r| r.lock().id == id) else {
            return false;
        };
        let record = self.records.remove(pos);
        self.release_handles(&record);
        true
    }

    /// Drop every record, releasing all handles
    pub fn clear(&mut self) {
        for record in std::mem::take(&mut self.records) {
            self.release_handles(&record);
        }
    }

    fn release_handles(&self, record: &SharedRecord) {
        let mut rec = record.lock();
        self.store.release(rec.original_preview);
        if let Some(output) = rec.converted.take() {
            self.store.release(output.handle);
        }
    }

    /// Cloned handles to the records, in insertion order
    pub fn records(&self) -> Vec<SharedRecord> {
        self.records.clone()
    }

    pub fn record(&self, id: RecordId) -> Option<SharedRecord> {
        self.records
            .iter()
            .find(|r| r.lock().id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, mime: &str) -> FileUpload {
        FileUpload {
            name: name.into(),
            mime_type: mime.into(),
            bytes: vec![0u8; 64],
        }
    }

    #[test]
    fn test_intake_accepts_any_image_in_webp_mode() {
        let mut session = Session::new();
        assert!(session.add_file(upload("a.jpg", "image/jpeg")).is_some());
        assert!(session.add_file(upload("b.png", "image/png")).is_some());
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_intake_rejects_non_webp_in_png_mode() {
        let mut session = Session::new();
        session.set_mode(ConversionMode::ToPng);

        assert!(session.add_file(upload("a.jpg", "image/jpeg")).is_none());
        assert!(session.add_file(upload("b.webp", "image/webp")).is_some());
        assert_eq!(session.len(), 1);
        // Rejection leaves no trace in the store either
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_remove_releases_preview() {
        let mut session = Session::new();
        let id = session.add_file(upload("a.png", "image/png")).unwrap();
        assert_eq!(session.store().len(), 1);

        assert!(session.remove(id));
        assert!(session.is_empty());
        assert!(session.store().is_empty());
        assert!(!session.remove(id));
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut session = Session::new();
        session.add_file(upload("a.png", "image/png"));
        session.add_file(upload("b.png", "image/png"));

        session.clear();
        assert!(session.is_empty());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_mode_switch_discards_batch() {
        let mut session = Session::new();
        session.add_file(upload("a.jpg", "image/jpeg"));
        session.add_file(upload("b.png", "image/png"));

        session.set_mode(ConversionMode::ToPng);
        assert_eq!(session.len(), 0);
        assert!(session.store().is_empty());
        assert_eq!(session.mode(), ConversionMode::ToPng);
    }

    #[test]
    fn test_same_mode_is_noop() {
        let mut session = Session::new();
        session.add_file(upload("a.jpg", "image/jpeg"));

        session.set_mode(ConversionMode::ToWebp);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut session = Session::new();
        session.add_file(upload("first.png", "image/png"));
        session.add_file(upload("second.png", "image/png"));

        let names: Vec<String> = session
            .records()
            .iter()
            .map(|r| r.lock().file_name.clone())
            .collect();
        assert_eq!(names, ["first.png", "second.png"]);
    }
}
