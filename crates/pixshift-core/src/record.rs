use crate::store::PreviewHandle;
use std::sync::Arc;
use uuid::Uuid;

pub type RecordId = Uuid;

/// Per-record conversion status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    Pending,
    Converting,
    Converted,
    Failed,
}

/// Successful conversion output; the handle and its byte length always
/// travel together
#[derive(Debug, Clone, Copy)]
pub struct ConvertedOutput {
    pub handle: PreviewHandle,
    pub size_bytes: u64,
}

/// One uploaded image and its conversion state.
///
/// `state` and `converted` are mutated only by the conversion engine; the
/// session releases the owned handles when the record leaves the collection.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub id: RecordId,
    pub file_name: String,
    pub mime_type: String,
    pub original_size_bytes: u64,
    pub(crate) source: Arc<[u8]>,
    pub(crate) original_preview: PreviewHandle,
    pub(crate) converted: Option<ConvertedOutput>,
    pub(crate) state: RecordState,
}

impl ImageRecord {
    pub(crate) fn new(
        file_name: String,
        mime_type: String,
        source: Arc<[u8]>,
        original_preview: PreviewHandle,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name,
            mime_type,
            original_size_bytes: source.len() as u64,
            source,
            original_preview,
            converted: None,
            state: RecordState::Pending,
        }
    }

    pub fn state(&self) -> RecordState {
        self.state
    }

    /// Handle for rendering the original image
    pub fn original_preview(&self) -> PreviewHandle {
        self.original_preview
    }

    /// Present exactly when `state() == RecordState::Converted`
    pub fn converted(&self) -> Option<ConvertedOutput> {
        self.converted
    }

    pub fn converted_size_bytes(&self) -> Option<u64> {
        self.converted.map(|output| output.size_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PreviewStore;

    #[test]
    fn test_new_record_is_pending() {
        let store = PreviewStore::new();
        let source: Arc<[u8]> = vec![0u8; 128].into();
        let preview = store.create(Arc::clone(&source));
        let record = ImageRecord::new("cat.jpg".into(), "image/jpeg".into(), source, preview);

        assert_eq!(record.state(), RecordState::Pending);
        assert_eq!(record.original_size_bytes, 128);
        assert!(record.converted().is_none());
        assert!(record.converted_size_bytes().is_none());
    }

    #[test]
    fn test_record_ids_are_unique() {
        let store = PreviewStore::new();
        let source: Arc<[u8]> = vec![1u8].into();
        let a = ImageRecord::new(
            "a.png".into(),
            "image/png".into(),
            Arc::clone(&source),
            store.create(Arc::clone(&source)),
        );
        let b = ImageRecord::new(
            "b.png".into(),
            "image/png".into(),
            Arc::clone(&source),
            store.create(source),
        );
        assert_ne!(a.id, b.id);
    }
}
