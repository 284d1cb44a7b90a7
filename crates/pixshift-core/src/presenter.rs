use crate::record::ImageRecord;

/// Rendering collaborator. The engine signals; the presenter decides what to
/// draw. A signal for a record no longer on screen must be treated as a
/// harmless no-op.
pub trait Presenter: Send + Sync {
    /// Called after every state transition on `record`
    fn on_record_updated(&self, record: &ImageRecord);

    /// Called once per batch run, after every selected record has resolved
    fn on_batch_complete(&self);
}

/// Presenter for headless callers; ignores every signal
#[derive(Debug, Default)]
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn on_record_updated(&self, _record: &ImageRecord) {}

    fn on_batch_complete(&self) {}
}
