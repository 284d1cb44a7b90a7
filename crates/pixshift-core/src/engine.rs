use crate::presenter::Presenter;
use crate::record::{ConvertedOutput, RecordState};
use crate::session::SharedRecord;
use crate::store::PreviewStore;
use image::DynamicImage;
use pixshift_common::{ConversionMode, Error, MediaFormat, Quality, Result};
use pixshift_formats::{ImageDecoder, ImageEncoder};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Decode/encode collaborator seam for the engine
pub trait Codec: Send + Sync {
    /// Turn raw file bytes into a pixel surface at natural dimensions
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage>;

    /// Turn a pixel surface into target-format bytes; `quality` is a
    /// fraction in [0, 1], ignored by lossless targets
    fn encode(&self, surface: &DynamicImage, target: MediaFormat, quality: f32) -> Result<Vec<u8>>;
}

/// Default codec, backed by the formats crate
pub struct ImageCodec;

impl Codec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage> {
        let (img, _metadata) = ImageDecoder::decode(bytes)?;
        Ok(img)
    }

    fn encode(&self, surface: &DynamicImage, target: MediaFormat, quality: f32) -> Result<Vec<u8>> {
        ImageEncoder::encode(surface, target, quality)
    }
}

/// Main conversion engine.
///
/// Drives decode → draw → encode for single records and whole batches, and
/// owns every transition of the record state machine.
pub struct ConversionEngine {
    store: Arc<PreviewStore>,
    presenter: Arc<dyn Presenter>,
    codec: Arc<dyn Codec>,
}

impl ConversionEngine {
    pub fn new(store: Arc<PreviewStore>, presenter: Arc<dyn Presenter>) -> Self {
        Self::with_codec(store, presenter, Arc::new(ImageCodec))
    }

    pub fn with_codec(
        store: Arc<PreviewStore>,
        presenter: Arc<dyn Presenter>,
        codec: Arc<dyn Codec>,
    ) -> Self {
        Self {
            store,
            presenter,
            codec,
        }
    }

    /// Convert one record into the mode's target format.
    ///
    /// A record already `Converting` is left alone. Failure (unreadable
    /// source, or an encoder yielding nothing) parks the record in `Failed`
    /// with no partial output; nothing propagates to the caller.
    pub async fn convert_one(&self, record: &SharedRecord, mode: ConversionMode, quality: Quality) {
        let source = {
            let mut rec = record.lock();
            if rec.state == RecordState::Converting {
                tracing::debug!("Record {} already converting, ignoring", rec.id);
                return;
            }
            // A manual re-convert replaces the previous output
            if let Some(previous) = rec.converted.take() {
                self.store.release(previous.handle);
            }
            rec.state = RecordState::Converting;
            Arc::clone(&rec.source)
        };
        self.presenter.on_record_updated(&record.lock());

        let codec = Arc::clone(&self.codec);
        let target = mode.target();
        let fraction = quality.fraction();
        let result = tokio::task::spawn_blocking(move || {
            let img = codec.decode(&source)?;
            // 1:1 draw onto the intermediate surface; output dimensions
            // equal input dimensions
            let surface = DynamicImage::ImageRgba8(img.to_rgba8());
            codec.encode(&surface, target, fraction)
        })
        .await
        .map_err(|e| Error::ConversionError(format!("Worker task failed: {e}")))
        .and_then(|encoded| encoded);

        {
            let mut rec = record.lock();
            match result {
                Ok(bytes) => {
                    let size_bytes = bytes.len() as u64;
                    let handle = self.store.create(bytes);
                    rec.converted = Some(ConvertedOutput { handle, size_bytes });
                    rec.state = RecordState::Converted;
                    tracing::info!(
                        "Converted {} to {} ({} → {} bytes)",
                        rec.file_name,
                        target,
                        rec.original_size_bytes,
                        size_bytes
                    );
                }
                Err(e) => {
                    rec.converted = None;
                    rec.state = RecordState::Failed;
                    tracing::warn!("Conversion of {} failed: {}", rec.file_name, e);
                }
            }
        }
        self.presenter.on_record_updated(&record.lock());
    }

    /// Convert every record that is not already `Converted`; `Pending` and
    /// `Failed` records are both eligible, so a batch run retries failures.
    ///
    /// All selected conversions run as overlapping asynchronous operations
    /// with no admission control. A completion counter tracks resolution;
    /// `Presenter::on_batch_complete` fires exactly once when it hits zero.
    /// An empty selection returns immediately with no signal.
    pub async fn convert_all(
        &self,
        records: &[SharedRecord],
        mode: ConversionMode,
        quality: Quality,
    ) {
        let eligible: Vec<SharedRecord> = records
            .iter()
            .filter(|r| r.lock().state != RecordState::Converted)
            .cloned()
            .collect();
        if eligible.is_empty() {
            tracing::debug!("No records eligible for conversion");
            return;
        }

        let total = eligible.len();
        tracing::info!("Converting batch of {} record(s)", total);

        let remaining = AtomicUsize::new(total);
        let conversions = eligible.iter().map(|record| {
            let remaining = &remaining;
            async move {
                self.convert_one(record, mode, quality).await;
                let left = remaining.fetch_sub(1, Ordering::SeqCst) - 1;
                tracing::debug!("Batch progress: {}/{} resolved", total - left, total);
            }
        });
        futures::future::join_all(conversions).await;

        self.presenter.on_batch_complete();
    }
}
