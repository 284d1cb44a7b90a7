pub mod download;
pub mod engine;
pub mod presenter;
pub mod record;
pub mod session;
pub mod store;

pub use download::{download_file_name, prepare_download, Download};
pub use engine::{Codec, ConversionEngine, ImageCodec};
pub use presenter::{NoopPresenter, Presenter};
pub use record::{ConvertedOutput, ImageRecord, RecordId, RecordState};
pub use session::{FileUpload, Session, SharedRecord};
pub use store::{PreviewHandle, PreviewStore};
