//! Media upload: state machine, file preview and the uploader screen.

pub mod pipeline;
pub mod preview;
mod view;

pub use pipeline::{FileKind, UploadPhase, UploadTask};
pub use view::UploaderView;
