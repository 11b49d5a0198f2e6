//! Rendering of structured summaries and the post-upload result card.

mod result;
mod sections;
mod title_editor;

pub use result::UploadResultView;
pub use sections::{SummarySections, EMPTY_SUMMARY};
pub use title_editor::{TitleEditor, TITLE_SAVE_FAILED};
