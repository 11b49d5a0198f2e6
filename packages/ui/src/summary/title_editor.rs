//! Inline title editing on the upload result card.

pub const TITLE_SAVE_FAILED: &str = "Could not save title. Please try again.";

/// Edit state for a summary title.
///
/// `original` is the last title known to be on the server; `draft` is what
/// the input holds. Cancelling throws the draft away, a confirmed save makes
/// it the new original.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TitleEditor {
    original: String,
    draft: String,
    editing: bool,
    saving: bool,
    error: Option<String>,
}

impl TitleEditor {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            draft: title.clone(),
            original: title,
            ..Self::default()
        }
    }

    pub fn begin(&mut self) {
        self.editing = true;
        self.error = None;
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn cancel(&mut self) {
        self.draft = self.original.clone();
        self.editing = false;
        self.error = None;
    }

    /// Mark a save as started, returning the title to send.
    ///
    /// `None` when not editing or when a save is already running.
    pub fn start_save(&mut self) -> Option<String> {
        if !self.editing || self.saving {
            return None;
        }
        self.saving = true;
        self.error = None;
        Some(self.draft.clone())
    }

    pub fn saved(&mut self) {
        self.original = self.draft.clone();
        self.editing = false;
        self.saving = false;
    }

    /// The save failed: stay in edit mode with the draft intact.
    pub fn failed(&mut self) {
        self.saving = false;
        self.error = Some(TITLE_SAVE_FAILED.to_string());
    }

    /// The title to show outside edit mode.
    pub fn title(&self) -> &str {
        &self.original
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
