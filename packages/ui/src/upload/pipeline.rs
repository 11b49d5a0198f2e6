//! Upload state machine.
//!
//! ```text
//! Idle ──begin──▶ Uploading ──timer──▶ Summarizing
//!                  │    │                 │    │
//!                  │    └───────resolve───┼────┴──▶ Resolved ──reset──▶ Idle
//!                  └────────fail──────────┴───────▶ Failed ──begin──▶ Uploading
//! ```
//!
//! `Uploading` and `Summarizing` are the same in-flight request; the only
//! difference is the label, flipped by a ticketed [`PhaseTimer`]. Settling the
//! request in either direction cancels the timer, so a late tick can never
//! move a settled upload back to "summarizing".

use api::{UploadFile, UploadResult};

use crate::phase_timer::{PhaseTimer, TimerTicket};

/// Which preview element to show for the selected file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileKind {
    #[default]
    None,
    Video,
    Audio,
}

impl FileKind {
    /// `video/*` is a video; every other type is treated as audio.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("video") {
            FileKind::Video
        } else {
            FileKind::Audio
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Summarizing,
    Resolved,
    Failed,
}

impl UploadPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, UploadPhase::Uploading | UploadPhase::Summarizing)
    }

    /// Loader label while in flight.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            UploadPhase::Uploading => Some("Uploading file..."),
            UploadPhase::Summarizing => Some("Summarizing content..."),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadTask {
    selected: Option<UploadFile>,
    preview_url: Option<String>,
    kind: FileKind,
    phase: UploadPhase,
    result: Option<UploadResult>,
    error: Option<String>,
    timer: PhaseTimer,
}

impl UploadTask {
    /// Select a file for upload, with the object URL created for its preview.
    ///
    /// Returns the preview URL that is no longer referenced and should be
    /// revoked. While a request is in flight the selection is refused and the
    /// new URL itself is handed back.
    pub fn select(&mut self, file: UploadFile, preview_url: Option<String>) -> Option<String> {
        if self.phase.is_in_flight() {
            return preview_url;
        }
        self.kind = FileKind::from_content_type(&file.content_type);
        self.selected = Some(file);
        self.error = None;
        std::mem::replace(&mut self.preview_url, preview_url)
    }

    /// Start the upload of the selected file.
    ///
    /// Returns `None` (and changes nothing) without a selection or while a
    /// request is already in flight, so a second submit never sends a second
    /// request. Otherwise returns the file to send and the ticket the label
    /// timer must present when it elapses.
    pub fn begin(&mut self) -> Option<(UploadFile, TimerTicket)> {
        if !matches!(self.phase, UploadPhase::Idle | UploadPhase::Failed) {
            return None;
        }
        let file = self.selected.clone()?;
        self.phase = UploadPhase::Uploading;
        self.error = None;
        Some((file, self.timer.arm()))
    }

    /// The label timer elapsed. Returns `true` if the label changed.
    pub fn timer_elapsed(&mut self, ticket: TimerTicket) -> bool {
        if self.timer.fire(ticket) && self.phase == UploadPhase::Uploading {
            self.phase = UploadPhase::Summarizing;
            true
        } else {
            false
        }
    }

    /// The request succeeded. The selected file is discarded in favour of the
    /// result; returns the preview URL to revoke.
    pub fn resolve(&mut self, result: UploadResult) -> Option<String> {
        self.timer.cancel();
        self.phase = UploadPhase::Resolved;
        self.result = Some(result);
        self.error = None;
        self.selected = None;
        self.kind = FileKind::None;
        self.preview_url.take()
    }

    /// The request failed. The selection is kept so the user can retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.timer.cancel();
        self.phase = UploadPhase::Failed;
        self.result = None;
        self.error = Some(message.into());
    }

    /// Back to an empty selector. Returns the preview URL to revoke.
    ///
    /// The timer's ticket counter survives, so a ticket issued before the
    /// reset can never match one issued after it.
    pub fn reset(&mut self) -> Option<String> {
        let mut timer = std::mem::take(&mut self.timer);
        timer.cancel();
        let stale = self.preview_url.take();
        *self = Self {
            timer,
            ..Self::default()
        };
        stale
    }

    /// Whether the file selector (rather than the loader or the result) shows.
    pub fn shows_selector(&self) -> bool {
        matches!(self.phase, UploadPhase::Idle | UploadPhase::Failed)
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn selected(&self) -> Option<&UploadFile> {
        self.selected.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture() -> UploadFile {
        UploadFile::new("lecture.mp4", "video/mp4", vec![0u8; 16])
    }

    fn selected_task() -> UploadTask {
        let mut task = UploadTask::default();
        task.select(lecture(), Some("blob:1".to_string()));
        task
    }

    #[test]
    fn test_kind_from_content_type() {
        assert_eq!(FileKind::from_content_type("video/mp4"), FileKind::Video);
        assert_eq!(FileKind::from_content_type("audio/mpeg"), FileKind::Audio);
        assert_eq!(FileKind::from_content_type(""), FileKind::Audio);
    }

    #[test]
    fn test_begin_without_selection_is_noop() {
        let mut task = UploadTask::default();
        assert!(task.begin().is_none());
        assert_eq!(task.phase(), UploadPhase::Idle);
    }

    #[test]
    fn test_second_begin_while_in_flight_is_refused() {
        let mut task = selected_task();
        let (file, _) = task.begin().unwrap();
        assert_eq!(file.name, "lecture.mp4");
        assert_eq!(task.phase(), UploadPhase::Uploading);
        assert!(task.begin().is_none());
    }

    #[test]
    fn test_timer_flips_label_to_summarizing() {
        let mut task = selected_task();
        let (_, ticket) = task.begin().unwrap();
        assert_eq!(task.phase().label(), Some("Uploading file..."));
        assert!(task.timer_elapsed(ticket));
        assert_eq!(task.phase(), UploadPhase::Summarizing);
        assert_eq!(task.phase().label(), Some("Summarizing content..."));
    }

    #[test]
    fn test_late_tick_after_resolve_is_ignored() {
        let mut task = selected_task();
        let (_, ticket) = task.begin().unwrap();
        let stale = task.resolve(UploadResult {
            id: Some(7),
            ..UploadResult::default()
        });
        assert_eq!(stale.as_deref(), Some("blob:1"));
        assert!(!task.timer_elapsed(ticket));
        assert_eq!(task.phase(), UploadPhase::Resolved);
        assert_eq!(task.result().and_then(|r| r.id), Some(7));
        assert!(task.selected().is_none());
        assert!(!task.shows_selector());
    }

    #[test]
    fn test_failure_keeps_selection_and_shows_selector() {
        let mut task = selected_task();
        let (_, ticket) = task.begin().unwrap();
        task.fail("Upload failed");
        assert!(!task.timer_elapsed(ticket));
        assert_eq!(task.phase(), UploadPhase::Failed);
        assert!(task.shows_selector());
        assert!(task.result().is_none());
        assert_eq!(task.error(), Some("Upload failed"));
        assert_eq!(task.selected().map(|f| f.name.as_str()), Some("lecture.mp4"));

        // Retrying is allowed and clears the error.
        assert!(task.begin().is_some());
        assert!(task.error().is_none());
    }

    #[test]
    fn test_select_replaces_preview_and_refuses_in_flight() {
        let mut task = selected_task();
        let audio = UploadFile::new("talk.mp3", "audio/mpeg", vec![1]);
        assert_eq!(
            task.select(audio, Some("blob:2".to_string())).as_deref(),
            Some("blob:1")
        );
        assert_eq!(task.kind(), FileKind::Audio);

        task.begin().unwrap();
        let refused = task.select(lecture(), Some("blob:3".to_string()));
        assert_eq!(refused.as_deref(), Some("blob:3"));
        assert_eq!(task.preview_url(), Some("blob:2"));
        assert_eq!(task.kind(), FileKind::Audio);
    }

    #[test]
    fn test_reset_discards_everything_but_ticket_history() {
        let mut task = selected_task();
        let (_, old_ticket) = task.begin().unwrap();
        task.resolve(UploadResult::default());
        assert!(task.reset().is_none());
        assert_eq!(task.phase(), UploadPhase::Idle);
        assert!(task.result().is_none());

        task.select(lecture(), None);
        let (_, new_ticket) = task.begin().unwrap();
        assert_ne!(old_ticket, new_ticket);
        assert!(!task.timer_elapsed(old_ticket));
        assert_eq!(task.phase(), UploadPhase::Uploading);
    }
}
