mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::{ConfirmDialog, NoticeDialog};

mod summary_list;
pub use summary_list::{DeleteNotice, SummaryListState, SummaryListView, DELETE_FAILED};

mod summary_detail;
pub use summary_detail::SummaryDetailView;

mod profile;
pub use profile::{ProfileView, LIMIT_REACHED};

mod admin;
pub use admin::{AdminView, api_calls_badge, method_badge, role_badge};
