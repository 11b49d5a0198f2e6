mod layout;
pub use layout::AppLayout;

mod protected;
pub use protected::Protected;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod upload;
pub use upload::Upload;

mod summaries;
pub use summaries::{Summaries, SummaryDetail};

mod account;
pub use account::{Admin, Profile};
