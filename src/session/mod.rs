mod connect_session;
mod content_tab;

pub use connect_session::{ConnectSession, SessionError};
pub use content_tab::ContentTab;
