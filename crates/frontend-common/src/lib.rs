pub mod components;
pub mod config;
pub mod error;
pub mod services;
pub mod session;
pub mod storage;

pub use components::Spinner;
pub use config::{RefreshPolicy, SessionConfig};
pub use error::SessionError;
pub use session::{use_session, use_user, SessionContext, SessionProvider, SessionState, UserProfile};
