pub mod avatar_upload;
pub mod credentials;
pub mod profile_update;
pub mod session;
pub mod session_state;
pub mod user;
