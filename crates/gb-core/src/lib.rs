//! Domain types shared by the session crates.

pub mod models;

#[cfg(test)]
mod tests;

pub use models::avatar_upload::AvatarUpload;
pub use models::credentials::Credentials;
pub use models::profile_update::ProfileUpdate;
pub use models::session::Session;
pub use models::session_state::{SessionSnapshot, SessionState};
pub use models::user::User;
