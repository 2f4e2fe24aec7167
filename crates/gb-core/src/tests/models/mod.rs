mod profile_update;
mod session_state;
mod user;
