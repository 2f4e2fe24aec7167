//! Session state machine for the GoBarber mobile client.
//!
//! [`AuthSessionManager`] owns the session and is the only writer of the
//! persisted record and of the API client's credential channel. UI code talks
//! to it through [`SessionContext`].

mod bootstrap_outcome;
mod context;
mod error;
mod manager;
mod observer;

#[cfg(test)]
mod tests;

pub use bootstrap_outcome::BootstrapOutcome;
pub use context::SessionContext;
pub use error::{Result as SessionResult, SessionError};
pub use manager::AuthSessionManager;
pub use observer::{SessionObserver, SessionObservers, SubscriptionId};
