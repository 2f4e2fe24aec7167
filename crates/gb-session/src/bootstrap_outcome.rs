use crate::SessionError;

/// How startup resolved. Every variant other than `Restored` leaves the
/// manager `Unauthenticated` (or untouched, for `AlreadyBootstrapped`).
#[derive(Debug)]
pub enum BootstrapOutcome {
    Restored,
    NoSession,
    /// The stored record could not be used; the user just sees sign-in.
    Degraded(SessionError),
    AlreadyBootstrapped,
}

impl BootstrapOutcome {
    pub fn is_restored(&self) -> bool {
        matches!(self, Self::Restored)
    }
}
