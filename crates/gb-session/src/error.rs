use std::panic::Location;

use error_location::ErrorLocation;
use gb_client::ClientError;
use gb_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read stored session: {source} {location}")]
    StorageRead {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Failed to persist session: {source} {location}")]
    StorageWrite {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Stored session is corrupted: {source} {location}")]
    Deserialization {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Authentication request failed: {source} {location}")]
    AuthEndpoint {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Profile request failed: {source} {location}")]
    ProfileEndpoint {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("No authenticated session {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Session is still being restored {location}")]
    NotReady { location: ErrorLocation },
}

impl SessionError {
    /// Classifies a failed read: unusable data vs. a failing medium.
    #[track_caller]
    pub fn from_read(source: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.is_corruption() {
            Self::Deserialization { source, location }
        } else {
            Self::StorageRead { source, location }
        }
    }

    #[track_caller]
    pub fn storage_write(source: StoreError) -> Self {
        Self::StorageWrite {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth_endpoint(source: ClientError) -> Self {
        Self::AuthEndpoint {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_endpoint(source: ClientError) -> Self {
        Self::ProfileEndpoint {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_ready() -> Self {
        Self::NotReady {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Title and message for the dismissible alert shown to the user.
    pub fn alert(&self) -> (&'static str, &'static str) {
        match self {
            Self::AuthEndpoint { .. } => (
                "Authentication error",
                "Could not sign in, check your credentials",
            ),
            Self::ProfileEndpoint { .. } | Self::NotAuthenticated { .. } => (
                "Profile update error",
                "Could not update your profile, try again",
            ),
            Self::StorageWrite { source, .. }
            | Self::StorageRead { source, .. }
            | Self::Deserialization { source, .. } => ("Storage error", source.recovery_hint()),
            Self::NotReady { .. } => ("Please wait", "Your session is still being restored"),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
