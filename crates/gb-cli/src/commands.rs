use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Sign in and persist the session
    SignIn {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Drop the persisted session
    SignOut,

    /// Show the restored session
    Whoami,

    /// Update name and email, optionally changing the password
    UpdateProfile {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Current password; required to set a new one
        #[arg(long, requires_all = ["password", "password_confirmation"])]
        old_password: Option<String>,

        #[arg(long, requires = "old_password")]
        password: Option<String>,

        #[arg(long, requires = "old_password")]
        password_confirmation: Option<String>,
    },

    /// GET an API path with the stored session's token (e.g. /appointments/me)
    Get {
        path: String,
    },

    /// Upload a JPEG as the signed-in user's avatar
    Avatar {
        /// Path to the image file
        path: PathBuf,
    },
}
