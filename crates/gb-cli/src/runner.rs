use crate::{Cli, CliError, CliResult, Commands, logger};

use gb_client::{ApiClient, CredentialChannel};
use gb_config::Config;
use gb_core::{AvatarUpload, ProfileUpdate, User};
use gb_session::{AuthSessionManager, BootstrapOutcome, SessionContext, SessionError};
use gb_store::FileStore;

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

/// What `sign-in`, `sign-out` and `whoami` print.
#[derive(Debug, Serialize)]
struct SessionView {
    signed_in: bool,
    user: Option<User>,
}

impl SessionView {
    fn of(context: &SessionContext) -> Self {
        let snapshot = context.snapshot();
        Self {
            signed_in: snapshot.is_signed_in(),
            user: snapshot.current_user,
        }
    }
}

/// The session context plus the API client it drives.
pub struct Connection {
    pub context: SessionContext,
    pub api: Arc<ApiClient>,
}

/// One CLI invocation: load config, start logging, restore the session and
/// run the command against it.
pub async fn run(cli: Cli) -> CliResult<Value> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path_in(&config_dir),
        config.logging.colored,
    )?;
    config.log_summary();

    let connection = connect(&config, &config_dir);

    match connection.context.bootstrap().await {
        BootstrapOutcome::Degraded(e) => {
            warn!("Continuing signed out: {}", e.alert().1);
        }
        outcome => info!("Bootstrap finished: restored={}", outcome.is_restored()),
    }

    execute(&connection, cli.command).await
}

/// Wires the file store, API client and session manager for `config`.
pub fn connect(config: &Config, config_dir: &Path) -> Connection {
    let credentials = CredentialChannel::new();
    let api = Arc::new(ApiClient::new(&config.api.base_url, credentials.clone()));
    let store = Arc::new(FileStore::new(config.storage_path_in(config_dir)));
    let manager = AuthSessionManager::new(store, api.clone(), credentials);

    Connection {
        context: SessionContext::new(Arc::new(manager)),
        api,
    }
}

/// Runs one command on an already bootstrapped context.
pub async fn execute(connection: &Connection, command: Commands) -> CliResult<Value> {
    let context = &connection.context;

    match command {
        Commands::SignIn { email, password } => {
            context.sign_in(&email, &password).await?;
            Ok(serde_json::to_value(SessionView::of(context))?)
        }

        Commands::SignOut => {
            context.sign_out().await;
            Ok(serde_json::to_value(SessionView::of(context))?)
        }

        Commands::Whoami => Ok(serde_json::to_value(SessionView::of(context))?),

        Commands::UpdateProfile {
            name,
            email,
            old_password,
            password,
            password_confirmation,
        } => {
            let mut update = ProfileUpdate::new(name, email);
            if let Some(old_password) = old_password {
                update = update.with_password_change(
                    old_password,
                    password.unwrap_or_default(),
                    password_confirmation.unwrap_or_default(),
                );
            }

            let user = context.update_profile(&update).await?;
            Ok(serde_json::to_value(user)?)
        }

        Commands::Get { path } => Ok(connection.api.get(&path).await?),

        Commands::Avatar { path } => {
            let user = context
                .current_user()
                .ok_or_else(SessionError::not_authenticated)?;
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| CliError::io(&path, e))?;

            let user = context
                .update_avatar(&AvatarUpload::jpeg_for(&user, bytes))
                .await?;
            Ok(serde_json::to_value(user)?)
        }
    }
}
