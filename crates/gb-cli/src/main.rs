//! gb - GoBarber session CLI
//!
//! Drives the same session core the mobile app uses, one operation per run.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and persist the session under ./.gobarber/
//! gb sign-in --email ana@gobarber.com --password secret
//!
//! # Who is signed in?
//! gb whoami --pretty
//!
//! # Change the display name
//! gb update-profile --name "Ana Maria" --email ana@gobarber.com
//! ```

use gb_cli::Cli;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match gb_cli::run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
