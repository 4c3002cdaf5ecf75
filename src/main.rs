//! Terminal client for the domain registration backend.
//!
//! # Usage
//!
//! ```bash
//! # Interactive shell (default)
//! registrar
//!
//! # Check one domain, logging in first
//! registrar check example.com --email mario.rossi@example.com
//!
//! # Create an account
//! registrar signup --name Mario --surname Rossi --email mario.rossi@example.com
//! ```
//!
//! See [`registrar_client::config`] for the environment variables.

use registrar_client::app;
use registrar_client::config::load_from_env;
use registrar_client::domain::entities::NewUser;
use registrar_client::state::AppState;
use registrar_client::telemetry::init_tracing;
use registrar_client::ui::{pages, prompts};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

/// Terminal client for a domain registration backend.
#[derive(Parser)]
#[command(name = "registrar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URI, overriding `API_URI`
    #[arg(long, global = true)]
    api_uri: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive shell
    Shell,

    /// Check whether a domain is available
    Check {
        /// Domain to check (e.g., "example.com")
        domain: String,

        /// Log in with this email before checking
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Create an account
    Signup {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        surname: Option<String>,

        #[arg(short, long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env(cli.api_uri).context("Invalid configuration")?;

    init_tracing(&config);
    config.print_summary();

    let state = AppState::from_config(&config).context("Failed to build the HTTP client")?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => app::run_shell(&state).await?,
        Commands::Check { domain, email } => {
            pages::present(app::check_domain(&state, email.as_deref(), &domain).await);
        }
        Commands::Signup {
            name,
            surname,
            email,
        } => {
            let new_user = match (name, surname, email) {
                (Some(name), Some(surname), Some(email)) => NewUser {
                    name,
                    surname,
                    email,
                },
                _ => prompts::sign_up_form()?,
            };
            pages::present(app::sign_up(&state, new_user).await);
        }
    }

    Ok(())
}
