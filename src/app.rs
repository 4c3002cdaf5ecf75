//! Client runtime: the interactive shell and the one-shot commands.

use crate::application::outcome::{FlowOutcome, Page};
use crate::domain::entities::NewUser;
use crate::state::AppState;
use crate::ui::pages;
use anyhow::Result;
use colored::*;

/// Runs the interactive shell, starting on the access page.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read from.
pub async fn run_shell(state: &AppState) -> Result<()> {
    println!("{}", "🌍 Domain registrar".bright_blue().bold());
    tracing::info!(api = %state.client.base_url(), "shell started");

    let mut page = Some(Page::Auth);
    while let Some(current) = page {
        page = pages::show(state, current).await?;
    }

    println!("{}", "Bye!".bright_black());
    Ok(())
}

/// Checks one domain. With an email, logs in first so the session cookie
/// is in place; a refused login is returned as is.
pub async fn check_domain(state: &AppState, email: Option<&str>, domain: &str) -> FlowOutcome {
    if let Some(email) = email {
        let login = state.auth().login(email).await;
        if login.next != Some(Page::Main) {
            return login;
        }
    }
    state.availability().check(domain).await
}

pub async fn sign_up(state: &AppState, new_user: NewUser) -> FlowOutcome {
    state.auth().sign_up(new_user).await
}
