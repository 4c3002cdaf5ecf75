//! Sign-up and login.

use crate::application::messages::{LOGIN, MessageKey, SIGNUP};
use crate::application::outcome::{FlowOutcome, Page};
use crate::application::services::backend_failure;
use crate::domain::entities::NewUser;
use crate::domain::gateways::UserGateway;
use reqwest::StatusCode;
use std::sync::Arc;

/// Which of the two forms on the access page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessMode {
    Register,
    #[default]
    Login,
}

impl AccessMode {
    pub fn toggled(self) -> Self {
        match self {
            AccessMode::Register => AccessMode::Login,
            AccessMode::Login => AccessMode::Register,
        }
    }
}

/// Visibility state of the register and login sections. Exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthForms {
    mode: AccessMode,
}

impl AuthForms {
    pub fn show(&mut self, mode: AccessMode) {
        self.mode = mode;
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    pub fn register_visible(&self) -> bool {
        self.mode == AccessMode::Register
    }

    pub fn login_visible(&self) -> bool {
        self.mode == AccessMode::Login
    }

    /// A completed sign-up hands over to the login form.
    pub fn follow(&mut self, outcome: &FlowOutcome) {
        if outcome.key() == Some(MessageKey::SignupComplete) {
            self.show(AccessMode::Login);
        }
    }
}

/// Account creation and email-only login.
///
/// Login sends nothing but the email address. The backend answers `200` for
/// any registered email and sets the session cookie.
pub struct AuthService<U: UserGateway> {
    users: Arc<U>,
}

impl<U: UserGateway> AuthService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Registers a new account. The user stays on the access page either way.
    pub async fn sign_up(&self, new_user: NewUser) -> FlowOutcome {
        let email = new_user.email.clone();
        match self.users.register(new_user).await {
            Ok(reply) => {
                tracing::info!(%email, status = %reply.status, "sign-up answered");
                FlowOutcome::message(SIGNUP.lookup(reply.status))
            }
            Err(e) => backend_failure("sign_up", e),
        }
    }

    /// Logs in by email. Success opens the main page.
    pub async fn login(&self, email: &str) -> FlowOutcome {
        let email = email.trim();
        match self.users.login(email).await {
            Ok(reply) if reply.status == StatusCode::OK => {
                tracing::info!(email, "logged in");
                FlowOutcome::navigate(Page::Main)
            }
            Ok(reply) => {
                tracing::info!(email, status = %reply.status, "login refused");
                FlowOutcome::message(LOGIN.lookup(reply.status))
            }
            Err(e) => backend_failure("login", e),
        }
    }
}
