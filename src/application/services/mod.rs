//! Page flows for the application layer.
//!
//! Each service is one page's validate / call / interpret sequence. Services
//! never return errors: transport failures and unexpected statuses both end up
//! as a [`FlowOutcome`] carrying a notice.

pub mod auth_service;
pub mod availability_service;
pub mod dashboard_service;
pub mod registration_service;
pub mod renewal_service;

pub use auth_service::{AccessMode, AuthForms, AuthService};
pub use availability_service::AvailabilityService;
pub use dashboard_service::{Dashboard, DashboardService, DomainRow};
pub use registration_service::{DomainPurchase, RegistrationService};
pub use renewal_service::{RenewalRequest, RenewalService};

use crate::application::messages::MessageKey;
use crate::application::outcome::{FlowOutcome, Notice, Page};
use crate::domain::entities::{User, format_cost};
use crate::domain::gateways::UserGateway;
use crate::domain::payment::{CardError, calculate_cost};
use crate::error::AppError;
use reqwest::StatusCode;

/// Turns a failed backend call into a notice and logs it.
pub(crate) fn backend_failure(flow: &'static str, err: AppError) -> FlowOutcome {
    tracing::warn!(
        flow,
        code = err.code(),
        details = %err.details(),
        "backend call failed: {err}"
    );
    let key = match err {
        AppError::Decode { .. } | AppError::Internal { .. } => MessageKey::UnknownError,
        AppError::Transport(_) | AppError::Endpoint(_) => MessageKey::ConnectionFailed,
    };
    FlowOutcome::message(key)
}

pub(crate) fn card_message(err: CardError) -> MessageKey {
    match err {
        CardError::Expired => MessageKey::CardExpired,
        CardError::CvvLength => MessageKey::CvvLength,
        CardError::NumberLength => MessageKey::CardNumberLength,
    }
}

/// Cost of a purchase, or the notice for a duration that is not on offer.
pub(crate) fn purchase_cost(years: u32) -> Result<u32, FlowOutcome> {
    calculate_cost(years).ok_or_else(|| FlowOutcome::message(MessageKey::InvalidDuration))
}

/// Cost line shown next to the duration picker, e.g. `Cost: 30€`.
pub fn cost_preview(years: u32) -> String {
    match calculate_cost(years) {
        Some(cost) => format!("Cost: {}", format_cost(cost)),
        None => "Cost: -".to_string(),
    }
}

/// Loads the session user for the purchase pages.
///
/// An expired session sends the user back to the login page.
pub(crate) async fn load_session_user<U: UserGateway>(
    users: &U,
    flow: &'static str,
) -> Result<User, FlowOutcome> {
    let reply = users
        .current_user()
        .await
        .map_err(|e| backend_failure(flow, e))?;

    match (reply.status, reply.body) {
        (StatusCode::OK, Some(user)) => Ok(user),
        (StatusCode::UNAUTHORIZED, _) => Err(FlowOutcome {
            notice: Some(Notice::from_key(MessageKey::NotAuthenticated)),
            next: Some(Page::Auth),
        }),
        (status, _) => {
            tracing::warn!(flow, %status, "session user lookup refused");
            Err(FlowOutcome::message(MessageKey::UnknownError))
        }
    }
}
