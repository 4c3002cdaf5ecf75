//! Domain availability checks from the main page.

use crate::application::messages::{AVAILABILITY, MessageKey};
use crate::application::outcome::{FlowOutcome, Notice, NoticeLevel};
use crate::application::services::backend_failure;
use crate::domain::entities::DomainRecord;
use crate::domain::gateways::{DomainGateway, UserGateway};
use crate::domain::tld::TldSet;
use crate::error::AppError;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Arc;

/// Answers "can I register this domain?" and, when the answer is no, who holds it.
pub struct AvailabilityService<D: DomainGateway, U: UserGateway> {
    domains: Arc<D>,
    users: Arc<U>,
    tlds: Arc<TldSet>,
}

impl<D: DomainGateway, U: UserGateway> AvailabilityService<D, U> {
    pub fn new(domains: Arc<D>, users: Arc<U>, tlds: Arc<TldSet>) -> Self {
        Self {
            domains,
            users,
            tlds,
        }
    }

    /// Checks `domain` against the backend.
    ///
    /// An unsupported TLD is rejected before any request is made. A taken
    /// domain triggers a second request for the owner's name.
    pub async fn check(&self, domain: &str) -> FlowOutcome {
        let domain = domain.trim();
        if !self.tlds.is_valid(domain) {
            return FlowOutcome::message(MessageKey::InvalidTld);
        }

        match self.try_check(domain).await {
            Ok(outcome) => outcome,
            Err(e) => backend_failure("availability", e),
        }
    }

    async fn try_check(&self, domain: &str) -> Result<FlowOutcome, AppError> {
        let reply = self.domains.check_availability(domain).await?;
        tracing::debug!(domain, status = %reply.status, "availability answered");

        match reply.status {
            StatusCode::NO_CONTENT => Ok(FlowOutcome::notify(Notice::composed(
                NoticeLevel::Success,
                MessageKey::DomainAvailable,
                format!("The domain {domain} {}", MessageKey::DomainAvailable.text()),
            ))),
            StatusCode::OK => {
                let record = reply.body.ok_or_else(|| {
                    AppError::decode(
                        "Taken domain without registration data",
                        json!({ "domain": domain }),
                    )
                })?;
                Ok(FlowOutcome::notify(self.describe_registration(domain, &record).await))
            }
            status => Ok(FlowOutcome::message(AVAILABILITY.lookup(status))),
        }
    }

    /// Composes the "already registered" message with the registrant's details.
    ///
    /// When the owner lookup fails the message still names the email and expiry.
    async fn describe_registration(&self, domain: &str, record: &DomainRecord) -> Notice {
        let owner = match self.users.find_by_email(&record.owner).await {
            Ok(reply) => reply.body_if(StatusCode::OK),
            Err(e) => {
                tracing::warn!(owner = %record.owner, "owner lookup failed: {e}");
                None
            }
        };

        let mut text = format!("The domain {domain} is already registered.\nRegistered by:\n");
        if let Some(user) = owner {
            text.push_str(&format!("Name: {}\nSurname: {}\n", user.name, user.surname));
        }
        text.push_str(&format!(
            "Email: {}\nExpiry date: {}\n",
            record.owner, record.expire_date
        ));

        Notice::composed(
            NoticeLevel::Warning,
            MessageKey::DomainAlreadyRegistered,
            text,
        )
    }
}
