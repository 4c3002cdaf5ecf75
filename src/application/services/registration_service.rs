//! New domain purchase: validate, re-check, create the domain, then the order.

use crate::application::messages::{AVAILABILITY, DOMAIN_CREATION, MessageKey};
use crate::application::outcome::{FlowOutcome, Page};
use crate::application::services::{
    backend_failure, card_message, load_session_user, purchase_cost,
};
use crate::domain::calendar::{Clock, add_years};
use crate::domain::entities::{NewDomain, NewOrder, OrderType, User};
use crate::domain::gateways::{DomainGateway, OrderGateway, UserGateway};
use crate::domain::payment::PaymentCard;
use crate::domain::tld::TldSet;
use crate::error::AppError;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Arc;

/// The registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPurchase {
    pub domain: String,
    pub years: u32,
    pub owner_email: String,
    pub card: PaymentCard,
}

/// Service behind the "register a new domain" page.
///
/// The availability re-check and the creation request are two separate
/// calls, so another user can win the race in between. The backend reports
/// that as `409` on creation and the purchase simply fails.
pub struct RegistrationService<D: DomainGateway, U: UserGateway, O: OrderGateway> {
    domains: Arc<D>,
    users: Arc<U>,
    orders: Arc<O>,
    tlds: Arc<TldSet>,
    clock: Arc<dyn Clock>,
}

impl<D, U, O> RegistrationService<D, U, O>
where
    D: DomainGateway,
    U: UserGateway,
    O: OrderGateway,
{
    pub fn new(
        domains: Arc<D>,
        users: Arc<U>,
        orders: Arc<O>,
        tlds: Arc<TldSet>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            domains,
            users,
            orders,
            tlds,
            clock,
        }
    }

    /// Loads the session user shown on the form; their email becomes the owner.
    pub async fn prefill(&self) -> Result<User, FlowOutcome> {
        load_session_user(self.users.as_ref(), "registration").await
    }

    /// Runs the purchase.
    ///
    /// Local checks run in form order (TLD, duration, card expiry, CVV, card
    /// number) and stop the flow before any request. On success the user is sent back to
    /// the main page.
    pub async fn register(&self, purchase: DomainPurchase) -> FlowOutcome {
        let today = self.clock.today();

        if !self.tlds.is_valid(&purchase.domain) {
            return FlowOutcome::message(MessageKey::InvalidTld);
        }
        let cost = match purchase_cost(purchase.years) {
            Ok(cost) => cost,
            Err(outcome) => return outcome,
        };
        if let Err(e) = purchase.card.validate(today) {
            return FlowOutcome::message(card_message(e));
        }

        match self.try_register(&purchase, cost).await {
            Ok(outcome) => outcome,
            Err(e) => backend_failure("registration", e),
        }
    }

    async fn try_register(
        &self,
        purchase: &DomainPurchase,
        cost: u32,
    ) -> Result<FlowOutcome, AppError> {
        let domain = purchase.domain.as_str();

        let availability = self.domains.check_availability(domain).await?;
        match availability.status {
            StatusCode::NO_CONTENT => {}
            StatusCode::OK => return Ok(FlowOutcome::message(MessageKey::DomainAlreadyRegistered)),
            status => return Ok(FlowOutcome::message(AVAILABILITY.lookup(status))),
        }

        let today = self.clock.today();
        let expire_date = add_years(today, purchase.years).ok_or_else(|| {
            AppError::internal(
                "Registration period out of range",
                json!({ "years": purchase.years }),
            )
        })?;

        let created = self
            .domains
            .create_domain(NewDomain {
                name: domain.to_string(),
                registration_date: today,
                expire_date,
                owner: purchase.owner_email.clone(),
            })
            .await?;

        if created.status != StatusCode::CREATED {
            tracing::info!(domain, status = %created.status, "domain creation refused");
            return Ok(FlowOutcome::message(DOMAIN_CREATION.lookup(created.status)));
        }

        tracing::info!(domain, %expire_date, cost, "domain registered");

        let order = self
            .orders
            .create_order(NewOrder {
                domain: domain.to_string(),
                date: today,
                order_type: OrderType::Register,
                cost,
            })
            .await;
        match order {
            Ok(reply) if reply.is_success() => {}
            Ok(reply) => tracing::warn!(domain, status = %reply.status, "order not recorded"),
            Err(e) => tracing::warn!(domain, "order not recorded: {e}"),
        }

        Ok(FlowOutcome::navigate(Page::Main))
    }
}
