//! Renewal of a domain the user already owns.

use crate::application::messages::{DOMAIN_LOOKUP, MessageKey};
use crate::application::outcome::{FlowOutcome, Page, RenewalContext};
use crate::application::services::{
    backend_failure, card_message, load_session_user, purchase_cost,
};
use crate::domain::calendar::{Clock, exceeds_renewal_span, renewed_expiry_year, with_year};
use crate::domain::entities::{NewOrder, OrderType, User};
use crate::domain::gateways::{DomainGateway, OrderGateway, UserGateway};
use crate::domain::payment::PaymentCard;
use crate::domain::tld::TldSet;
use crate::error::AppError;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Arc;

/// The renewal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalRequest {
    pub years: u32,
    pub card: PaymentCard,
}

/// Service behind the renewal page, bound to the domain picked on the main page.
pub struct RenewalService<D: DomainGateway, U: UserGateway, O: OrderGateway> {
    context: RenewalContext,
    domains: Arc<D>,
    users: Arc<U>,
    orders: Arc<O>,
    tlds: Arc<TldSet>,
    clock: Arc<dyn Clock>,
}

impl<D, U, O> RenewalService<D, U, O>
where
    D: DomainGateway,
    U: UserGateway,
    O: OrderGateway,
{
    pub fn new(
        context: RenewalContext,
        domains: Arc<D>,
        users: Arc<U>,
        orders: Arc<O>,
        tlds: Arc<TldSet>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            context,
            domains,
            users,
            orders,
            tlds,
            clock,
        }
    }

    pub fn domain(&self) -> &str {
        &self.context.domain
    }

    pub async fn prefill(&self) -> Result<User, FlowOutcome> {
        load_session_user(self.users.as_ref(), "renewal").await
    }

    /// Renews the bound domain for `request.years`.
    ///
    /// The new expiry year is the current expiry year plus the requested
    /// years, and it may not lie more than ten years past the current
    /// calendar year. The date sent keeps today's month and day.
    pub async fn renew(&self, request: RenewalRequest) -> FlowOutcome {
        if !self.tlds.is_valid(self.domain()) {
            return FlowOutcome::message(MessageKey::InvalidTld);
        }
        let cost = match purchase_cost(request.years) {
            Ok(cost) => cost,
            Err(outcome) => return outcome,
        };
        if let Err(e) = request.card.validate(self.clock.today()) {
            return FlowOutcome::message(card_message(e));
        }

        match self.try_renew(&request, cost).await {
            Ok(outcome) => outcome,
            Err(e) => backend_failure("renewal", e),
        }
    }

    async fn try_renew(
        &self,
        request: &RenewalRequest,
        cost: u32,
    ) -> Result<FlowOutcome, AppError> {
        let domain = self.domain();
        let today = self.clock.today();

        let lookup = self.domains.get_domain(domain).await?;
        let record = match (lookup.status, lookup.body) {
            (StatusCode::OK, Some(record)) => record,
            (status, _) => return Ok(FlowOutcome::message(DOMAIN_LOOKUP.lookup(status))),
        };

        let new_year = renewed_expiry_year(record.expire_date, request.years);
        if exceeds_renewal_span(new_year, today) {
            tracing::info!(domain, new_year, "renewal beyond allowed span");
            return Ok(FlowOutcome::message(MessageKey::RenewalTooFar));
        }

        let new_expiry = with_year(today, new_year).ok_or_else(|| {
            AppError::internal("Renewal year out of range", json!({ "year": new_year }))
        })?;

        let renewed = self.domains.renew_domain(domain, new_expiry).await?;
        if !renewed.is_success() {
            tracing::info!(domain, status = %renewed.status, "renewal refused");
            return Ok(FlowOutcome::message(MessageKey::RenewalFailed));
        }

        tracing::info!(domain, %new_expiry, cost, "domain renewed");

        let order = self
            .orders
            .create_order(NewOrder {
                domain: domain.to_string(),
                date: today,
                order_type: OrderType::Renewal,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::FixedClock;
    use crate::domain::entities::DomainRecord;
    use crate::domain::gateways::{MockDomainGateway, MockOrderGateway, MockUserGateway, Reply};
    use chrono::NaiveDate;

    type Service = RenewalService<MockDomainGateway, MockUserGateway, MockOrderGateway>;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(domain: &str, domains: MockDomainGateway, orders: MockOrderGateway) -> Service {
        RenewalService::new(
            RenewalContext::new(domain),
            Arc::new(domains),
            Arc::new(MockUserGateway::new()),
            Arc::new(orders),
            Arc::new(TldSet::default()),
            Arc::new(FixedClock(date(2024, 6, 1))),
        )
    }

    fn request(years: u32) -> RenewalRequest {
        RenewalRequest {
            years,
            card: PaymentCard::new("4111111111111111", "2026-12-31", "999"),
        }
    }

    fn existing(domains: &mut MockDomainGateway, expire_date: NaiveDate) {
        domains
            .expect_get_domain()
            .withf(|d| d == "mine.com")
            .times(1)
            .returning(move |_| {
                Ok(Reply::ok(DomainRecord {
                    name: "mine.com".to_string(),
                    owner: "me@example.com".to_string(),
                    registration_date: Some(date(2020, 1, 1)),
                    expire_date,
                }))
            });
    }

    #[tokio::test]
    async fn test_successful_renewal_sends_date_and_order() {
        let mut domains = MockDomainGateway::new();
        existing(&mut domains, date(2026, 3, 15));
        domains
            .expect_renew_domain()
            .withf(|d, expiry| d == "mine.com" && *expiry == date(2028, 6, 1))
            .times(1)
            .returning(|_, _| Ok(Reply::empty(StatusCode::OK)));

        let mut orders = MockOrderGateway::new();
        orders
            .expect_create_order()
            .withf(|o| o.domain == "mine.com" && o.order_type == OrderType::Renewal && o.cost == 20)
            .times(1)
            .returning(|_| Ok(Reply::empty(StatusCode::CREATED)));

        let service = service("mine.com", domains, orders);

        let outcome = service.renew(request(2)).await;

        assert_eq!(outcome.next, Some(Page::Main));
    }

    #[tokio::test]
    async fn test_renewal_past_ten_years_rejected_locally() {
        let mut domains = MockDomainGateway::new();
        existing(&mut domains, date(2030, 1, 1));

        let service = service("mine.com", domains, MockOrderGateway::new());

        let outcome = service.renew(request(5)).await;

        assert_eq!(outcome.key(), Some(MessageKey::RenewalTooFar));
    }

    #[tokio::test]
    async fn test_renewal_at_ten_year_boundary_allowed() {
        let mut domains = MockDomainGateway::new();
        existing(&mut domains, date(2030, 1, 1));
        domains
            .expect_renew_domain()
            .withf(|_, expiry| *expiry == date(2034, 6, 1))
            .times(1)
            .returning(|_, _| Ok(Reply::empty(StatusCode::NO_CONTENT)));

        let mut orders = MockOrderGateway::new();
        orders
            .expect_create_order()
            .times(1)
            .returning(|_| Ok(Reply::empty(StatusCode::CREATED)));

        let service = service("mine.com", domains, orders);

        let outcome = service.renew(request(4)).await;

        assert_eq!(outcome.next, Some(Page::Main));
    }

    #[tokio::test]
    async fn test_duration_off_offer_rejected_without_requests() {
        let service = service("mine.com", MockDomainGateway::new(), MockOrderGateway::new());

        for years in [0, 11, 500_000_000, u32::MAX] {
            let outcome = service.renew(request(years)).await;

            assert_eq!(outcome.key(), Some(MessageKey::InvalidDuration));
            assert!(outcome.next.is_none());
        }
    }

    #[tokio::test]
    async fn test_unknown_domain() {
        let mut domains = MockDomainGateway::new();
        domains
            .expect_get_domain()
            .times(1)
            .returning(|_| Ok(Reply::empty(StatusCode::NOT_FOUND)));

        let service = service("mine.com", domains, MockOrderGateway::new());

        let outcome = service.renew(request(1)).await;

        assert_eq!(outcome.key(), Some(MessageKey::DomainNotFound));
    }

    #[tokio::test]
    async fn test_lookup_error_is_generic_renewal_error() {
        let mut domains = MockDomainGateway::new();
        domains
            .expect_get_domain()
            .times(1)
            .returning(|_| Ok(Reply::empty(StatusCode::SERVICE_UNAVAILABLE)));

        let service = service("mine.com", domains, MockOrderGateway::new());

        let outcome = service.renew(request(1)).await;

        assert_eq!(outcome.key(), Some(MessageKey::RenewalFailed));
    }

    #[tokio::test]
    async fn test_refused_renewal_creates_no_order() {
        let mut domains = MockDomainGateway::new();
        existing(&mut domains, date(2025, 1, 1));
        domains
            .expect_renew_domain()
            .times(1)
            .returning(|_, _| Ok(Reply::empty(StatusCode::BAD_REQUEST)));

        let service = service("mine.com", domains, MockOrderGateway::new());

        let outcome = service.renew(request(1)).await;

        assert_eq!(outcome.key(), Some(MessageKey::RenewalFailed));
        assert!(outcome.next.is_none());
    }

    #[tokio::test]
    async fn test_card_checks_run_before_lookup() {
        let service = service("mine.com", MockDomainGateway::new(), MockOrderGateway::new());
        let mut form = request(1);
        form.card.number = "1234".to_string();

        let outcome = service.renew(form).await;

        assert_eq!(outcome.key(), Some(MessageKey::CardNumberLength));
    }

    #[tokio::test]
    async fn test_invalid_tld_in_context() {
        let service = service("mine.xyz", MockDomainGateway::new(), MockOrderGateway::new());

        let outcome = service.renew(request(1)).await;

        assert_eq!(outcome.key(), Some(MessageKey::InvalidTld));
    }
}
