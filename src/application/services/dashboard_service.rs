//! Main page listing: the user's domains and orders.

use crate::application::messages::MessageKey;
use crate::application::outcome::{FlowOutcome, Notice, Page, RenewalContext};
use crate::domain::calendar::Clock;
use crate::domain::entities::{DomainRecord, Order};
use crate::domain::gateways::{DomainGateway, OrderGateway, Reply};
use crate::error::AppError;
use reqwest::StatusCode;
use std::sync::Arc;

/// One row of the domain table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRow {
    pub record: DomainRecord,
    pub renewable: bool,
}

/// Everything the main page shows. Failed loads leave their table empty and add a notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub domains: Vec<DomainRow>,
    pub orders: Vec<Order>,
    pub notices: Vec<Notice>,
}

impl Dashboard {
    pub fn renewable(&self) -> impl Iterator<Item = &DomainRow> {
        self.domains.iter().filter(|row| row.renewable)
    }
}

pub struct DashboardService<D: DomainGateway, O: OrderGateway> {
    domains: Arc<D>,
    orders: Arc<O>,
    clock: Arc<dyn Clock>,
}

impl<D: DomainGateway, O: OrderGateway> DashboardService<D, O> {
    pub fn new(domains: Arc<D>, orders: Arc<O>, clock: Arc<dyn Clock>) -> Self {
        Self {
            domains,
            orders,
            clock,
        }
    }

    /// Loads both tables, one request after the other.
    pub async fn load(&self) -> Dashboard {
        let today = self.clock.today();
        let mut dashboard = Dashboard::default();

        match listing(self.domains.list_user_domains().await, "user_domains") {
            Ok(records) => {
                dashboard.domains = records
                    .into_iter()
                    .map(|record| DomainRow {
                        renewable: record.is_renewable(today),
                        record,
                    })
                    .collect();
            }
            Err(notice) => dashboard.notices.push(notice),
        }

        match listing(self.orders.list_orders().await, "orders") {
            Ok(orders) => dashboard.orders = orders,
            Err(notice) => dashboard.notices.push(notice),
        }

        tracing::debug!(
            domains = dashboard.domains.len(),
            orders = dashboard.orders.len(),
            "dashboard loaded"
        );
        dashboard
    }

    /// Opens the renewal page for `row`. Expired domains cannot be renewed.
    pub fn open_renewal(&self, row: &DomainRow) -> Option<FlowOutcome> {
        row.renewable.then(|| {
            FlowOutcome::navigate(Page::RenewDomain(RenewalContext::new(&row.record.name)))
        })
    }
}

fn listing<T>(
    result: Result<Reply<Vec<T>>, AppError>,
    what: &'static str,
) -> Result<Vec<T>, Notice> {
    match result {
        Ok(reply) if reply.status == StatusCode::OK => Ok(reply.body.unwrap_or_default()),
        Ok(reply) => {
            tracing::warn!(listing = what, status = %reply.status, "listing refused");
            let key = if reply.status == StatusCode::UNAUTHORIZED {
                MessageKey::NotAuthenticated
            } else {
                MessageKey::UnknownError
            };
            Err(Notice::from_key(key))
        }
        Err(e) => {
            tracing::warn!(listing = what, code = e.code(), "listing failed: {e}");
            Err(Notice::from_key(MessageKey::ConnectionFailed))
        }
    }
}
