use crate::application::outcome::RenewalContext;
use crate::application::services::{
    AuthService, AvailabilityService, DashboardService, RegistrationService, RenewalService,
};
use crate::config::Config;
use crate::domain::calendar::{Clock, SystemClock};
use crate::domain::tld::TldSet;
use crate::error::AppError;
use crate::infrastructure::http::ApiClient;
use std::sync::Arc;

/// Shared pieces every page flow is built from.
///
/// Flows are cheap to construct; pages build a fresh one per visit so the
/// renewal flow can be bound to the domain the user picked.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ApiClient>,
    pub tlds: Arc<TldSet>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(client: Arc<ApiClient>, tlds: Arc<TldSet>, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            tlds,
            clock,
        }
    }

    /// Builds the HTTP client and TLD set described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = ApiClient::new(&config.api_uri)?;
        Ok(Self::new(
            Arc::new(client),
            Arc::new(config.tlds()),
            Arc::new(SystemClock),
        ))
    }

    pub fn availability(&self) -> AvailabilityService<ApiClient, ApiClient> {
        AvailabilityService::new(self.client.clone(), self.client.clone(), self.tlds.clone())
    }

    pub fn registration(&self) -> RegistrationService<ApiClient, ApiClient, ApiClient> {
        RegistrationService::new(
            self.client.clone(),
            self.client.clone(),
            self.client.clone(),
            self.tlds.clone(),
            self.clock.clone(),
        )
    }

    pub fn auth(&self) -> AuthService<ApiClient> {
        AuthService::new(self.client.clone())
    }

    pub fn renewal(
        &self,
        context: RenewalContext,
    ) -> RenewalService<ApiClient, ApiClient, ApiClient> {
        RenewalService::new(
            context,
            self.client.clone(),
            self.client.clone(),
            self.client.clone(),
            self.tlds.clone(),
            self.clock.clone(),
        )
    }

    pub fn dashboard(&self) -> DashboardService<ApiClient, ApiClient> {
        DashboardService::new(self.client.clone(), self.client.clone(), self.clock.clone())
    }
}
