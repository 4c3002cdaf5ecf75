//! HTTP implementation of the gateway traits.

use crate::domain::entities::{DomainRecord, NewDomain, NewOrder, NewUser, Order, User};
use crate::domain::gateways::{DomainGateway, OrderGateway, Reply, UserGateway};
use crate::error::{AppError, map_json_error};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::collections::HashMap;
use url::Url;

/// Client for the registration backend.
///
/// One instance holds one cookie jar, so the session cookie set by
/// `login` or `register` is sent on every later call made through it.
/// Share it behind an `Arc` between the flows.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    /// Creates a client for the backend rooted at `api_uri`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Endpoint`] if `api_uri` is not an absolute URL, or
    /// [`AppError::Transport`] if the HTTP client cannot be built.
    pub fn new(api_uri: &str) -> Result<Self, AppError> {
        let mut base = Url::parse(api_uri)?;
        if base.cannot_be_a_base() {
            return Err(AppError::internal(
                "API URI cannot be used as a base",
                json!({ "api_uri": api_uri }),
            ));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = Client::builder().cookie_store(true).build()?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    ///
    /// A trailing `""` segment yields a trailing slash (`domains/`).
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::internal(
                    "API URI cannot be used as a base",
                    json!({ "api_uri": self.base.as_str() }),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends `request` and decodes the body only when the status is `body_status`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &'static str,
        body_status: StatusCode,
    ) -> Result<Reply<T>, AppError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(endpoint, %status, "backend answered");

        if status != body_status {
            return Ok(Reply::empty(status));
        }

        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).map_err(|e| map_json_error(e, endpoint))?;
        Ok(Reply::with_body(status, body))
    }

    /// Sends `request` and keeps only the status.
    async fn send(
        &self,
        request: RequestBuilder,
        endpoint: &'static str,
    ) -> Result<Reply<()>, AppError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(endpoint, %status, "backend answered");
        Ok(Reply::empty(status))
    }

    /// Fetches a listing answered as a JSON object keyed by record id.
    async fn fetch_listing<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &'static str,
    ) -> Result<Reply<Vec<T>>, AppError> {
        let reply: Reply<HashMap<String, T>> = self.fetch(request, endpoint, StatusCode::OK).await?;
        Ok(Reply {
            status: reply.status,
            body: reply.body.map(ordered_records),
        })
    }
}

/// Flattens an id-keyed listing into record order: numeric ids ascending,
/// then any non-numeric keys alphabetically.
pub fn ordered_records<T>(listing: HashMap<String, T>) -> Vec<T> {
    let mut entries: Vec<(String, T)> = listing.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| {
        match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            (Ok(_), Err(_)) => std::cmp::Ordering::Less,
            (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
            (Err(_), Err(_)) => a.cmp(b),
        }
    });
    entries.into_iter().map(|(_, record)| record).collect()
}

#[async_trait]
impl DomainGateway for ApiClient {
    async fn check_availability(&self, domain: &str) -> Result<Reply<DomainRecord>, AppError> {
        let url = self.endpoint(&["domains", "isAvailable"])?;
        let request = self.http.get(url).query(&[("domain", domain)]);
        self.fetch(request, "domains/isAvailable", StatusCode::OK).await
    }

    async fn get_domain(&self, domain: &str) -> Result<Reply<DomainRecord>, AppError> {
        let url = self.endpoint(&["domains", domain])?;
        let request = self.http.get(url);
        self.fetch(request, "domains/{name}", StatusCode::OK).await
    }

    async fn create_domain(&self, new_domain: NewDomain) -> Result<Reply<()>, AppError> {
        let url = self.endpoint(&["domains", ""])?;
        let request = self.http.post(url).json(&new_domain);
        self.send(request, "domains/").await
    }

    async fn renew_domain(
        &self,
        domain: &str,
        expire_date: NaiveDate,
    ) -> Result<Reply<()>, AppError> {
        let url = self.endpoint(&["domains", "renewDomain", domain])?;
        let date = expire_date.format("%Y-%m-%d").to_string();
        let request = self.http.get(url).query(&[("date", date.as_str())]);
        self.send(request, "domains/renewDomain/{name}").await
    }

    async fn list_user_domains(&self) -> Result<Reply<Vec<DomainRecord>>, AppError> {
        let url = self.endpoint(&["domains", "userDomains"])?;
        let request = self.http.get(url);
        self.fetch_listing(request, "domains/userDomains").await
    }
}

#[async_trait]
impl UserGateway for ApiClient {
    async fn current_user(&self) -> Result<Reply<User>, AppError> {
        let url = self.endpoint(&["users", "user"])?;
        let request = self.http.get(url);
        self.fetch(request, "users/user", StatusCode::OK).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Reply<User>, AppError> {
        let url = self.endpoint(&["users"])?;
        let request = self.http.get(url).query(&[("email", email)]);
        self.fetch(request, "users", StatusCode::OK).await
    }

    async fn register(&self, new_user: NewUser) -> Result<Reply<()>, AppError> {
        let url = self.endpoint(&["users", "register", ""])?;
        let request = self.http.post(url).json(&new_user);
        self.send(request, "users/register/").await
    }

    async fn login(&self, email: &str) -> Result<Reply<()>, AppError> {
        let url = self.endpoint(&["users", "login"])?;
        let request = self.http.get(url).query(&[("email", email)]);
        self.send(request, "users/login").await
    }
}

#[async_trait]
impl OrderGateway for ApiClient {
    async fn list_orders(&self) -> Result<Reply<Vec<Order>>, AppError> {
        let url = self.endpoint(&["orders", ""])?;
        let request = self.http.get(url);
        self.fetch_listing(request, "orders/").await
    }

    async fn create_order(&self, new_order: NewOrder) -> Result<Reply<()>, AppError> {
        let url = self.endpoint(&["orders", ""])?;
        let request = self.http.post(url).json(&new_order);
        self.send(request, "orders/").await
    }
}
