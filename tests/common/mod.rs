#![allow(dead_code)]

//! In-process stand-in for the registration backend.
//!
//! Keeps users, domains, orders and sessions in memory, records every
//! request it receives, and can be told to answer a path with a fixed status.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use registrar_client::prelude::*;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const SESSION_COOKIE: &str = "userAuth";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
    pub session: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StubUser {
    pub name: String,
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct StubDomain {
    pub name: String,
    pub owner: String,
    pub registration: String,
    pub expire: String,
}

impl StubDomain {
    fn camel_case(&self) -> Value {
        json!({
            "name": self.name,
            "owner": self.owner,
            "registrationDate": self.registration,
            "expireDate": self.expire,
        })
    }

    fn lower_case(&self) -> Value {
        json!({
            "name": self.name,
            "owner": self.owner,
            "registrationdate": self.registration,
            "expiredate": self.expire,
        })
    }
}

#[derive(Default)]
pub struct Backend {
    pub users: Vec<StubUser>,
    pub domains: Vec<StubDomain>,
    pub orders: Vec<Value>,
    pub sessions: HashMap<String, String>,
    pub requests: Vec<Recorded>,
    forced: HashMap<String, (u16, Option<String>)>,
}

/// Shared handle on the stub's state.
#[derive(Clone, Default)]
pub struct Stub(Arc<Mutex<Backend>>);

impl Stub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, name: &str, surname: &str, email: &str) -> Self {
        self.0.lock().unwrap().users.push(StubUser {
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
        });
        self
    }

    pub fn with_domain(self, name: &str, owner: &str, registration: &str, expire: &str) -> Self {
        self.0.lock().unwrap().domains.push(StubDomain {
            name: name.to_string(),
            owner: owner.to_string(),
            registration: registration.to_string(),
            expire: expire.to_string(),
        });
        self
    }

    /// Answers every request to `path` with `status` and no body.
    pub fn force_status(&self, path: &str, status: u16) {
        self.0
            .lock()
            .unwrap()
            .forced
            .insert(path.to_string(), (status, None));
    }

    /// Answers every request to `path` with `status` and a raw JSON body.
    pub fn force_body(&self, path: &str, status: u16, body: &str) {
        self.0
            .lock()
            .unwrap()
            .forced
            .insert(path.to_string(), (status, Some(body.to_string())));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.0.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn domain(&self, name: &str) -> Option<StubDomain> {
        self.0
            .lock()
            .unwrap()
            .domains
            .iter()
            .find(|d| d.name == name)
            .cloned()
    }

    pub fn orders(&self) -> Vec<Value> {
        self.0.lock().unwrap().orders.clone()
    }

    pub fn user_count(&self) -> usize {
        self.0.lock().unwrap().users.len()
    }
}

/// Starts the stub on an ephemeral port and returns its base URI.
pub async fn spawn(stub: Stub) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(handle).with_state(stub);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// A base URI nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn client(base: &str) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(base).unwrap())
}

pub fn create_test_state(base: &str, today: NaiveDate) -> AppState {
    AppState::new(
        client(base),
        Arc::new(TldSet::default()),
        Arc::new(FixedClock(today)),
    )
}

pub fn valid_card() -> PaymentCard {
    PaymentCard::new("1234567812345678", "2099-12", "123")
}

async fn handle(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let query: HashMap<String, String> = uri
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    let recorded = Recorded {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query,
        body: serde_json::from_slice(&body).ok(),
        session: session_token(&headers),
    };

    let mut backend = stub.0.lock().unwrap();
    backend.requests.push(recorded.clone());
    dispatch(&mut backend, &recorded)
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

fn status(code: u16) -> Response {
    StatusCode::from_u16(code).unwrap().into_response()
}

fn json_reply(code: u16, body: Value) -> Response {
    (
        StatusCode::from_u16(code).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
        .into_response()
}

fn with_session(mut response: Response, token: &str) -> Response {
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/");
    response
        .headers_mut()
        .insert(header::SET_COOKIE, HeaderValue::from_str(&cookie).unwrap());
    response
}

fn keyed(values: Vec<Value>) -> Value {
    let map: Map<String, Value> = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| ((i + 1).to_string(), v))
        .collect();
    Value::Object(map)
}

fn field<'a>(body: &'a Option<Value>, key: &str) -> Option<&'a str> {
    body.as_ref()?
        .get(key)?
        .as_str()
        .filter(|s| !s.is_empty())
}

fn dispatch(backend: &mut Backend, req: &Recorded) -> Response {
    if let Some((code, body)) = backend.forced.get(&req.path) {
        return match body {
            Some(raw) => (
                StatusCode::from_u16(*code).unwrap(),
                [(header::CONTENT_TYPE, "application/json")],
                raw.clone(),
            )
                .into_response(),
            None => status(*code),
        };
    }

    let session_user = req
        .session
        .as_ref()
        .and_then(|token| backend.sessions.get(token))
        .cloned();
    let segments: Vec<&str> = req.path.trim_matches('/').split('/').collect();

    match (req.method.as_str(), segments.as_slice()) {
        ("GET", ["users", "login"]) => {
            let Some(email) = req.query.get("email") else {
                return status(400);
            };
            if !backend.users.iter().any(|u| &u.email == email) {
                return status(401);
            }
            let token = format!("session-{}", backend.sessions.len() + 1);
            backend.sessions.insert(token.clone(), email.clone());
            with_session(status(200), &token)
        }
        ("POST", ["users", "register"]) => {
            let (Some(name), Some(surname), Some(email)) = (
                field(&req.body, "name"),
                field(&req.body, "surname"),
                field(&req.body, "email"),
            ) else {
                return status(400);
            };
            if backend.users.iter().any(|u| u.email == email) {
                return status(409);
            }
            backend.users.push(StubUser {
                name: name.to_string(),
                surname: surname.to_string(),
                email: email.to_string(),
            });
            let token = format!("session-{}", backend.sessions.len() + 1);
            backend.sessions.insert(token.clone(), email.to_string());
            with_session(status(201), &token)
        }
        ("GET", ["users", "user"]) => {
            let Some(email) = session_user else {
                return status(401);
            };
            match backend.users.iter().find(|u| u.email == email) {
                Some(u) => json_reply(
                    200,
                    json!({ "name": u.name, "surname": u.surname, "email": u.email }),
                ),
                None => status(401),
            }
        }
        ("GET", ["users"]) => {
            let Some(email) = req.query.get("email") else {
                return status(400);
            };
            match backend.users.iter().find(|u| &u.email == email) {
                Some(u) => json_reply(200, json!({ "name": u.name, "surname": u.surname })),
                None => status(404),
            }
        }
        ("GET", ["domains", "isAvailable"]) => {
            if session_user.is_none() {
                return status(401);
            }
            let Some(name) = req.query.get("domain") else {
                return status(400);
            };
            match backend.domains.iter().find(|d| &d.name == name) {
                Some(d) => json_reply(200, d.camel_case()),
                None => status(204),
            }
        }
        ("GET", ["domains", "userDomains"]) => {
            let Some(email) = session_user else {
                return status(401);
            };
            let owned = backend
                .domains
                .iter()
                .filter(|d| d.owner == email)
                .map(StubDomain::lower_case)
                .collect();
            json_reply(200, keyed(owned))
        }
        ("GET", ["domains", "renewDomain", name]) => {
            if session_user.is_none() {
                return status(401);
            }
            let Some(new_date) = req.query.get("date") else {
                return status(400);
            };
            match backend.domains.iter_mut().find(|d| d.name == *name) {
                Some(d) => {
                    d.expire = new_date.clone();
                    status(200)
                }
                None => status(404),
            }
        }
        ("POST", ["domains"]) => {
            if session_user.is_none() {
                return status(401);
            }
            let (Some(name), Some(owner), Some(registration), Some(expire)) = (
                field(&req.body, "name"),
                field(&req.body, "owner"),
                field(&req.body, "registrationdate"),
                field(&req.body, "expiredate"),
            ) else {
                return status(400);
            };
            if backend.domains.iter().any(|d| d.name == name) {
                return status(409);
            }
            backend.domains.push(StubDomain {
                name: name.to_string(),
                owner: owner.to_string(),
                registration: registration.to_string(),
                expire: expire.to_string(),
            });
            status(201)
        }
        ("GET", ["domains", name]) => {
            if session_user.is_none() {
                return status(401);
            }
            match backend.domains.iter().find(|d| d.name == *name) {
                Some(d) => json_reply(200, d.camel_case()),
                None => status(404),
            }
        }
        ("GET", ["orders"]) => {
            let Some(email) = session_user else {
                return status(401);
            };
            let mine = backend
                .orders
                .iter()
                .filter(|o| o["client"] == email.as_str())
                .cloned()
                .collect();
            json_reply(200, keyed(mine))
        }
        ("POST", ["orders"]) => {
            let Some(email) = session_user else {
                return status(401);
            };
            let Some(Value::Object(mut order)) = req.body.clone() else {
                return status(400);
            };
            order.insert("client".to_string(), Value::String(email));
            backend.orders.push(Value::Object(order));
            status(201)
        }
        _ => status(404),
    }
}
