//! Registered domain records as returned by the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A domain record owned by a user.
///
/// The backend is inconsistent about key casing: availability and lookup
/// responses use `registrationDate`/`expireDate`, while listings echo the
/// lower-case keys used on creation. Both spellings decode into this type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(rename = "registrationDate", alias = "registrationdate", default)]
    pub registration_date: Option<NaiveDate>,
    #[serde(rename = "expireDate", alias = "expiredate")]
    pub expire_date: NaiveDate,
}

impl DomainRecord {
    /// Whether the domain can still be renewed on `today`.
    ///
    /// Matches the listing rule: a row gets a renew action only while the
    /// expiry lies strictly in the future.
    pub fn is_renewable(&self, today: NaiveDate) -> bool {
        self.expire_date > today
    }
}

/// Body of `POST /domains/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDomain {
    pub name: String,
    #[serde(rename = "registrationdate")]
    pub registration_date: NaiveDate,
    #[serde(rename = "expiredate")]
    pub expire_date: NaiveDate,
    pub owner: String,
}
