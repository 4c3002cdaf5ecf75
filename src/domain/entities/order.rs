//! Billing records created alongside registrations and renewals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of purchase an order records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Register,
    Renewal,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Register => f.write_str("REGISTER"),
            OrderType::Renewal => f.write_str("RENEWAL"),
        }
    }
}

/// An order as listed by `GET /orders/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    pub domain: String,
    pub date: NaiveDate,
    #[serde(rename = "orderType", alias = "ordertype")]
    pub order_type: OrderType,
    pub cost: u32,
    #[serde(default)]
    pub client: Option<String>,
}

impl Order {
    /// Cost formatted for display, e.g. `30€`.
    pub fn display_cost(&self) -> String {
        format_cost(self.cost)
    }
}

/// Body of `POST /orders/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    pub domain: String,
    pub date: NaiveDate,
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
    pub cost: u32,
}

/// Currency is a bare integer; the euro sign is presentation only.
pub fn format_cost(cost: u32) -> String {
    format!("{cost}€")
}
