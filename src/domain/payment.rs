//! Local checks on the payment form and order pricing.
//!
//! These are shape checks only. Nothing here talks to a payment provider
//! or runs a checksum over the card number.

use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// Durations a domain can be bought or renewed for, in years.
pub const DURATION_YEARS: RangeInclusive<u32> = 1..=10;

/// Price of one year of registration or renewal.
pub const COST_PER_YEAR: u32 = 10;

pub const CVV_LENGTH: usize = 3;
pub const CARD_NUMBER_LENGTH: usize = 16;

/// Order cost for `years` of registration, or `None` when the duration is
/// outside [`DURATION_YEARS`].
pub fn calculate_cost(years: u32) -> Option<u32> {
    if !DURATION_YEARS.contains(&years) {
        return None;
    }
    COST_PER_YEAR.checked_mul(years)
}

/// Parses a card expiry as entered in the form.
///
/// Accepts a full date (`2026-05-31`) or a month (`2026-05`, read as the
/// first day of that month).
pub fn parse_card_expiry(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d").ok())
}

/// A card is usable when its expiry is today or later. Unparseable input is invalid.
pub fn is_card_expiry_valid(expiry: &str, today: NaiveDate) -> bool {
    parse_card_expiry(expiry).is_some_and(|date| date >= today)
}

/// Card fields collected by the purchase forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCard {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

/// First failing card check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    Expired,
    CvvLength,
    NumberLength,
}

impl PaymentCard {
    pub fn new(
        number: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }

    /// Runs the checks in form order: expiry, CVV length, number length.
    pub fn validate(&self, today: NaiveDate) -> Result<(), CardError> {
        if !is_card_expiry_valid(&self.expiry, today) {
            return Err(CardError::Expired);
        }
        if self.cvv.chars().count() != CVV_LENGTH {
            return Err(CardError::CvvLength);
        }
        if self.number.chars().count() != CARD_NUMBER_LENGTH {
            return Err(CardError::NumberLength);
        }
        Ok(())
    }
}
