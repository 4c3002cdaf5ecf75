//! Date arithmetic for registration and renewal periods.

use chrono::{Datelike, NaiveDate, Utc};

/// Longest span, in calendar years from today, a renewal may reach.
pub const MAX_RENEWAL_SPAN_YEARS: i32 = 10;

/// Source of the current date, injected so flows can be tested on a fixed day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Today's date in UTC, the same calendar the backend stores dates in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Moves `date` to `year`, keeping month and day.
///
/// February 29th rolls over to March 1st when the target year is not a leap
/// year. Returns `None` only when the year is outside chrono's range.
pub fn with_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    let shifted = date.with_year(year);
    shifted.or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// `date` shifted forward by whole years.
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let years = i32::try_from(years).ok()?;
    with_year(date, date.year().checked_add(years)?)
}

/// Year the domain would expire in after renewing for `years`.
pub fn renewed_expiry_year(current_expiry: NaiveDate, years: u32) -> i32 {
    let years = i32::try_from(years).unwrap_or(i32::MAX);
    current_expiry.year().saturating_add(years)
}

/// Whether a renewal to `new_expiry_year` goes past the allowed span.
///
/// The span is measured from the current calendar year, not from the
/// domain's present expiry.
pub fn exceeds_renewal_span(new_expiry_year: i32, today: NaiveDate) -> bool {
    new_expiry_year - today.year() > MAX_RENEWAL_SPAN_YEARS
}
