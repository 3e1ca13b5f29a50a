//! Admission price computation.
//!
//! Pure functions over static schedule data: no I/O and no shared mutable
//! state, so every function here is safe to call from any thread.
//!
//! A price is the base cost with each applicable discount taken off what
//! remains after the previous one:
//!
//! ```text
//! price = ceil(base × (1 − age%/100) × (1 − monday%/100))
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use chrono::NaiveDate;
//! use lift_pass::pricing;
//!
//! let monday = NaiveDate::from_ymd_opt(2019, 2, 11).unwrap();
//! let price = pricing::compute_price(1000, "1jour", Some(20), Some(monday), &HashSet::new()).unwrap();
//! assert_eq!(price, 650);
//! ```

pub mod schedule;

pub use schedule::{schedule_for, ticket_types, AgeBand, DiscountSchedule, DAY_PASS, NIGHT};

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{LiftPassError, Result};

/// Flat discount for eligible Monday purchases.
pub const MONDAY_DISCOUNT: u32 = 35;

/// Youngest age eligible for the Monday discount.
pub const MONDAY_MIN_AGE: i32 = 15;

/// Age discount percentage for `ticket_type`.
///
/// A negative age is rejected with [`LiftPassError::InvalidInput`] before the
/// schedule is looked up.
pub fn age_discount(ticket_type: &str, age: Option<i32>) -> Result<u32> {
    if let Some(a) = age {
        if a < 0 {
            return Err(LiftPassError::InvalidInput(format!("age must not be negative, got {a}")));
        }
    }
    Ok(schedule_for(ticket_type)?.discount_for(age))
}

/// Monday discount percentage: [`MONDAY_DISCOUNT`] when the date is a
/// non-holiday Monday, the buyer is at least [`MONDAY_MIN_AGE`] and the
/// ticket is not a night pass; 0 otherwise.
///
/// Never fails: a negative age is below [`MONDAY_MIN_AGE`] and gets 0.
/// Callers go through [`age_discount`] first, which rejects it.
pub fn monday_discount(
    ticket_type: &str,
    age: Option<i32>,
    date: Option<NaiveDate>,
    holidays: &HashSet<NaiveDate>,
) -> u32 {
    let Some(date) = date else {
        return 0;
    };
    let eligible = date.weekday() == Weekday::Mon
        && age.is_some_and(|a| a >= MONDAY_MIN_AGE)
        && ticket_type != NIGHT
        && !holidays.contains(&date);

    if eligible {
        MONDAY_DISCOUNT
    } else {
        0
    }
}

/// Apply percentage discounts one after another, each to the remaining price.
///
/// Percentages above 100 are treated as 100.
pub fn apply_discounts(base: Decimal, percentages: &[u32]) -> Decimal {
    percentages.iter().fold(base, |total, &percent| {
        let percent = Decimal::from(percent.min(100));
        total * (dec!(100) - percent) / dec!(100)
    })
}

/// Unrounded discounted price.
pub fn cost(
    base_cost: i64,
    ticket_type: &str,
    age: Option<i32>,
    date: Option<NaiveDate>,
    holidays: &HashSet<NaiveDate>,
) -> Result<Decimal> {
    let discounts = [
        age_discount(ticket_type, age)?,
        monday_discount(ticket_type, age, date, holidays),
    ];
    Ok(apply_discounts(Decimal::from(base_cost), &discounts))
}

/// Final price in whole currency units, rounded up.
pub fn compute_price(
    base_cost: i64,
    ticket_type: &str,
    age: Option<i32>,
    date: Option<NaiveDate>,
    holidays: &HashSet<NaiveDate>,
) -> Result<u64> {
    let exact = cost(base_cost, ticket_type, age, date, holidays)?;
    let price = exact.ceil().to_u64().ok_or_else(|| {
        LiftPassError::InvalidInput(format!("base cost for '{ticket_type}' is negative: {base_cost}"))
    })?;

    tracing::debug!(ticket_type, ?age, ?date, base_cost, price, "computed price");
    Ok(price)
}
