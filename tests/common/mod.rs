//! Shared test fixtures for the lift pass integration tests.
//!
//! Provides `setup_sample_store()` which opens an in-memory DuckDB database
//! with a few base prices and holidays already written.

#![allow(dead_code)]

use chrono::NaiveDate;
use lift_pass::LiftPass;

/// 2019-02-11, a regular Monday.
pub fn monday() -> NaiveDate {
    date("2019-02-11")
}

/// 2019-02-18, a Monday that is also a holiday in the sample data.
pub fn holiday_monday() -> NaiveDate {
    date("2019-02-18")
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Create an in-memory `LiftPass` with sample base prices and holidays.
pub fn setup_sample_store() -> LiftPass {
    let pass = LiftPass::builder().in_memory().build().unwrap();

    // -- base_price table -----------------------------------------------------
    pass.prices().set_cost("1jour", 1000).unwrap();
    pass.prices().set_cost("night", 1000).unwrap();
    // Has a base price but no discount schedule
    pass.prices().set_cost("season", 5000).unwrap();

    // -- holidays table -------------------------------------------------------
    for d in ["2019-02-18", "2019-02-25", "2019-03-04"] {
        pass.holidays().add(date(d)).unwrap();
    }

    pass
}
