use std::path::PathBuf;

use chrono::NaiveDate;

pub const BASE_PRICE_TABLE: &str = "base_price";
pub const HOLIDAYS_TABLE: &str = "holidays";

pub const DATABASE_FILE: &str = "lift_pass.duckdb";

/// Exclusive upper bound of every age discount schedule.
pub const MAX_AGE: i32 = 200;

/// DDL run on every open. Idempotent.
pub const SCHEMA: &str = "\
    CREATE TABLE IF NOT EXISTS base_price (\
        type VARCHAR PRIMARY KEY, \
        cost INTEGER NOT NULL\
    ); \
    CREATE TABLE IF NOT EXISTS holidays (\
        holiday DATE PRIMARY KEY\
    );";

/// Base prices loaded by [`seed_defaults`](crate::LiftPassBuilder::seed_defaults).
pub fn default_base_prices() -> Vec<(&'static str, i64)> {
    vec![("1jour", 35), ("night", 19)]
}

/// Holidays loaded by [`seed_defaults`](crate::LiftPassBuilder::seed_defaults).
pub fn default_holidays() -> Vec<NaiveDate> {
    [(2019, 2, 18), (2019, 2, 25), (2019, 3, 4)]
        .into_iter()
        .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
}

pub fn default_database_path() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("lift-pass").join(DATABASE_FILE)
    } else {
        PathBuf::from(".lift-pass").join(DATABASE_FILE)
    }
}
