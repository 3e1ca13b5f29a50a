//! Holiday queries against the `holidays` table.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::config::HOLIDAYS_TABLE;
use crate::error::Result;
use crate::models::Holiday;
use crate::sql_builder::SqlBuilder;

// ---------------------------------------------------------------------------
// HolidayQuery
// ---------------------------------------------------------------------------

/// Query interface for the dates excluded from the Monday discount.
pub struct HolidayQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> HolidayQuery<'a> {
    /// Create a new `HolidayQuery` bound to the given connection.
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// The full holiday set.
    pub fn list(&self) -> Result<HashSet<NaiveDate>> {
        Ok(self.list_sorted()?.into_iter().collect())
    }

    /// All holidays in ascending date order.
    pub fn list_sorted(&self) -> Result<Vec<NaiveDate>> {
        let (sql, params) = SqlBuilder::new(HOLIDAYS_TABLE)
            .select(&["holiday"])
            .order_by(&["holiday ASC"])
            .build();

        let rows: Vec<Holiday> = self.conn.execute_into(&sql, &params)?;
        Ok(rows.into_iter().map(|h| h.holiday).collect())
    }

    /// Whether `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> Result<bool> {
        let (sql, params) = SqlBuilder::new(HOLIDAYS_TABLE)
            .select(&["holiday"])
            .where_date_eq("holiday", &date.to_string())
            .limit(1)
            .build();

        Ok(self.conn.execute_scalar(&sql, &params)?.is_some())
    }

    /// Flag a date as a holiday. Adding an existing date is a no-op.
    pub fn add(&self, date: NaiveDate) -> Result<()> {
        self.conn.execute_write(
            "INSERT INTO holidays (holiday) VALUES (CAST(? AS DATE)) \
             ON CONFLICT (holiday) DO NOTHING",
            &[date.to_string()],
        )?;
        tracing::debug!(%date, "added holiday");
        Ok(())
    }

    /// Remove a holiday. Returns `false` if the date was not a holiday.
    pub fn remove(&self, date: NaiveDate) -> Result<bool> {
        let removed = self.conn.execute_write(
            "DELETE FROM holidays WHERE holiday = CAST(? AS DATE)",
            &[date.to_string()],
        )?;
        Ok(removed > 0)
    }
}
