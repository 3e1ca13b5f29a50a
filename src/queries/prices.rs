//! Base price queries against the `base_price` table.

use crate::config::BASE_PRICE_TABLE;
use crate::error::{LiftPassError, Result};
use crate::models::BasePrice;
use crate::sql_builder::SqlBuilder;

// ---------------------------------------------------------------------------
// BasePriceQuery
// ---------------------------------------------------------------------------

/// Read/write interface for the undiscounted cost of each ticket type.
pub struct BasePriceQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> BasePriceQuery<'a> {
    /// Create a new `BasePriceQuery` bound to the given connection.
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// Get the stored row for a ticket type, if any.
    pub fn get(&self, ticket_type: &str) -> Result<Option<BasePrice>> {
        let (sql, params) = SqlBuilder::new(BASE_PRICE_TABLE)
            .select(&["type", "cost"])
            .where_eq("type", ticket_type)
            .limit(1)
            .build();

        let rows: Vec<BasePrice> = self.conn.execute_into(&sql, &params)?;
        Ok(rows.into_iter().next())
    }

    /// Get the base cost for a ticket type.
    ///
    /// Fails with [`LiftPassError::NotFound`] if the type was never configured.
    pub fn get_cost(&self, ticket_type: &str) -> Result<i64> {
        self.get(ticket_type)?
            .map(|row| row.cost)
            .ok_or_else(|| LiftPassError::NotFound(format!("no base price for ticket type '{ticket_type}'")))
    }

    /// Insert or overwrite the base cost for a ticket type.
    pub fn set_cost(&self, ticket_type: &str, cost: i64) -> Result<()> {
        if cost < 0 {
            return Err(LiftPassError::InvalidInput(format!("cost must not be negative, got {cost}")));
        }
        if cost > i64::from(i32::MAX) {
            return Err(LiftPassError::InvalidInput(format!("cost {cost} is too large")));
        }

        self.conn.execute_write(
            "INSERT INTO base_price (type, cost) VALUES (?, CAST(? AS INTEGER)) \
             ON CONFLICT (type) DO UPDATE SET cost = excluded.cost",
            &[ticket_type.to_string(), cost.to_string()],
        )?;
        tracing::debug!(ticket_type, cost, "upserted base price");
        Ok(())
    }

    /// List every configured base price ordered by ticket type.
    pub fn list(&self) -> Result<Vec<BasePrice>> {
        let (sql, params) = SqlBuilder::new(BASE_PRICE_TABLE)
            .select(&["type", "cost"])
            .order_by(&["type ASC"])
            .build();

        self.conn.execute_into(&sql, &params)
    }
}
