//! Lift pass pricing for Rust.
//!
//! Computes admission prices from a per-ticket-type base cost, the buyer's
//! age and the purchase date. Base prices and holidays live in an embedded
//! DuckDB database; the discount rules live in [`pricing`] as pure functions.
//!
//! # Quick start
//!
//! ```no_run
//! use lift_pass::LiftPass;
//!
//! let pass = LiftPass::builder().in_memory().seed_defaults(true).build().unwrap();
//!
//! pass.prices().set_cost("1jour", 35).unwrap();
//! let quote = pass.quote("1jour", Some(70), None).unwrap();
//! assert_eq!(quote.cost, 27);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod pricing;
pub mod queries;
pub mod sql_builder;

#[cfg(feature = "async")]
pub use async_client::AsyncLiftPass;
pub use connection::Connection;
pub use error::{LiftPassError, Result};
pub use models::{BasePrice, Holiday, PriceQuote};
pub use sql_builder::SqlBuilder;

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// LiftPassBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`LiftPass`] instance.
///
/// Use [`LiftPass::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](LiftPassBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct LiftPassBuilder {
    database: Database,
    seed: bool,
}

#[derive(Debug, Clone, Default)]
enum Database {
    #[default]
    DefaultFile,
    File(PathBuf),
    InMemory,
}

impl LiftPassBuilder {
    /// Store data in the given DuckDB file, creating it if needed.
    ///
    /// If neither this nor [`in_memory()`](Self::in_memory) is called, the
    /// platform data directory is used (e.g. `~/.local/share/lift-pass` on Linux).
    pub fn database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database = Database::File(path.as_ref().to_path_buf());
        self
    }

    /// Keep all data in memory. Nothing survives the process.
    pub fn in_memory(mut self) -> Self {
        self.database = Database::InMemory;
        self
    }

    /// Load the default base prices and holidays on startup.
    ///
    /// Existing rows are never overwritten. Defaults to `false`.
    pub fn seed_defaults(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Open the database and create the schema if it is missing.
    pub fn build(self) -> Result<LiftPass> {
        let conn = match self.database {
            Database::DefaultFile => Connection::open(config::default_database_path())?,
            Database::File(path) => Connection::open(path)?,
            Database::InMemory => Connection::open_in_memory()?,
        };
        if self.seed {
            conn.seed_defaults()?;
        }
        Ok(LiftPass { conn })
    }
}

// ---------------------------------------------------------------------------
// LiftPass
// ---------------------------------------------------------------------------

/// The main entry point: a price and holiday store plus the pricing engine.
///
/// Created via [`LiftPass::builder()`].
pub struct LiftPass {
    conn: Connection,
}

impl LiftPass {
    /// Create a new builder.
    pub fn builder() -> LiftPassBuilder {
        LiftPassBuilder::default()
    }

    /// Wrap an already opened connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Access the base price store.
    pub fn prices(&self) -> queries::BasePriceQuery<'_> {
        queries::BasePriceQuery::new(&self.conn)
    }

    /// Access the holiday store.
    pub fn holidays(&self) -> queries::HolidayQuery<'_> {
        queries::HolidayQuery::new(&self.conn)
    }

    /// Price a ticket.
    ///
    /// Reads the base cost and the holiday set, then runs
    /// [`pricing::compute_price`]. Fails with [`LiftPassError::NotFound`] when
    /// the type has no base price and [`LiftPassError::Configuration`] when it
    /// has no discount schedule.
    pub fn quote(&self, ticket_type: &str, age: Option<i32>, date: Option<NaiveDate>) -> Result<PriceQuote> {
        let base_cost = self.prices().get_cost(ticket_type)?;
        let holidays = self.holidays().list()?;
        let cost = pricing::compute_price(base_cost, ticket_type, age, date, &holidays)?;
        Ok(PriceQuote { cost })
    }

    /// Consume the instance and close the database.
    pub fn close(self) {
        drop(self);
    }

    /// Return a reference to the underlying [`Connection`].
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl fmt::Display for LiftPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<&str> = pricing::ticket_types().collect();
        write!(f, "LiftPass(schedules=[{}])", types.join(", "))
    }
}
