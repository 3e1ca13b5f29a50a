//! Async wrapper around [`LiftPass`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all store operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use lift_pass::AsyncLiftPass;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pass = AsyncLiftPass::builder().in_memory().build().await.unwrap();
//!
//!     pass.set_cost("night", 19).await.unwrap();
//!     let quote = pass.quote("night", Some(70), None).await.unwrap();
//!     assert_eq!(quote.cost, 8);
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;

use crate::error::{LiftPassError, Result};
use crate::models::{BasePrice, PriceQuote};
use crate::{LiftPass, LiftPassBuilder};

// ---------------------------------------------------------------------------
// AsyncLiftPassBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncLiftPass`] instance.
#[derive(Debug, Clone, Default)]
pub struct AsyncLiftPassBuilder {
    inner: LiftPassBuilder,
}

impl AsyncLiftPassBuilder {
    /// Store data in the given DuckDB file.
    pub fn database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.database_path(path);
        self
    }

    /// Keep all data in memory.
    pub fn in_memory(mut self) -> Self {
        self.inner = self.inner.in_memory();
        self
    }

    /// Load the default base prices and holidays on startup.
    pub fn seed_defaults(mut self, seed: bool) -> Self {
        self.inner = self.inner.seed_defaults(seed);
        self
    }

    /// Open the database on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncLiftPass> {
        tokio::task::spawn_blocking(move || {
            let pass = self.inner.build()?;
            Ok(AsyncLiftPass {
                inner: Arc::new(Mutex::new(pass)),
            })
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncLiftPass
// ---------------------------------------------------------------------------

/// Async wrapper around [`LiftPass`].
///
/// The DuckDB connection is not `Sync`, so the [`LiftPass`] sits behind a
/// [`Mutex`]. Each call holds the lock for its whole closure, which is what
/// gives [`quote()`](Self::quote) a consistent view of base price and holidays.
#[derive(Clone)]
pub struct AsyncLiftPass {
    inner: Arc<Mutex<LiftPass>>,
}

impl AsyncLiftPass {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncLiftPassBuilder {
        AsyncLiftPassBuilder::default()
    }

    /// Wrap an already built [`LiftPass`].
    pub fn from_sync(pass: LiftPass) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pass)),
        }
    }

    /// Run a sync operation on the blocking thread pool.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use lift_pass::AsyncLiftPass;
    /// # async fn example() -> lift_pass::Result<()> {
    /// # let pass = AsyncLiftPass::builder().in_memory().build().await?;
    /// let prices = pass.run(|p| p.prices().list()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&LiftPass) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pass = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            // Every statement autocommits, so a panic cannot leave the store half-written
            let guard = pass.lock().unwrap_or_else(PoisonError::into_inner);
            f(&guard)
        })
        .await
        .map_err(join_error)?
    }

    /// Price a ticket. See [`LiftPass::quote`].
    pub async fn quote(&self, ticket_type: &str, age: Option<i32>, date: Option<NaiveDate>) -> Result<PriceQuote> {
        let ticket_type = ticket_type.to_string();
        self.run(move |p| p.quote(&ticket_type, age, date)).await
    }

    /// Upsert the base cost of a ticket type.
    pub async fn set_cost(&self, ticket_type: &str, cost: i64) -> Result<()> {
        let ticket_type = ticket_type.to_string();
        self.run(move |p| p.prices().set_cost(&ticket_type, cost)).await
    }

    /// List every configured base price.
    pub async fn base_prices(&self) -> Result<Vec<BasePrice>> {
        self.run(|p| p.prices().list()).await
    }

    /// The full holiday set.
    pub async fn holidays(&self) -> Result<HashSet<NaiveDate>> {
        self.run(|p| p.holidays().list()).await
    }

    /// All holidays in ascending order.
    pub async fn holidays_sorted(&self) -> Result<Vec<NaiveDate>> {
        self.run(|p| p.holidays().list_sorted()).await
    }

    /// Flag a date as a holiday.
    pub async fn add_holiday(&self, date: NaiveDate) -> Result<()> {
        self.run(move |p| p.holidays().add(date)).await
    }
}

fn join_error(e: tokio::task::JoinError) -> LiftPassError {
    LiftPassError::Io(std::io::Error::other(format!("task join error: {e}")))
}
