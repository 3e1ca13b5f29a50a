//! Query modules for the lift pass store.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes methods
//! returning `Result<T>`.

pub mod holidays;
pub mod prices;

pub use holidays::HolidayQuery;
pub use prices::BasePriceQuery;
