pub mod holidays;
pub mod prices;
