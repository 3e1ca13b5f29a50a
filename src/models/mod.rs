pub mod holiday;
pub mod price;

pub use holiday::*;
pub use price::*;
