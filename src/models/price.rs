use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BasePrice — Stored undiscounted cost for one ticket type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePrice {
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub cost: i64,
}

// ---------------------------------------------------------------------------
// PriceQuote — Body of `GET /prices`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub cost: u64,
}
