pub use super::value_objects::{DateKey, OHLCV, Price, Volume};
use serde::{Deserialize, Serialize};

/// Domain entity - one monthly price bar
///
/// Bars arrive from the upstream source in descending chronological order
/// (most recent first); that order is kept here and only normalized by the
/// chart aligner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: DateKey,
    pub ohlcv: OHLCV,
}

impl PriceBar {
    pub fn new(date: DateKey, ohlcv: OHLCV) -> Self {
        Self { date, ohlcv }
    }
}
