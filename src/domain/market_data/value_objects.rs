use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - a single price level in the quote currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - traded volume of one monthly bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into, Constructor, Serialize, Deserialize)]
pub struct Volume(u64);

impl Volume {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Value Object - calendar key of one bar as delivered upstream
/// ("YYYY-MM-DD" for the monthly endpoint, but any opaque month label works)
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Deref, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
pub struct DateKey(String);

impl DateKey {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DateKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - ticker symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "Symbol({})", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.trim().is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(symbol.trim().to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Value Object - OHLCV fields of one bar
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct OHLCV {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
}
