use derive_more::{Constructor, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - numeric sentiment intensity of one headline
///
/// The upstream analyzer emits scores in [-1, 1]; the bound is the source's
/// contract and is not re-clamped here.
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
pub struct Polarity(f64);

impl Polarity {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Label derived from the polarity sign, the same rule the news service
    /// applies server-side.
    pub fn label(&self) -> SentimentLabel {
        if self.0 > 0.0 {
            SentimentLabel::Positive
        } else if self.0 < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Value Object - enumerated sentiment label
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum SentimentLabel {
    #[strum(serialize = "Positive")]
    Positive,
    #[strum(serialize = "Negative")]
    Negative,
    #[strum(serialize = "Neutral")]
    Neutral,
}
