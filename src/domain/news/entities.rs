pub use super::value_objects::{Polarity, SentimentLabel};
use serde::{Deserialize, Serialize};

/// Domain entity - one scored news headline
///
/// News items carry no date key of their own; the upstream responses are
/// assumed to correspond positionally to the bar sequence of the same fetch
/// cycle, in the same newest-first order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    pub polarity: Polarity,
    pub sentiment: SentimentLabel,
}

impl NewsItem {
    pub fn new(headline: String, polarity: Polarity, sentiment: SentimentLabel) -> Self {
        Self { headline, polarity, sentiment }
    }

    /// Builds an item labeling it from the polarity sign, for payloads that
    /// omit the precomputed label.
    pub fn from_polarity(headline: String, polarity: Polarity) -> Self {
        let sentiment = polarity.label();
        Self { headline, polarity, sentiment }
    }
}
