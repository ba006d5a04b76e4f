use std::str::FromStr;
use stock_sentiment_wasm::domain::news::{NewsItem, Polarity, SentimentLabel};
use strum::IntoEnumIterator;

#[test]
fn label_follows_polarity_sign() {
    assert_eq!(Polarity::from(0.35).label(), SentimentLabel::Positive);
    assert_eq!(Polarity::from(-0.01).label(), SentimentLabel::Negative);
    assert_eq!(Polarity::from(0.0).label(), SentimentLabel::Neutral);
}

#[test]
fn label_round_trips_through_strings() {
    for label in SentimentLabel::iter() {
        assert_eq!(SentimentLabel::from_str(&label.to_string()).unwrap(), label);
    }
}

#[test]
fn from_polarity_derives_the_label() {
    let item = NewsItem::from_polarity("Shares rally on earnings".to_string(), Polarity::from(0.8));
    assert_eq!(item.sentiment, SentimentLabel::Positive);
    assert_eq!(item.polarity.value(), 0.8);
}
