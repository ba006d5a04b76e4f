use quickcheck_macros::quickcheck;
use stock_sentiment_wasm::domain::chart::SeriesAligner;
use stock_sentiment_wasm::domain::market_data::{DateKey, OHLCV, Price, PriceBar, Volume};
use stock_sentiment_wasm::domain::news::{NewsItem, Polarity};

fn bars(count: usize) -> Vec<PriceBar> {
    (0..count)
        .map(|i| {
            PriceBar::new(
                DateKey::from(format!("2024-{:02}-01", count - i).as_str()),
                OHLCV::new(
                    Price::from(100.0 + i as f64),
                    Price::from(120.0 + i as f64),
                    Price::from(90.0 + i as f64),
                    Price::from(110.0 + i as f64),
                    Volume::from(1u64),
                ),
            )
        })
        .collect()
}

fn news(count: usize) -> Vec<NewsItem> {
    (0..count)
        .map(|i| NewsItem::from_polarity(format!("headline {i}"), Polarity::from(0.1 * i as f64)))
        .collect()
}

#[test]
fn five_bars_three_news_yield_three_points() {
    let aligner = SeriesAligner::new();
    let series = aligner.comparison_series(&bars(5), &news(3));

    assert_eq!(series.point_count(), 3);
    assert_eq!(series.datasets[0].len(), 3);
    assert_eq!(series.datasets[1].len(), 3);
    // the truncated prefix is the source-order (newest-first) prefix,
    // charted ascending from its oldest member
    assert_eq!(series.labels.last().unwrap().value(), "2024-05-01");
}

#[test]
fn three_bars_five_news_yield_three_points() {
    let aligner = SeriesAligner::new();
    let series = aligner.comparison_series(&bars(3), &news(5));
    assert_eq!(series.point_count(), 3);
}

#[quickcheck]
fn comparison_length_is_min_of_inputs(m: u8, n: u8) -> bool {
    let m = (m % 16) as usize;
    let n = (n % 16) as usize;
    let aligner = SeriesAligner::new();
    let series = aligner.comparison_series(&bars(m), &news(n));
    series.point_count() == m.min(n)
        && series.datasets.iter().all(|d| d.len() == m.min(n))
}
