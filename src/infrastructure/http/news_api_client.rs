use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Symbol;
use crate::domain::news::{NewsItem, Polarity, SentimentLabel};
use crate::log_info;
use gloo_net::http::Request;
use serde::Deserialize;

/// Scored headlines payload of the /news endpoint
#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[allow(dead_code)]
    symbol: String,
    news: Vec<NewsItemDto>,
}

#[derive(Debug, Deserialize)]
struct NewsItemDto {
    headline: String,
    polarity: f64,
    sentiment: Option<SentimentLabel>,
}

impl NewsItemDto {
    fn to_domain_item(&self) -> NewsItem {
        let polarity = Polarity::from(self.polarity);
        match self.sentiment {
            // The server labels from the polarity sign; trust it when present.
            Some(label) => NewsItem::new(self.headline.clone(), polarity, label),
            None => NewsItem::from_polarity(self.headline.clone(), polarity),
        }
    }
}

/// REST client for the company-news endpoint
#[derive(Clone)]
pub struct NewsApiClient {
    base_url: String,
    from_date: String,
    to_date: String,
}

impl NewsApiClient {
    pub fn new() -> Self {
        Self::with_base_url(super::DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            from_date: "2023-01-01".to_string(),
            to_date: "2023-12-31".to_string(),
        }
    }

    pub fn with_date_window(mut self, from_date: &str, to_date: &str) -> Self {
        self.from_date = from_date.to_string();
        self.to_date = to_date.to_string();
        self
    }

    pub fn news_url(&self, symbol: &Symbol) -> String {
        format!(
            "{}/news?symbol={}&from={}&to={}",
            self.base_url,
            symbol.value(),
            self.from_date,
            self.to_date
        )
    }

    /// Fetches the scored headlines for one symbol, in the order the news
    /// provider delivered them (assumed positionally aligned with the bars
    /// of the same fetch cycle).
    pub async fn fetch_company_news(&self, symbol: &Symbol) -> NetworkResult<Vec<NewsItem>> {
        let url = self.news_url(symbol);
        log_info!(LogComponent::Infrastructure("NewsAPI"), "📰 Fetching company news from: {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to fetch news: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::NetworkError(format!("HTTP error: {}", response.status())));
        }

        let payload: NewsResponse = response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse news JSON: {e:?}")))?;

        let items: Vec<NewsItem> = payload.news.iter().map(NewsItemDto::to_domain_item).collect();

        log_info!(
            LogComponent::Infrastructure("NewsAPI"),
            "✅ Loaded {} news items for {}",
            items.len(),
            symbol.value()
        );

        Ok(items)
    }
}

impl Default for NewsApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_url_with_default_window() {
        let client = NewsApiClient::new();
        let url = client.news_url(&Symbol::from("TCS"));
        assert_eq!(url, "http://127.0.0.1:5000/news?symbol=TCS&from=2023-01-01&to=2023-12-31");
    }

    #[test]
    fn test_news_url_with_custom_window() {
        let client = NewsApiClient::new().with_date_window("2024-01-01", "2024-06-30");
        let url = client.news_url(&Symbol::from("INFY"));
        assert_eq!(url, "http://127.0.0.1:5000/news?symbol=INFY&from=2024-01-01&to=2024-06-30");
    }

    #[test]
    fn test_news_dto_conversion_trusts_server_label() {
        let payload = r#"{"symbol":"TCS","news":[
            {"headline":"Record quarterly profit","polarity":0.5,"sentiment":"Positive"},
            {"headline":"Flat outlook","polarity":0.0,"sentiment":"Neutral"}
        ]}"#;
        let parsed: NewsResponse = serde_json::from_str(payload).unwrap();
        let items: Vec<NewsItem> = parsed.news.iter().map(NewsItemDto::to_domain_item).collect();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].sentiment, SentimentLabel::Positive);
        assert_eq!(items[0].polarity.value(), 0.5);
        assert_eq!(items[1].sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn test_news_dto_conversion_derives_missing_label() {
        let payload = r#"{"symbol":"TCS","news":[
            {"headline":"Regulator opens probe","polarity":-0.4}
        ]}"#;
        let parsed: NewsResponse = serde_json::from_str(payload).unwrap();
        let items: Vec<NewsItem> = parsed.news.iter().map(NewsItemDto::to_domain_item).collect();
        assert_eq!(items[0].sentiment, SentimentLabel::Negative);
    }
}
