//! Alpaca market data API client (historical daily bars).

use crate::domain::entities::bar::Bar;
use crate::domain::errors::BrokerError;
use crate::domain::repositories::broker::{BrokerResult, MarketData};
use crate::infrastructure::alpaca_trading::{check_status, KEY_HEADER, SECRET_HEADER};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use zeroize::Zeroizing;

const ALPACA_DATA_BASE: &str = "https://data.alpaca.markets";

/// Bars per page; the API caps a single response here and hands back a
/// `next_page_token` for the rest.
const PAGE_LIMIT: &str = "10000";

#[derive(Debug, Deserialize)]
struct WireBar {
    t: DateTime<Utc>,
    o: f64,
    h: f64,
    l: f64,
    c: f64,
    v: f64,
}

impl WireBar {
    fn into_bar(self) -> Bar {
        Bar {
            date: self.t.date_naive(),
            open: self.o,
            high: self.h,
            low: self.l,
            close: self.c,
            volume: self.v,
        }
    }
}

/// `bars` is null rather than `[]` when the symbol has no data in range.
#[derive(Debug, Deserialize)]
struct BarsResponse {
    bars: Option<Vec<WireBar>>,
    next_page_token: Option<String>,
}

pub struct AlpacaDataClient {
    client: Client,
    base: String,
    key_id: String,
    secret_key: Zeroizing<String>,
}

impl AlpacaDataClient {
    pub fn new(key_id: &str, secret_key: &str, timeout: Duration) -> Result<Self, BrokerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BrokerError::Http(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base: ALPACA_DATA_BASE.to_string(),
            key_id: key_id.to_string(),
            secret_key: Zeroizing::new(secret_key.to_string()),
        })
    }
}

#[async_trait]
impl MarketData for AlpacaDataClient {
    async fn daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BrokerResult<Vec<Bar>> {
        let url = format!("{}/v2/stocks/{}/bars", self.base, symbol);
        let mut bars = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query: Vec<(&str, String)> = vec![
                ("timeframe", "1Day".to_string()),
                ("start", start.to_string()),
                ("end", end.to_string()),
                ("limit", PAGE_LIMIT.to_string()),
                ("adjustment", "raw".to_string()),
            ];
            if let Some(token) = &page_token {
                query.push(("page_token", token.clone()));
            }

            let response = self
                .client
                .get(&url)
                .query(&query)
                .header(KEY_HEADER, &self.key_id)
                .header(SECRET_HEADER, self.secret_key.as_str())
                .send()
                .await
                .map_err(|e| BrokerError::Http(format!("failed to fetch bars: {}", e)))?;
            let response = check_status(response).await?;

            let page: BarsResponse = response
                .json()
                .await
                .map_err(|e| BrokerError::Parse(format!("bars response: {}", e)))?;

            bars.extend(
                page.bars
                    .unwrap_or_default()
                    .into_iter()
                    .map(WireBar::into_bar),
            );

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_response_deserialization() {
        let json = r#"{
            "bars": [
                {"t": "2024-03-14T04:00:00Z", "o": 172.8, "h": 174.3, "l": 172.0, "c": 173.0, "v": 111223344, "n": 500, "vw": 173.1},
                {"t": "2024-03-15T04:00:00Z", "o": 173.1, "h": 175.0, "l": 172.5, "c": 174.5, "v": 98765432, "n": 450, "vw": 174.0}
            ],
            "symbol": "AAPL",
            "next_page_token": "QUFQTHwyMDI0LTAzLTE1"
        }"#;
        let response: BarsResponse = serde_json::from_str(json).unwrap();
        let bars: Vec<Bar> = response
            .bars
            .unwrap()
            .into_iter()
            .map(WireBar::into_bar)
            .collect();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert_eq!(bars[0].close, 173.0);
        assert_eq!(bars[1].close, 174.5);
        assert_eq!(
            response.next_page_token,
            Some("QUFQTHwyMDI0LTAzLTE1".to_string())
        );
    }

    #[test]
    fn test_empty_bars_deserialization() {
        let json = r#"{"bars": null, "symbol": "ZZZZ", "next_page_token": null}"#;
        let response: BarsResponse = serde_json::from_str(json).unwrap();
        assert!(response.bars.is_none());
        assert!(response.next_page_token.is_none());
    }
}
