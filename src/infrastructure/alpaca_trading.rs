//! Alpaca trading API client (account, orders, positions).

use crate::domain::entities::account::AccountSnapshot;
use crate::domain::entities::order::{Order, OrderReceipt};
use crate::domain::entities::position::Position;
use crate::domain::errors::BrokerError;
use crate::domain::repositories::broker::{BrokerResult, TradingApi};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use zeroize::Zeroizing;

const ALPACA_LIVE_BASE: &str = "https://api.alpaca.markets";
const ALPACA_PAPER_BASE: &str = "https://paper-api.alpaca.markets";

pub(crate) const KEY_HEADER: &str = "APCA-API-KEY-ID";
pub(crate) const SECRET_HEADER: &str = "APCA-API-SECRET-KEY";

/// Alpaca account payload. Decimal fields arrive as strings.
#[derive(Debug, Deserialize)]
struct AccountResponse {
    status: String,
    equity: String,
    last_equity: String,
}

/// Order request body in Alpaca's wire format.
#[derive(Debug, Serialize)]
struct OrderRequest<'a> {
    symbol: &'a str,
    qty: String,
    side: String,
    r#type: &'static str,
    time_in_force: String,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct PositionResponse {
    symbol: String,
    qty: String,
    unrealized_plpc: String,
}

pub struct AlpacaTradingClient {
    client: Client,
    base: String,
    key_id: String,
    secret_key: Zeroizing<String>,
}

impl AlpacaTradingClient {
    pub fn new(
        key_id: &str,
        secret_key: &str,
        paper: bool,
        timeout: Duration,
    ) -> Result<Self, BrokerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BrokerError::Http(format!("failed to build HTTP client: {}", e)))?;
        let base = if paper {
            ALPACA_PAPER_BASE.to_string()
        } else {
            ALPACA_LIVE_BASE.to_string()
        };
        Ok(Self {
            client,
            base,
            key_id: key_id.to_string(),
            secret_key: Zeroizing::new(secret_key.to_string()),
        })
    }

    #[cfg(test)]
    fn base(&self) -> &str {
        &self.base
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(KEY_HEADER, &self.key_id)
            .header(SECRET_HEADER, self.secret_key.as_str())
    }
}

/// Turn a non-2xx response into a `BrokerError::Api` carrying the body.
pub(crate) async fn check_status(response: reqwest::Response) -> BrokerResult<reqwest::Response> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(BrokerError::Api { status, message });
    }
    Ok(response)
}

fn parse_decimal(field: &str, value: &str) -> BrokerResult<f64> {
    value
        .parse::<f64>()
        .map_err(|e| BrokerError::Parse(format!("invalid {} '{}': {}", field, value, e)))
}

#[async_trait]
impl TradingApi for AlpacaTradingClient {
    async fn account(&self) -> BrokerResult<AccountSnapshot> {
        let url = format!("{}/v2/account", self.base);
        let response = self
            .authed(self.client.get(&url))
            .send()
            .await
            .map_err(|e| BrokerError::Http(format!("failed to get account: {}", e)))?;
        let response = check_status(response).await?;

        let account: AccountResponse = response
            .json()
            .await
            .map_err(|e| BrokerError::Parse(format!("account response: {}", e)))?;

        Ok(AccountSnapshot {
            equity: parse_decimal("equity", &account.equity)?,
            last_equity: parse_decimal("last_equity", &account.last_equity)?,
            status: account.status,
        })
    }

    async fn submit_order(&self, order: &Order) -> BrokerResult<OrderReceipt> {
        let url = format!("{}/v2/orders", self.base);
        let body = OrderRequest {
            symbol: &order.symbol,
            qty: order.qty.to_string(),
            side: order.side.to_string(),
            r#type: "market",
            time_in_force: order.time_in_force.to_string(),
        };

        let response = self
            .authed(self.client.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| BrokerError::Http(format!("failed to submit order: {}", e)))?;
        let response = check_status(response).await?;

        let placed: OrderResponse = response
            .json()
            .await
            .map_err(|e| BrokerError::Parse(format!("order response: {}", e)))?;

        debug!("order accepted: id={} status={}", placed.id, placed.status);
        Ok(OrderReceipt {
            id: placed.id,
            status: placed.status,
        })
    }

    async fn positions(&self) -> BrokerResult<Vec<Position>> {
        let url = format!("{}/v2/positions", self.base);
        let response = self
            .authed(self.client.get(&url))
            .send()
            .await
            .map_err(|e| BrokerError::Http(format!("failed to list positions: {}", e)))?;
        let response = check_status(response).await?;

        let raw: Vec<PositionResponse> = response
            .json()
            .await
            .map_err(|e| BrokerError::Parse(format!("positions response: {}", e)))?;

        raw.into_iter()
            .map(|p| {
                Ok(Position {
                    qty: parse_decimal("qty", &p.qty)?,
                    unrealized_plpc: parse_decimal("unrealized_plpc", &p.unrealized_plpc)?,
                    symbol: p.symbol,
                })
            })
            .collect()
    }
}
