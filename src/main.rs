use daysweep::application::{monitor, sweep};
use daysweep::config::SweepConfig;
use daysweep::domain::repositories::broker::TradingApi;
use daysweep::domain::services::indicators::Indicator;
use daysweep::domain::services::universe::{self, fallback_universe};
use daysweep::infrastructure::alpaca_data::AlpacaDataClient;
use daysweep::infrastructure::alpaca_trading::AlpacaTradingClient;
use daysweep::secrets::Credentials;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daysweep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fatal startup path: no credentials, no run.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("missing broker credentials: {} (check your .env file)", e);
            return Err(e.into());
        }
    };

    let config = SweepConfig::from_env();
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let trading = match AlpacaTradingClient::new(
        &credentials.key_id,
        &credentials.secret_key,
        config.paper,
        timeout,
    ) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to construct trading client: {}", e);
            return Err(e.into());
        }
    };
    let data = match AlpacaDataClient::new(&credentials.key_id, &credentials.secret_key, timeout) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to construct data client: {}", e);
            return Err(e.into());
        }
    };

    // Fatal startup path: verify credentials and account state before any
    // order can possibly be placed.
    let account = match trading.account().await {
        Ok(account) => account,
        Err(e) => {
            error!("failed to authenticate with Alpaca: {}", e);
            return Err(e.into());
        }
    };
    if !account.is_active() {
        error!(
            "account status is '{}', expected 'ACTIVE'; refusing to trade",
            account.status
        );
        return Err(format!("account not active: {}", account.status).into());
    }
    info!(
        "connected to Alpaca ({})",
        if config.paper { "paper" } else { "live" }
    );

    // Soft-fail path: a broken universe file falls back to the fixed list.
    let symbols = match universe::load_symbols(&config.universe_file) {
        Ok(symbols) if !symbols.is_empty() => {
            info!(
                "loaded {} symbols from {}",
                symbols.len(),
                config.universe_file.display()
            );
            symbols
        }
        Ok(_) => {
            warn!(
                "universe file {} yielded no symbols, using fallback list",
                config.universe_file.display()
            );
            fallback_universe()
        }
        Err(e) => {
            warn!("failed to load universe: {}, using fallback list", e);
            fallback_universe()
        }
    };

    // The buy rule reads closes only; no derived columns needed.
    let indicators: Vec<Box<dyn Indicator>> = Vec::new();
    let report = sweep::run_sweep(&trading, &data, &config, &indicators, &symbols).await;
    info!(
        "sweep complete: {} symbols, {} orders submitted, {} failures",
        report.len(),
        report.ordered(),
        report.failed()
    );

    monitor::report_performance(&trading).await;

    Ok(())
}
