mod app;
mod config;
mod main_lib;
mod ui;

use config::Config;
use main_lib::{build_dashboard, init_tracing};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config)?;
    let dashboard = build_dashboard(&config);

    tracing::info!(
        "Starting dashboard: base currency {}, rates from {}",
        config.base_currency,
        config.rates_url
    );
    app::run(dashboard, config.refresh_interval).await
}
