use alertgate::{
    config::AppConfig,
    faultcenter::{create_alert_channel, dispatcher::FaultCenterDispatcher},
    server::run_server,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let use_ansi = atty::is(atty::Stream::Stdout);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("alertgate={},tower_http=debug", log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(use_ansi) // Disable ANSI colors in non-terminal environments
        )
        .init();

    let config = AppConfig::from_env()?;

    let (alert_tx, alert_rx) = create_alert_channel(100);

    let dispatcher = FaultCenterDispatcher::new(&config).await?;
    tokio::spawn(async move {
        dispatcher.run(alert_rx).await;
    });

    run_server(config, alert_tx).await?;

    Ok(())
}
