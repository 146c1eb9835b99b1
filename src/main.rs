use atlas_client::bootstrap;
use atlas_client::config::Config;
use atlas_client::domain::ports::confirmation::StaticConfirmation;
use atlas_client::infrastructure::observability;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing and metrics
    let _observability = observability::init(&config).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    tracing::info!("Configuration loaded, backend at {}", config.api_base_url);

    let client = bootstrap::build_api_client(&config).await?;

    // No interactive front end here, so destructive actions are never confirmed
    let confirmation = Arc::new(StaticConfirmation(false));

    let state = bootstrap::build_app_state(&config, Arc::new(client), confirmation);
    state.load_all().await;

    let stats = state.dashboard.stats().await;
    tracing::info!(
        "Dashboard ready: {} employees, {} present today",
        stats.total_employees,
        stats.present_today
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    state.shutdown();

    Ok(())
}
