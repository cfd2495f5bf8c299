use grubdash::config::Config;
use grubdash::http;
use grubdash::lifecycle::{setup_tracing, DeliverySystem};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::load().map_err(|e| e.to_string())?;
    info!(port = config.port, "Starting delivery service");

    let system = DeliverySystem::from_config(&config).map_err(|e| {
        error!(error = %e, "Failed to load seed data");
        e.to_string()
    })?;

    if let Err(e) = http::serve(&config, system.state()).await {
        error!(error = %e, "Server failed");
        system.shutdown().await?;
        return Err(e.to_string());
    }

    system.shutdown().await?;
    info!("Server shut down");
    Ok(())
}
