/// Mission control service entry point
mod clients;
mod config;
mod domain;
mod errors;
mod handlers;
mod routes;
mod services;

use crate::clients::HttpTelemetryClient;
use crate::config::{AppConfig, TelemetryConfig};
use crate::domain::{Spacecraft, SpacecraftType};
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::{
    LogTelemetrySink, MissionControlService, NavigationCalculator, NavigationSystem,
    SimulatedWeatherService, TelemetrySink, WeatherOracle,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize collaborators
    let navigation: Arc<dyn NavigationCalculator> = Arc::new(NavigationSystem::new());
    let weather: Arc<dyn WeatherOracle> =
        Arc::new(SimulatedWeatherService::new(config.weather_seed));
    let telemetry = build_telemetry(&config.telemetry)?;

    match telemetry.verify_connection().await {
        Ok(true) => info!("Telemetry link verified"),
        Ok(false) => warn!("Telemetry link answered but is not healthy"),
        Err(e) => warn!("Telemetry link check failed: {}", e),
    }

    // Initialize services
    let mission = Arc::new(MissionControlService::new(
        weather.clone(),
        telemetry,
        navigation.clone(),
    ));

    if config.seed_fleet {
        register_sample_fleet(&mission).await?;
    }

    let state = AppState {
        mission,
        navigation,
        weather,
    };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("mission_control listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn build_telemetry(config: &TelemetryConfig) -> anyhow::Result<Arc<dyn TelemetrySink>> {
    let sink: Arc<dyn TelemetrySink> = match &config.url {
        Some(url) => {
            let client =
                HttpTelemetryClient::new(url.clone(), Duration::from_secs(config.timeout_seconds))?;
            info!("Telemetry will be posted to {}", client.base_url());
            Arc::new(client)
        }
        None => {
            info!("No TELEMETRY_URL set, telemetry goes to the log");
            Arc::new(LogTelemetrySink)
        }
    };
    Ok(sink)
}

async fn register_sample_fleet(mission: &MissionControlService) -> anyhow::Result<()> {
    let fleet = [
        Spacecraft::new("SC-001", "Voyager III", SpacecraftType::Satellite, 200.0),
        Spacecraft::new("SC-002", "Curiosity 2", SpacecraftType::Rover, 150.0),
        Spacecraft::new("SC-003", "Enterprise", SpacecraftType::Shuttle, 500.0),
        Spacecraft::new("SC-004", "Hubble 2", SpacecraftType::Satellite, 120.0),
        Spacecraft::new("SC-005", "ISS Next Gen", SpacecraftType::SpaceStation, 1000.0),
    ];

    for spacecraft in fleet {
        mission.register(spacecraft).await?;
    }
    info!("Sample fleet registered");
    Ok(())
}
