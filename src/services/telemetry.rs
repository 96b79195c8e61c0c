/// Telemetry collaborator
use crate::errors::MissionResult;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::info;

/// Key/value telemetry record
pub type TelemetryData = BTreeMap<String, String>;

#[async_trait]
pub trait TelemetrySink: Send + Sync {
    /// Deliver one record; `Ok(false)` means the sink refused it.
    async fn send(&self, spacecraft_id: &str, data: TelemetryData) -> MissionResult<bool>;

    async fn verify_connection(&self) -> MissionResult<bool>;
}

/// Writes telemetry to the application log
#[derive(Debug, Default)]
pub struct LogTelemetrySink;

#[async_trait]
impl TelemetrySink for LogTelemetrySink {
    async fn send(&self, spacecraft_id: &str, data: TelemetryData) -> MissionResult<bool> {
        let fields = data
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ");
        info!(spacecraft_id, "[TELEMETRY] {}", fields);
        Ok(true)
    }

    async fn verify_connection(&self) -> MissionResult<bool> {
        Ok(true)
    }
}

/// Build the record emitted after a successful launch
pub fn launch_record(destination: &str, fuel_level: f64) -> TelemetryData {
    TelemetryData::from([
        ("event".to_string(), "launch".to_string()),
        ("destination".to_string(), destination.to_string()),
        ("fuel_level".to_string(), fuel_level.to_string()),
    ])
}
