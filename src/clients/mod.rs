/// External API clients module
use crate::errors::MissionResult;
use crate::services::{TelemetryData, TelemetrySink};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> MissionResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("mission-control/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Posts telemetry records to a remote collector as JSON
pub struct HttpTelemetryClient {
    http_client: HttpClient,
    base_url: String,
}

impl HttpTelemetryClient {
    pub fn new(base_url: String, timeout: Duration) -> MissionResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            base_url,
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TelemetrySink for HttpTelemetryClient {
    async fn send(&self, spacecraft_id: &str, data: TelemetryData) -> MissionResult<bool> {
        let body = serde_json::json!({
            "spacecraft_id": spacecraft_id,
            "sent_at": Utc::now(),
            "data": data,
        });

        let resp = self
            .http_client
            .get_client()
            .post(&self.base_url)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            warn!(
                "Telemetry collector rejected record for {} with status {}",
                spacecraft_id,
                resp.status()
            );
            return Ok(false);
        }
        Ok(true)
    }

    /// Collectors usually accept POST only, so a 4xx to this GET still proves
    /// the link is up. Only a 5xx counts as unhealthy.
    async fn verify_connection(&self) -> MissionResult<bool> {
        let resp = self
            .http_client
            .get_client()
            .get(&self.base_url)
            .send()
            .await?;
        Ok(!resp.status().is_server_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MissionError;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::Value;
    use tokio::sync::mpsc;

    const DEAD_COLLECTOR: &str = "http://127.0.0.1:9/telemetry";

    fn client_for(url: &str) -> HttpTelemetryClient {
        HttpTelemetryClient::new(url.to_string(), Duration::from_secs(2)).unwrap()
    }

    /// POST-only collector answering every record with `status`
    async fn spawn_collector(status: StatusCode) -> (String, mpsc::UnboundedReceiver<Value>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Router::new().route(
            "/telemetry",
            post(move |Json(body): Json<Value>| {
                let tx = tx.clone();
                async move {
                    let _ = tx.send(body);
                    status
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service()).await.unwrap();
        });

        (format!("http://{addr}/telemetry"), rx)
    }

    #[test]
    fn test_client_keeps_base_url() {
        assert_eq!(client_for(DEAD_COLLECTOR).base_url(), DEAD_COLLECTOR);
    }

    #[tokio::test]
    async fn test_unreachable_collector_is_transport_error() {
        let client = client_for(DEAD_COLLECTOR);
        let err = client
            .send("SC-001", TelemetryData::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MissionError::Telemetry(_)));
        assert!(client.verify_connection().await.is_err());
    }

    #[tokio::test]
    async fn test_accepted_record_is_posted_as_json() {
        let (url, mut rx) = spawn_collector(StatusCode::OK).await;
        let client = client_for(&url);

        let mut data = TelemetryData::new();
        data.insert("event".to_string(), "launch".to_string());
        data.insert("destination".to_string(), "Mars".to_string());
        assert!(client.send("SC-001", data).await.unwrap());

        let body = rx.recv().await.unwrap();
        assert_eq!(body["spacecraft_id"], "SC-001");
        assert!(body["sent_at"].is_string());
        assert_eq!(body["data"]["event"], "launch");
        assert_eq!(body["data"]["destination"], "Mars");
    }

    #[tokio::test]
    async fn test_rejected_record_is_not_an_error() {
        let (url, mut rx) = spawn_collector(StatusCode::SERVICE_UNAVAILABLE).await;
        let client = client_for(&url);

        assert!(!client.send("SC-002", TelemetryData::new()).await.unwrap());
        assert_eq!(rx.recv().await.unwrap()["spacecraft_id"], "SC-002");
    }

    #[tokio::test]
    async fn test_post_only_collector_counts_as_reachable() {
        let (url, _rx) = spawn_collector(StatusCode::OK).await;
        assert!(client_for(&url).verify_connection().await.unwrap());
    }
}
