// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Liveness probe

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
}

/// HTTP handler reporting that the server is up.
pub async fn health_http() -> Json<HealthResponse> {
    debug!("Health check");
    Json(HealthResponse {
        status: "alive".to_owned(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_alive() {
        let before = chrono::Utc::now().timestamp_millis();
        let Json(response) = health_http().await;
        assert_eq!(response.status, "alive");
        assert!(response.timestamp >= before);
    }
}
