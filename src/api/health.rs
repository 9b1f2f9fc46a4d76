//! Health check endpoint

use serde::Serialize;

use super::IndentedJson;

#[derive(Serialize)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: &'static str,
    /// Version of the service
    pub version: &'static str,
}

pub async fn health_check() -> IndentedJson<HealthResponse> {
    IndentedJson(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
