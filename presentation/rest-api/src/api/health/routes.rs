use poem_openapi::{ApiResponse, OpenApi};

use crate::api::tags::ApiTags;

#[derive(ApiResponse)]
pub enum HealthResponse {
    /// Service is up
    #[oai(status = 200)]
    Ok,
}

/// Liveness probe for load balancers and container orchestrators.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns 200 with an empty body while the process is serving requests.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        HealthResponse::Ok
    }
}
