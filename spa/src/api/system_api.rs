use shared::{HealthResponse, StatsResponse};

use crate::api;
use crate::error::ApiError;

pub async fn health() -> Result<HealthResponse, ApiError> {
    api::get_json("/health").await
}

pub async fn stats() -> Result<StatsResponse, ApiError> {
    api::get_json("/stats").await
}
