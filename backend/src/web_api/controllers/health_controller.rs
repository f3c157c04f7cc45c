use axum::Json;
use chrono::Utc;

use crate::health_response::HealthResponse;

pub struct HealthController {}

impl HealthController {
    pub async fn get() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        })
    }
}
