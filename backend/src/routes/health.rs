//! Health endpoints
//!
//! `/health` and `/health/live` report on the process alone; `/health/ready`
//! pings PostgreSQL, the one dependency this service has, and answers 503
//! until it is reachable.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Readiness report. `database` carries the failure text when the ping
/// fails so operators do not have to chase logs.
#[derive(Serialize)]
pub struct ReadinessStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub database: DependencyStatus,
}

#[derive(Serialize)]
pub struct DependencyStatus {
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe. Traffic should only be routed here once the
/// database answers.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadinessStatus>, (StatusCode, Json<ReadinessStatus>)> {
    let database = match db::ping(state.db()).await {
        Ok(()) => DependencyStatus {
            reachable: true,
            detail: None,
        },
        Err(e) => DependencyStatus {
            reachable: false,
            detail: Some(e.to_string()),
        },
    };

    let response = ReadinessStatus {
        status: if database.reachable { "ready" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    };

    if response.database.reachable {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Liveness probe. Replies as long as the process can serve requests;
/// dependencies are deliberately not consulted.
pub async fn liveness_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "alive",
        version: env!("CARGO_PKG_VERSION"),
    })
}
