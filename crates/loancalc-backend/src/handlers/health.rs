use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use loancalc::log;

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Debug, Serialize)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

/// Pool counters as the driver reports them; reading them issues no query.
#[derive(Debug, Serialize)]
pub struct PoolInfo {
    pub size: u32,
    pub idle: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub database: PoolInfo,
}

fn human_readable_uptime(uptime: TimeDelta) -> String {
    let uptime_seconds = uptime.num_seconds();
    let days = uptime.num_days();
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn uptime_since(started_at: DateTime<Utc>, now: DateTime<Utc>) -> UptimeInfo {
    let uptime = now.signed_duration_since(started_at);
    UptimeInfo {
        seconds: uptime.num_seconds(),
        human: human_readable_uptime(uptime),
    }
}

pub async fn get(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let now = Utc::now();

    let health_response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: now.to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: uptime_since(state.started_at, now),
        database: PoolInfo {
            size: state.pool.size(),
            idle: state.pool.num_idle(),
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}
