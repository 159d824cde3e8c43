//! Liveness endpoint for load balancers and the startup probe.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogHealth {
    /// `ok` when the catalog database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Always 200. A database outage shows as `degraded` in the body.
async fn catalog_health(State(state): State<AppState>) -> Json<CatalogHealth> {
    let db_healthy = match cinedex_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Catalog database unreachable");
            false
        }
    };

    Json(CatalogHealth {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(catalog_health))
}
