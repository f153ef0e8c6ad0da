//! Admin dashboard handlers

use axum::Json;

use tally_core::admin::AdminStats;

/// GET /api/admin/stats - Platform-wide statistics
pub async fn admin_stats() -> Json<AdminStats> {
    Json(AdminStats::sample())
}
