//! Analytics handler

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::{AppError, AppState, AuthUser};
use tally_core::analytics::Analytics;
use tally_core::store::TransactionStore;

/// GET /api/analytics - Totals, category breakdown and time series
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Analytics>, AppError> {
    let transactions = state
        .store
        .list_transactions(&user_id)
        .map_err(AppError::from_core)?;

    Ok(Json(Analytics::from_transactions(&transactions)))
}
