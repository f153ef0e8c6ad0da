//! Budget optimization handler

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::{AppError, AppState, MAX_BODY_SIZE};
use tally_core::models::Transaction;
use tally_core::{generate_suggestions, Error};

const GENERATE_FAILED: &str = "Failed to generate optimization suggestions";

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub suggestions: String,
}

/// POST /api/optimize-budget - Rule-based savings suggestions
///
/// Body: `{"transactions": [...]}`, newest first. A missing or empty list
/// is a 400; anything unreadable is reported as a generation failure.
pub async fn optimize_budget(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<OptimizeResponse>, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::internal(GENERATE_FAILED))?;

    let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
        error!(error = %e, "Unreadable optimize request");
        AppError::internal(GENERATE_FAILED)
    })?;

    let records = match body.get("transactions") {
        None | Some(Value::Null) => return Err(AppError::from_core(Error::EmptyInput)),
        Some(Value::Array(items)) if items.is_empty() => {
            return Err(AppError::from_core(Error::EmptyInput))
        }
        Some(records) => records.clone(),
    };

    let transactions: Vec<Transaction> = serde_json::from_value(records).map_err(|e| {
        error!(error = %e, "Malformed transactions in optimize request");
        AppError::internal(GENERATE_FAILED)
    })?;

    let month = state.current_month();
    let suggestions = generate_suggestions(&transactions, month).map_err(|e| match e {
        Error::EmptyInput => AppError::from_core(e),
        other => {
            error!(error = %other, "Optimization failed");
            AppError::internal(GENERATE_FAILED)
        }
    })?;

    info!(
        count = transactions.len(),
        month, "Generated budget suggestions"
    );
    Ok(Json(OptimizeResponse { suggestions }))
}
