//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    Extension, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::{AppError, AppState, AuthUser, SuccessResponse, MAX_BODY_SIZE};
use tally_core::models::{NewTransaction, Transaction, TransactionType};
use tally_core::store::TransactionStore;

/// Body of POST /api/transactions
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to today
    pub date: Option<NaiveDate>,
}

/// GET /api/transactions - The user's transactions, newest first
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = state
        .store
        .list_transactions(&user_id)
        .map_err(AppError::from_core)?;

    Ok(Json(transactions))
}

/// POST /api/transactions - Record a transaction
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    request: Request,
) -> Result<Json<Transaction>, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: CreateTransactionRequest =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    if req.category.trim().is_empty() {
        return Err(AppError::bad_request("Category is required"));
    }

    let new_tx = NewTransaction {
        transaction_type: req.transaction_type,
        amount: req.amount,
        category: req.category,
        description: req.description,
        date: req
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    };

    let transaction = state
        .store
        .insert_transaction(&user_id, new_tx)
        .map_err(AppError::from_core)?;

    info!(user = %user_id, id = %transaction.id, "Created transaction");
    Ok(Json(transaction))
}

/// DELETE /api/transactions/:id - Remove one of the user's transactions
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let deleted = state
        .store
        .delete_transaction(&user_id, &id)
        .map_err(AppError::from_core)?;

    if !deleted {
        return Err(AppError::not_found("Transaction not found"));
    }

    info!(user = %user_id, id = %id, "Deleted transaction");
    Ok(Json(SuccessResponse { success: true }))
}
