//! API handlers.
//!
//! Request bodies are taken as raw bytes and decoded here, so every decode
//! failure (bad JSON, wrong type) is answered with a 400 whatever the
//! request's content type. Absent fields take their zero value.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::types::{Account, AccountId, OperationCode, Transaction};

/// Create-account request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateAccountRequest {
    /// Owner reference for the new account.
    pub document_number: String,
}

/// Record-transaction request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransactionRequest {
    /// Target account.
    pub account_id: AccountId,
    /// Operation type code.
    pub operation_type_id: OperationCode,
    /// Unsigned amount; the operation decides the sign.
    pub amount: f64,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create an account.
///
/// Transient `AccountAdditionRetry` failures are retried up to the
/// configured number of times; each attempt allocates a fresh ID.
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Account>, ApiError> {
    let request: CreateAccountRequest = decode(&body)?;

    let mut retries = 0;
    loop {
        match state.store.create_account(&request.document_number) {
            Ok(account) => return Ok(Json(account)),
            Err(err) if err.is_retryable() && retries < state.config.create_retries => {
                retries += 1;
                tracing::debug!(error = %err, retries, "retrying account creation");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Fetch an account by ID.
pub async fn fetch_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> Result<Json<Account>, ApiError> {
    let account_id: AccountId = account_id
        .parse()
        .map_err(|e| ApiError::BadRequest(format!("invalid account id {account_id:?}: {e}")))?;

    Ok(Json(state.store.fetch_account(account_id)?))
}

/// Record a transaction.
pub async fn transact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Transaction>, ApiError> {
    let request: TransactionRequest = decode(&body)?;

    let transaction = state.store.transact(
        request.account_id,
        request.operation_type_id,
        request.amount,
    )?;
    Ok(Json(transaction))
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}
