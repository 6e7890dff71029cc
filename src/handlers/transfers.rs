//! Transfer HTTP handlers.
//!
//! This module implements the transfer-related API endpoints:
//! - POST /api/v1/transfers - Execute a transfer between two accounts
//! - GET /api/v1/transfers/:id - Get transfer details
//! - GET /api/v1/transfers - List transfers between two accounts

use crate::{
    db::DbPool,
    error::AppError,
    models::transfer::{CreateTransferRequest, ListTransfersParams, Transfer, TransferResult},
    repo,
    services::transfer_service,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

/// Execute a transfer between two accounts.
///
/// # Request Body
///
/// ```json
/// {
///   "from_account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "to_account_id": "660e8400-e29b-41d4-a716-446655440001",
///   "amount": 2500
/// }
/// ```
///
/// # Atomicity
///
/// The transfer record, both bookkeeping entries, and both balance updates
/// are applied in one database transaction. Either everything commits or
/// nothing does.
///
/// # Retries
///
/// The executor never retries on its own. This call site re-runs a transfer
/// that aborted with a retryable conflict (serialization failure, deadlock
/// report, lock-wait timeout) up to
/// [`transfer_service::MAX_TRANSFER_ATTEMPTS`] times; an aborted attempt
/// leaves no trace, so re-running cannot double-apply.
///
/// # Response
///
/// - **Success (200 OK)**: the composite [`TransferResult`]
/// - **Error (400)**: non-positive amount or identical accounts
/// - **Error (404)**: either account does not exist
/// - **Error (409)**: still conflicting after the final attempt
pub async fn create_transfer(
    State(pool): State<DbPool>,
    Json(request): Json<CreateTransferRequest>,
) -> Result<Json<TransferResult>, AppError> {
    let mut attempt = 1;
    loop {
        match transfer_service::execute_transfer(
            &pool,
            request.from_account_id,
            request.to_account_id,
            request.amount,
        )
        .await
        {
            Err(err) if err.is_retryable() && attempt < transfer_service::MAX_TRANSFER_ATTEMPTS => {
                tracing::warn!(attempt, "transfer aborted by contention, retrying");
                attempt += 1;
            }
            result => return result.map(Json),
        }
    }
}

/// Get a specific transfer by ID.
pub async fn get_transfer(
    State(pool): State<DbPool>,
    Path(transfer_id): Path<Uuid>,
) -> Result<Json<Transfer>, AppError> {
    let transfer = repo::transfers::get(&pool, transfer_id).await?;

    Ok(Json(transfer))
}

/// List transfers between two accounts.
///
/// Returns transfers leaving `from_account_id` or arriving at
/// `to_account_id`.
///
/// # Query Parameters
///
/// - `from_account_id` / `to_account_id` - required
/// - `limit` / `offset` - pagination, defaults 20 / 0
pub async fn list_transfers(
    State(pool): State<DbPool>,
    Query(params): Query<ListTransfersParams>,
) -> Result<Json<Vec<Transfer>>, AppError> {
    let (limit, offset) = super::clamp_page(params.limit, params.offset);
    let transfers = repo::transfers::list(
        &pool,
        params.from_account_id,
        params.to_account_id,
        limit,
        offset,
    )
    .await?;

    Ok(Json(transfers))
}
