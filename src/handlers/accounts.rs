//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/v1/accounts - Create new account
//! - GET /api/v1/accounts - List accounts, paginated
//! - GET /api/v1/accounts/:id - Get account by ID
//! - PUT /api/v1/accounts/:id/balance - Set an absolute balance
//! - DELETE /api/v1/accounts/:id - Delete account

use crate::{
    db::DbPool,
    error::AppError,
    models::account::{Account, CreateAccountRequest, ListAccountsParams, UpdateBalanceRequest},
    repo,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "owner": "alice",
///   "currency": "EUR",   // optional, defaults to USD
///   "balance": 10000     // optional, defaults to 0
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the created account
/// - **Error (400)**: currency outside the supported set
/// - **Error (500)**: database error
pub async fn create_account(
    State(pool): State<DbPool>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<Json<Account>, AppError> {
    let account = repo::accounts::create(
        &pool,
        &request.owner,
        request.balance,
        &request.currency,
    )
    .await?;

    Ok(Json(account))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: account details
/// - **Error (404)**: account not found
pub async fn get_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Account>, AppError> {
    let account = repo::accounts::get(&pool, account_id).await?;

    Ok(Json(account))
}

/// List accounts, ordered by id ascending.
///
/// # Query Parameters
///
/// - `limit` - page size, defaults to 20, capped at 100
/// - `offset` - rows to skip, defaults to 0
pub async fn list_accounts(
    State(pool): State<DbPool>,
    Query(params): Query<ListAccountsParams>,
) -> Result<Json<Vec<Account>>, AppError> {
    let (limit, offset) = super::clamp_page(params.limit, params.offset);
    let accounts = repo::accounts::list(&pool, limit, offset).await?;

    Ok(Json(accounts))
}

/// Set an account balance to an absolute value.
///
/// Admin/test path. Money movement between accounts goes through
/// `POST /api/v1/transfers` so balances, entries, and the transfer record
/// stay consistent.
pub async fn update_account_balance(
    State(pool): State<DbPool>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<UpdateBalanceRequest>,
) -> Result<Json<Account>, AppError> {
    let account = repo::accounts::update_balance(&pool, account_id, request.balance).await?;

    Ok(Json(account))
}

/// Delete an account.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: account not found
pub async fn delete_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo::accounts::delete(&pool, account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
