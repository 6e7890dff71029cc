//! Bookkeeping entry HTTP handlers.
//!
//! Entries are created only as a side effect of transfers, so the HTTP
//! surface is read-only:
//! - GET /api/v1/entries?account_id=... - List one account's entries
//! - GET /api/v1/entries/:id - Get entry by ID

use crate::{
    db::DbPool,
    error::AppError,
    models::entry::{Entry, ListEntriesParams},
    repo,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

/// Get a specific entry by ID.
pub async fn get_entry(
    State(pool): State<DbPool>,
    Path(entry_id): Path<Uuid>,
) -> Result<Json<Entry>, AppError> {
    let entry = repo::entries::get(&pool, entry_id).await?;

    Ok(Json(entry))
}

/// List the entries recorded against one account.
///
/// # Query Parameters
///
/// - `account_id` - required, the account whose ledger lines to return
/// - `limit` / `offset` - pagination, defaults 20 / 0
pub async fn list_entries(
    State(pool): State<DbPool>,
    Query(params): Query<ListEntriesParams>,
) -> Result<Json<Vec<Entry>>, AppError> {
    let (limit, offset) = super::clamp_page(params.limit, params.offset);
    let entries = repo::entries::list(&pool, params.account_id, limit, offset).await?;

    Ok(Json(entries))
}
