//! Transfer data model and API request/response types.
//!
//! This module defines:
//! - `Transfer`: Database entity representing one money movement
//! - `CreateTransferRequest`: Request body for executing a transfer
//! - `ListTransfersParams`: Query parameters for listing transfers
//! - `TransferResult`: The composite record a successful transfer returns

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{account::Account, entry::Entry};

/// A single money movement between two accounts.
///
/// # Database Table
///
/// Maps to the `transfers` table. Transfers are append-only: created
/// exclusively by the transfer executor and never updated afterwards. The
/// schema enforces `amount > 0` and `from_account_id <> to_account_id`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Transfer {
    /// Unique identifier for this transfer
    pub id: Uuid,

    /// Account the money left
    pub from_account_id: Uuid,

    /// Account the money arrived at
    pub to_account_id: Uuid,

    /// Amount moved, in minor units. Always positive.
    pub amount: i64,

    /// Timestamp when the transfer was created
    pub created_at: DateTime<Utc>,

    /// Present for schema uniformity; transfers are never updated
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /api/v1/transfers`.
///
/// # JSON Example
///
/// ```json
/// {
///   "from_account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "to_account_id": "660e8400-e29b-41d4-a716-446655440001",
///   "amount": 2500
/// }
/// ```
///
/// # Validation
///
/// - `amount` must be positive
/// - the two accounts must be different
///
/// Both are checked before any write and fail with HTTP 400.
#[derive(Debug, Deserialize)]
pub struct CreateTransferRequest {
    /// Account to move money out of
    pub from_account_id: Uuid,

    /// Account to move money into
    pub to_account_id: Uuid,

    /// Amount in minor units, must be positive
    pub amount: i64,
}

/// Query parameters for `GET /api/v1/transfers`.
///
/// Lists the traffic between two accounts: transfers leaving
/// `from_account_id` or arriving at `to_account_id`.
#[derive(Debug, Deserialize)]
pub struct ListTransfersParams {
    pub from_account_id: Uuid,
    pub to_account_id: Uuid,

    /// Page size, capped at [`super::MAX_PAGE_SIZE`]
    #[serde(default = "super::default_limit")]
    pub limit: i64,

    /// Rows to skip
    #[serde(default)]
    pub offset: i64,
}

/// Everything a committed transfer produced.
///
/// Returned by the transfer executor so the caller can observe the created
/// transfer row, both bookkeeping entries, and both account snapshots as
/// they stood at commit time, without issuing follow-up reads.
#[derive(Debug, Clone, Serialize)]
pub struct TransferResult {
    /// The created transfer row
    pub transfer: Transfer,

    /// Source account after the debit was applied
    pub from_account: Account,

    /// Destination account after the credit was applied
    pub to_account: Account,

    /// Debit entry, `amount == -transfer.amount`
    pub from_entry: Entry,

    /// Credit entry, `amount == transfer.amount`
    pub to_entry: Entry,
}
