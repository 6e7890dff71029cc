//! Bookkeeping entry data model and API types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One ledger line: a signed balance change on a single account.
///
/// # Database Table
///
/// Maps to the `entries` table. Entries are append-only. Each one is created
/// in the same database transaction as the transfer it belongs to, and a
/// committed transfer always owns exactly two of them: `-amount` on the
/// source account and `+amount` on the destination.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Entry {
    /// Unique identifier for this entry
    pub id: Uuid,

    /// Account whose balance this entry records a change to
    pub account_id: Uuid,

    /// Signed amount in minor units: negative for a debit, positive for a
    /// credit
    pub amount: i64,

    /// Timestamp when the entry was created
    pub created_at: DateTime<Utc>,

    /// Present for schema uniformity; entries are never updated
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for `GET /api/v1/entries`.
#[derive(Debug, Deserialize)]
pub struct ListEntriesParams {
    /// Account whose entries to list
    pub account_id: Uuid,

    /// Page size, capped at [`super::MAX_PAGE_SIZE`]
    #[serde(default = "super::default_limit")]
    pub limit: i64,

    /// Rows to skip
    #[serde(default)]
    pub offset: i64,
}
