//! Account data model and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `UpdateBalanceRequest`: Request body for the absolute balance update
//! - `ListAccountsParams`: Query parameters for listing accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currencies an account may be denominated in.
///
/// The set is closed. Any other code is rejected with `InvalidArgument`
/// at account creation time, never at transfer time.
pub const SUPPORTED_CURRENCIES: &[&str] = &["USD", "EUR", "SAR"];

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table.
///
/// # Balance Storage
///
/// Balances are stored as `i64` minor currency units (cents) to avoid
/// floating-point precision issues. The balance is only ever mutated through
/// the atomic add-to-balance statement driven by the transfer executor, or
/// through the explicit absolute update on the admin path.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Name of the account holder
    pub owner: String,

    /// Current balance in minor currency units
    ///
    /// Signed: the schema does not force balances to stay non-negative,
    /// overdraft policy belongs to the layer above the ledger.
    pub balance: i64,

    /// Currency code, one of [`SUPPORTED_CURRENCIES`]
    pub currency: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last balance update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "owner": "alice",
///   "currency": "EUR",
///   "balance": 10000
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Name of the account holder
    pub owner: String,

    /// Currency code (defaults to "USD" if not provided)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Initial balance in minor units (defaults to 0 if not provided)
    #[serde(default)]
    pub balance: i64,
}

/// Default currency value when not specified in request.
fn default_currency() -> String {
    "USD".to_string()
}

/// Request body for setting an account balance to an absolute value.
///
/// Test/admin path only. Transfers never use this; they go through the
/// atomic delta update inside their own transaction.
#[derive(Debug, Deserialize)]
pub struct UpdateBalanceRequest {
    /// New balance in minor units
    pub balance: i64,
}

/// Query parameters for `GET /api/v1/accounts`.
#[derive(Debug, Deserialize)]
pub struct ListAccountsParams {
    /// Page size, capped at [`super::MAX_PAGE_SIZE`]
    #[serde(default = "super::default_limit")]
    pub limit: i64,

    /// Rows to skip
    #[serde(default)]
    pub offset: i64,
}
