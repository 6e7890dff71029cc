//! Account repository.
//!
//! Single-row CRUD on `accounts` plus the two balance mutations: the
//! absolute update (admin/test path) and the atomic delta update the
//! transfer executor builds on.

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::account::{Account, SUPPORTED_CURRENCIES},
};

/// Create a new account.
///
/// The currency must be a member of the closed [`SUPPORTED_CURRENCIES`] set;
/// anything else fails with `InvalidArgument` before the insert is attempted.
pub async fn create(
    db: impl PgExecutor<'_>,
    owner: &str,
    balance: i64,
    currency: &str,
) -> Result<Account, AppError> {
    if !SUPPORTED_CURRENCIES.contains(&currency) {
        return Err(AppError::InvalidArgument(format!(
            "unsupported currency {currency:?}"
        )));
    }

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (owner, balance, currency)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(owner)
    .bind(balance)
    .bind(currency)
    .fetch_one(db)
    .await?;

    Ok(account)
}

/// Fetch one account by id.
pub async fn get(db: impl PgExecutor<'_>, id: Uuid) -> Result<Account, AppError> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::NotFound("account"))
}

/// Set an account balance to an absolute value.
///
/// Admin/test path. Transfers never call this; they use [`add_to_balance`]
/// so concurrent deltas cannot overwrite each other.
pub async fn update_balance(
    db: impl PgExecutor<'_>,
    id: Uuid,
    balance: i64,
) -> Result<Account, AppError> {
    sqlx::query_as::<_, Account>(
        r#"
        UPDATE accounts
        SET balance = $2, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(balance)
    .fetch_optional(db)
    .await?
    .ok_or(AppError::NotFound("account"))
}

/// Apply a signed delta to an account balance and return the updated row.
///
/// This is one atomic read-modify-write statement: the addition happens
/// inside the database against the row's current value, under the row lock
/// the UPDATE itself takes, so two concurrent transfers touching the same
/// account can never lose an update. Callers that mutate two accounts within
/// one transaction must visit them in
/// [`crate::services::transfer_service::order_pair`] order.
pub async fn add_to_balance(
    db: impl PgExecutor<'_>,
    id: Uuid,
    delta: i64,
) -> Result<Account, AppError> {
    sqlx::query_as::<_, Account>(
        r#"
        UPDATE accounts
        SET balance = balance + $2, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(delta)
    .fetch_optional(db)
    .await?
    .ok_or(AppError::NotFound("account"))
}

/// List accounts ordered by id ascending.
pub async fn list(
    db: impl PgExecutor<'_>,
    limit: i64,
    offset: i64,
) -> Result<Vec<Account>, AppError> {
    let accounts = sqlx::query_as::<_, Account>(
        r#"
        SELECT * FROM accounts
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(accounts)
}

/// Delete an account. Test/admin path.
///
/// Fails with `NotFound` if the id does not exist. Accounts still referenced
/// by entries or transfers are protected by the foreign keys.
pub async fn delete(db: impl PgExecutor<'_>, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("account"));
    }
    Ok(())
}
