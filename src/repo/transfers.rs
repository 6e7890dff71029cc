//! Transfer repository.
//!
//! Append-only records of money movements. Rows are created exclusively by
//! the transfer executor and never updated. The schema enforces a positive
//! amount and distinct accounts; the executor checks both before writing so
//! those violations normally never reach the database.

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{error::AppError, models::transfer::Transfer};

/// Insert a transfer record.
pub async fn create(
    db: impl PgExecutor<'_>,
    from_account_id: Uuid,
    to_account_id: Uuid,
    amount: i64,
) -> Result<Transfer, AppError> {
    let transfer = sqlx::query_as::<_, Transfer>(
        r#"
        INSERT INTO transfers (from_account_id, to_account_id, amount)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(from_account_id)
    .bind(to_account_id)
    .bind(amount)
    .fetch_one(db)
    .await?;

    Ok(transfer)
}

/// Fetch one transfer by id.
pub async fn get(db: impl PgExecutor<'_>, id: Uuid) -> Result<Transfer, AppError> {
    sqlx::query_as::<_, Transfer>("SELECT * FROM transfers WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::NotFound("transfer"))
}

/// List the transfers leaving `from_account_id` or arriving at
/// `to_account_id`, ordered by id ascending.
pub async fn list(
    db: impl PgExecutor<'_>,
    from_account_id: Uuid,
    to_account_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Transfer>, AppError> {
    let transfers = sqlx::query_as::<_, Transfer>(
        r#"
        SELECT * FROM transfers
        WHERE from_account_id = $1 OR to_account_id = $2
        ORDER BY id
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(from_account_id)
    .bind(to_account_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(transfers)
}

/// Delete a transfer. Test/admin path.
pub async fn delete(db: impl PgExecutor<'_>, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM transfers WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("transfer"));
    }
    Ok(())
}
