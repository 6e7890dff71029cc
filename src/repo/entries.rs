//! Entry repository.
//!
//! Append-only bookkeeping rows. One entry per balance-affecting event on an
//! account; the transfer executor creates them in pairs inside its own
//! transaction. Entries are never updated.

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{error::AppError, models::entry::Entry};

/// Record a signed balance change against an account.
///
/// An unknown `account_id` trips the foreign key and surfaces as `NotFound`,
/// aborting whatever transaction this ran in.
pub async fn create(
    db: impl PgExecutor<'_>,
    account_id: Uuid,
    amount: i64,
) -> Result<Entry, AppError> {
    let entry = sqlx::query_as::<_, Entry>(
        r#"
        INSERT INTO entries (account_id, amount)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(account_id)
    .bind(amount)
    .fetch_one(db)
    .await?;

    Ok(entry)
}

/// Fetch one entry by id.
pub async fn get(db: impl PgExecutor<'_>, id: Uuid) -> Result<Entry, AppError> {
    sqlx::query_as::<_, Entry>("SELECT * FROM entries WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::NotFound("entry"))
}

/// List the entries of one account, ordered by id ascending.
pub async fn list(
    db: impl PgExecutor<'_>,
    account_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Entry>, AppError> {
    let entries = sqlx::query_as::<_, Entry>(
        r#"
        SELECT * FROM entries
        WHERE account_id = $1
        ORDER BY id
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(account_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(entries)
}

/// Delete an entry. Test/admin path.
pub async fn delete(db: impl PgExecutor<'_>, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM entries WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("entry"));
    }
    Ok(())
}
