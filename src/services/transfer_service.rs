//! Transfer executor - the transactional core of the ledger.
//!
//! One call to [`execute_transfer`] performs four writes as a single unit:
//! the transfer record, a debit entry, a credit entry, and both account
//! balance updates. The database guarantees all-or-nothing execution; this
//! module guarantees the writes cannot deadlock against each other.
//!
//! # Deadlock avoidance
//!
//! Two transfers running at once between the same pair of accounts in
//! opposite directions would deadlock if each locked its own "from" row
//! first. Every two-account mutation therefore visits the rows in the fixed
//! total order given by [`order_pair`], ascending account id, regardless of
//! which side is the source. Both transactions then request the same row
//! first, one of them waits, and circular wait is impossible.

use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{account::Account, transfer::TransferResult},
    repo,
};

/// How many times the caller of the executor should attempt a transfer that
/// keeps aborting with a retryable [`AppError::Conflict`]. The executor
/// itself never retries.
pub const MAX_TRANSFER_ATTEMPTS: u32 = 3;

/// Upper bound on waiting for a contended account row lock. When it expires
/// the store raises `lock_not_available` (55P03), the transaction is rolled
/// back, and the caller sees a retryable `Conflict`.
const LOCK_TIMEOUT: &str = "SET LOCAL lock_timeout = '5s'";

/// Move `amount` minor units from one account to another, atomically.
///
/// # Preconditions
///
/// Checked before any write, failing with `InvalidArgument`:
/// - `amount > 0`
/// - `from_account_id != to_account_id`
///
/// # Process
///
/// 1. Begin one database transaction and bound its lock waits.
/// 2. Insert the transfer row (an unknown account id trips the foreign key
///    here and surfaces as `NotFound`).
/// 3. Insert the debit entry (`-amount`) and the credit entry (`+amount`).
/// 4. Apply both balance deltas with the atomic add-to-balance statement,
///    visiting the two rows in [`order_pair`] order.
/// 5. Commit.
///
/// Any error at any step rolls the whole scope back: the sqlx transaction
/// rolls back when dropped, which also covers the caller cancelling the
/// in-flight future before commit. No partial transfer is ever observable.
///
/// # Returns
///
/// The created transfer, both entries, and both post-update account
/// snapshots.
pub async fn execute_transfer(
    pool: &DbPool,
    from_account_id: Uuid,
    to_account_id: Uuid,
    amount: i64,
) -> Result<TransferResult, AppError> {
    if amount <= 0 {
        return Err(AppError::InvalidArgument(
            "transfer amount must be positive".to_string(),
        ));
    }
    if from_account_id == to_account_id {
        return Err(AppError::InvalidArgument(
            "cannot transfer from an account to itself".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    sqlx::query(LOCK_TIMEOUT).execute(&mut *tx).await?;

    let transfer =
        repo::transfers::create(&mut *tx, from_account_id, to_account_id, amount).await?;

    let from_entry = repo::entries::create(&mut *tx, from_account_id, -amount).await?;
    let to_entry = repo::entries::create(&mut *tx, to_account_id, amount).await?;

    let (from_account, to_account) =
        apply_deltas(&mut *tx, from_account_id, to_account_id, amount).await?;

    tx.commit().await?;

    Ok(TransferResult {
        transfer,
        from_account,
        to_account,
        from_entry,
        to_entry,
    })
}

/// Apply `-amount` to the source and `+amount` to the destination, locking
/// the rows in [`order_pair`] order. Returns `(from_account, to_account)`.
async fn apply_deltas(
    db: &mut sqlx::PgConnection,
    from_account_id: Uuid,
    to_account_id: Uuid,
    amount: i64,
) -> Result<(Account, Account), AppError> {
    if order_pair(from_account_id, to_account_id) == (from_account_id, to_account_id) {
        let from_account = repo::accounts::add_to_balance(&mut *db, from_account_id, -amount).await?;
        let to_account = repo::accounts::add_to_balance(&mut *db, to_account_id, amount).await?;
        Ok((from_account, to_account))
    } else {
        let to_account = repo::accounts::add_to_balance(&mut *db, to_account_id, amount).await?;
        let from_account = repo::accounts::add_to_balance(&mut *db, from_account_id, -amount).await?;
        Ok((from_account, to_account))
    }
}

/// Fixed total order for visiting a pair of account rows.
///
/// Returns the pair sorted ascending. Every call site that updates two
/// accounts within one transaction must lock them in this order; it is the
/// ordering rule itself, not any particular direction of money movement,
/// that prevents circular wait.
pub fn order_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a < b { (a, b) } else { (b, a) }
}
