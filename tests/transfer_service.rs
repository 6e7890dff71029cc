mod common;

use ledger_service::{
    error::AppError,
    models::transfer::TransferResult,
    repo,
    services::transfer_service::{self, MAX_TRANSFER_ATTEMPTS},
};
use sqlx::PgPool;
use uuid::Uuid;

/// Re-run a transfer that aborted with a retryable conflict, the way the
/// transfer handler does.
async fn execute_with_retry(
    pool: &PgPool,
    from: Uuid,
    to: Uuid,
    amount: i64,
) -> Result<TransferResult, AppError> {
    let mut attempt = 1;
    loop {
        match transfer_service::execute_transfer(pool, from, to, amount).await {
            Err(err) if err.is_retryable() && attempt < MAX_TRANSFER_ATTEMPTS => attempt += 1,
            result => return result,
        }
    }
}

#[sqlx::test]
async fn transfer_moves_money_and_pairs_entries(pool: PgPool) {
    let from = common::create_test_account(&pool).await;
    let to = common::create_test_account(&pool).await;
    let amount = 10;
    let n = 5;

    for i in 1..=n {
        let result = transfer_service::execute_transfer(&pool, from.id, to.id, amount)
            .await
            .unwrap();

        assert_eq!(result.transfer.from_account_id, from.id);
        assert_eq!(result.transfer.to_account_id, to.id);
        assert_eq!(result.transfer.amount, amount);

        assert_eq!(result.from_entry.account_id, from.id);
        assert_eq!(result.from_entry.amount, -amount);
        assert_eq!(result.to_entry.account_id, to.id);
        assert_eq!(result.to_entry.amount, amount);

        // everything was durably committed
        repo::transfers::get(&pool, result.transfer.id).await.unwrap();
        repo::entries::get(&pool, result.from_entry.id).await.unwrap();
        repo::entries::get(&pool, result.to_entry.id).await.unwrap();

        // money is conserved at every step
        assert_eq!(result.from_account.balance, from.balance - i * amount);
        assert_eq!(result.to_account.balance, to.balance + i * amount);
        assert_eq!(
            result.from_account.balance + result.to_account.balance,
            from.balance + to.balance
        );
    }

    let from_after = repo::accounts::get(&pool, from.id).await.unwrap();
    let to_after = repo::accounts::get(&pool, to.id).await.unwrap();
    assert_eq!(from_after.balance, from.balance - n * amount);
    assert_eq!(to_after.balance, to.balance + n * amount);

    // one debit and one credit entry per committed transfer
    let from_entries = repo::entries::list(&pool, from.id, 100, 0).await.unwrap();
    let to_entries = repo::entries::list(&pool, to.id, 100, 0).await.unwrap();
    assert_eq!(from_entries.len(), n as usize);
    assert_eq!(to_entries.len(), n as usize);
    assert!(from_entries.iter().all(|entry| entry.amount == -amount));
    assert!(to_entries.iter().all(|entry| entry.amount == amount));
}

#[sqlx::test]
async fn rejects_invalid_arguments_before_writing(pool: PgPool) {
    let account1 = common::create_test_account(&pool).await;
    let account2 = common::create_test_account(&pool).await;

    let err = transfer_service::execute_transfer(&pool, account1.id, account1.id, 100)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));

    let err = transfer_service::execute_transfer(&pool, account1.id, account2.id, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));

    let err = transfer_service::execute_transfer(&pool, account1.id, account2.id, -50)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));

    // nothing was written
    let transfers = repo::transfers::list(&pool, account1.id, account2.id, 100, 0)
        .await
        .unwrap();
    assert!(transfers.is_empty());
    let entries = repo::entries::list(&pool, account1.id, 100, 0).await.unwrap();
    assert!(entries.is_empty());

    let account1_after = repo::accounts::get(&pool, account1.id).await.unwrap();
    let account2_after = repo::accounts::get(&pool, account2.id).await.unwrap();
    assert_eq!(account1_after.balance, account1.balance);
    assert_eq!(account2_after.balance, account2.balance);
}

#[sqlx::test]
async fn failed_transfer_leaves_no_trace(pool: PgPool) {
    let from = common::create_test_account(&pool).await;
    let missing = Uuid::new_v4();

    let err = transfer_service::execute_transfer(&pool, from.id, missing, 50)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let transfers = repo::transfers::list(&pool, from.id, missing, 100, 0)
        .await
        .unwrap();
    assert!(transfers.is_empty());
    let entries = repo::entries::list(&pool, from.id, 100, 0).await.unwrap();
    assert!(entries.is_empty());

    let from_after = repo::accounts::get(&pool, from.id).await.unwrap();
    assert_eq!(from_after.balance, from.balance);
}

#[sqlx::test]
async fn concurrent_transfers_on_shared_accounts_serialize(pool: PgPool) {
    let from = common::create_test_account(&pool).await;
    let to = common::create_test_account(&pool).await;
    let amount = 10;
    let n: i64 = 10;

    let mut handles = Vec::new();
    for _ in 0..n {
        let pool = pool.clone();
        let (from_id, to_id) = (from.id, to.id);
        handles.push(tokio::spawn(async move {
            execute_with_retry(&pool, from_id, to_id, amount).await
        }));
    }

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.from_entry.amount, -amount);
        assert_eq!(result.to_entry.amount, amount);
    }

    let from_after = repo::accounts::get(&pool, from.id).await.unwrap();
    let to_after = repo::accounts::get(&pool, to.id).await.unwrap();
    assert_eq!(from_after.balance, from.balance - n * amount);
    assert_eq!(to_after.balance, to.balance + n * amount);
}

#[sqlx::test]
async fn opposite_direction_transfers_do_not_deadlock(pool: PgPool) {
    let account1 = common::create_test_account(&pool).await;
    let account2 = common::create_test_account(&pool).await;
    let amount = 10;
    let n = 10usize;

    // n transfers each way, interleaved, all contending for the same two
    // account rows
    let mut handles = Vec::new();
    for i in 0..2 * n {
        let pool = pool.clone();
        let (from_id, to_id) = if i % 2 == 0 {
            (account1.id, account2.id)
        } else {
            (account2.id, account1.id)
        };
        handles.push(tokio::spawn(async move {
            execute_with_retry(&pool, from_id, to_id, amount).await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // equal traffic both ways nets out to zero
    let account1_after = repo::accounts::get(&pool, account1.id).await.unwrap();
    let account2_after = repo::accounts::get(&pool, account2.id).await.unwrap();
    assert_eq!(account1_after.balance, account1.balance);
    assert_eq!(account2_after.balance, account2.balance);

    // every transfer committed with its entry pair
    let entries1 = repo::entries::list(&pool, account1.id, 100, 0).await.unwrap();
    let entries2 = repo::entries::list(&pool, account2.id, 100, 0).await.unwrap();
    assert_eq!(entries1.len(), 2 * n);
    assert_eq!(entries2.len(), 2 * n);
    assert_eq!(entries1.iter().map(|entry| entry.amount).sum::<i64>(), 0);
    assert_eq!(entries2.iter().map(|entry| entry.amount).sum::<i64>(), 0);
}

#[sqlx::test]
async fn disjoint_pairs_commit_independently(pool: PgPool) {
    let account1 = common::create_test_account(&pool).await;
    let account2 = common::create_test_account(&pool).await;
    let account3 = common::create_test_account(&pool).await;
    let account4 = common::create_test_account(&pool).await;

    let first = {
        let pool = pool.clone();
        let (from_id, to_id) = (account1.id, account2.id);
        tokio::spawn(async move { execute_with_retry(&pool, from_id, to_id, 25).await })
    };
    let second = {
        let pool = pool.clone();
        let (from_id, to_id) = (account3.id, account4.id);
        tokio::spawn(async move { execute_with_retry(&pool, from_id, to_id, 40).await })
    };

    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    let account1_after = repo::accounts::get(&pool, account1.id).await.unwrap();
    let account2_after = repo::accounts::get(&pool, account2.id).await.unwrap();
    let account3_after = repo::accounts::get(&pool, account3.id).await.unwrap();
    let account4_after = repo::accounts::get(&pool, account4.id).await.unwrap();
    assert_eq!(account1_after.balance, account1.balance - 25);
    assert_eq!(account2_after.balance, account2.balance + 25);
    assert_eq!(account3_after.balance, account3.balance - 40);
    assert_eq!(account4_after.balance, account4.balance + 40);
}
