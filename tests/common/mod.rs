//! Shared helpers for the integration tests: random ledger data and
//! account fixtures.

#![allow(dead_code)]

use ledger_service::models::account::{Account, SUPPORTED_CURRENCIES};
use ledger_service::repo;
use rand::Rng;
use sqlx::PgPool;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub fn random_string(n: usize) -> String {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

pub fn random_owner() -> String {
    random_string(6)
}

pub fn random_money() -> i64 {
    rand::rng().random_range(0..=1000)
}

/// Strictly positive amount, suitable for transfers.
pub fn random_amount() -> i64 {
    rand::rng().random_range(1..=1000)
}

pub fn random_currency() -> &'static str {
    SUPPORTED_CURRENCIES[rand::rng().random_range(0..SUPPORTED_CURRENCIES.len())]
}

pub async fn create_test_account(pool: &PgPool) -> Account {
    repo::accounts::create(pool, &random_owner(), random_money(), random_currency())
        .await
        .expect("create test account")
}
