//! Row-level data access for the three ledger tables.
//!
//! Every function in these modules takes its database handle as
//! `impl PgExecutor<'_>`, so the same query runs against the shared pool
//! (plain CRUD from a handler) or against an open transaction (inside the
//! transfer executor). The transactional scope is owned by the caller and
//! threaded in explicitly; repositories never begin, commit, or roll back
//! anything themselves.

/// Account rows and the atomic balance mutation
pub mod accounts;
/// Append-only bookkeeping entries
pub mod entries;
/// Append-only transfer records
pub mod transfers;
