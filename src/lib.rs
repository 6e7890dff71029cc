//! Ledger service library.
//!
//! The transactional core of a double-entry ledger: accounts, append-only
//! bookkeeping entries, and the atomic transfer executor that moves money
//! between two accounts without ever exposing a partial state.
//!
//! # Architecture
//!
//! - **repo**: row-level access to the three tables; every function takes
//!   the database handle explicitly so it can run against the pool or
//!   against an open transaction
//! - **services**: the transfer executor, owner of the transactional scope
//!   and the deadlock-avoiding lock order
//! - **handlers**: the Axum HTTP surface
//! - **models**: entities and API request types
//!
//! The binary in `main.rs` wires these together; integration tests drive
//! the repositories and the executor directly through this library.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod services;
