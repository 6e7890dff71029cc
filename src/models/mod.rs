//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request and query-parameter types accepted by the API.

/// Account entity and account API types
pub mod account;
/// Bookkeeping entry entity and entry API types
pub mod entry;
/// Transfer entity, transfer API types, and the composite transfer result
pub mod transfer;

/// Largest page size any list endpoint will serve.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default page size when a list request omits `limit`.
pub(crate) fn default_limit() -> i64 {
    20
}
