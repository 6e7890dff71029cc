//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs the database work, delegating transactional operations to
//!    the service layer
//! 3. Returns an HTTP response (JSON, status code)

/// Account management endpoints
pub mod accounts;
/// Bookkeeping entry endpoints (read-only)
pub mod entries;
/// Service health endpoint
pub mod health;
/// Transfer endpoints
pub mod transfers;

use crate::models::MAX_PAGE_SIZE;

/// Clamp client-supplied pagination to sane bounds.
pub(crate) fn clamp_page(limit: i64, offset: i64) -> (i64, i64) {
    (limit.clamp(0, MAX_PAGE_SIZE), offset.max(0))
}
