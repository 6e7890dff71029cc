//! Business logic services.
//!
//! Services contain the multi-row operations that need a database
//! transaction of their own, separated from HTTP handlers. Handlers validate
//! ownership of the request and delegate here.

pub mod transfer_service;
