//! Integration tests for the institute API.
//!
//! These tests drive the full router and verify:
//! - Router wiring (health, unknown routes, method matching, CORS)
//! - Application submission upload filtering (non-PDF rejected before any
//!   file write or insert)
//! - Write-before-insert ordering for accepted PDFs
//! - Static serving of stored uploads
//! - The uniform JSON error shape, including the generic 500 contract
//!
//! Endpoints that resolve before their database call run against a lazy pool
//! that never connects, so no live PostgreSQL is required.

mod integration {
    pub mod test_utils;

    pub mod api_tests;
    pub mod upload_tests;
}
