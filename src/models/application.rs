//! Admissions application model
//!
//! An application is a submitted admission request, created once per
//! submission. Its `status` column is mutated independently of creation and
//! accepts any string; there is no enumerated state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i32,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub education: Option<String>,
    /// Relative `/uploads/...` path of the qualification PDF, if one was
    /// submitted. The file is written before the row is inserted.
    pub qualification_file: Option<String>,
    pub school: Option<String>,
    pub program: Option<String>,
    pub intake: Option<String>,
    pub mode: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: Option<String>,
}

/// Fields collected from the multipart submission form.
///
/// Text fields arrive under the camelCase names of the public form contract
/// (`fullName`, `intake`, ...) and are inserted as supplied; missing fields
/// become NULL.
#[derive(Debug, Clone, Default)]
pub struct NewApplication {
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub education: Option<String>,
    pub qualification_file: Option<String>,
    pub school: Option<String>,
    pub program: Option<String>,
    pub intake: Option<String>,
    pub mode: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
}

/// Body of `PUT /api/applications/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}
