//! Contact message model
//!
//! Write-once records from the public contact form. No read path exists.

use serde::{Deserialize, Serialize};

/// Body of `POST /contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}
