//! Course model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
}

/// Body of `POST /api/courses`.
///
/// Every field is optional; missing values are inserted as NULL. Emptiness
/// and duplication are not checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub department: Option<String>,
}
