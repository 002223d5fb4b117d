//! User model
//!
//! Users are provisioned directly in the database; this system only reads
//! them for login. The full row (including the password hash) is never
//! serialized - login responds with the [`PublicUser`] projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public fields of a user, returned on successful login.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: 7,
            email: "student@example.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            role: Some("student".to_string()),
        }
    }

    #[test]
    fn test_public_user_excludes_password_hash() {
        let public = PublicUser::from(test_user());
        let json = serde_json::to_string(&public).unwrap();
        assert!(json.contains("student@example.com"));
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$"));
    }

    #[test]
    fn test_public_user_carries_all_public_fields() {
        let public = PublicUser::from(test_user());
        assert_eq!(public.id, 7);
        assert_eq!(public.first_name.as_deref(), Some("Ada"));
        assert_eq!(public.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(public.role.as_deref(), Some("student"));
    }
}
