//! User entity model and DTOs.

use promptpack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A user row from the `users` table.
///
/// `password_hash` never leaves the server; serialize through [`PublicUser`]
/// for anything that reaches a client.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub username: Option<String>,
    pub created_at: Timestamp,
}

/// Client-safe projection of a [`User`].
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: DbId,
    pub email: String,
    pub username: Option<String>,
    pub created_at: Timestamp,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            created_at: u.created_at,
        }
    }
}

/// DTO for creating a new user. The password is already hashed by the caller.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub username: String,
}

/// DTO for updating the caller's profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = 3, message = "Username must be at least 3 characters."))]
    pub username: String,
}
