//! # Users and sign-in
//!
//! ## [`User`]
//!
//! One entry of `GET /users`, used to fill the recipient select of the offer
//! form. The backend sends ids as numbers on some endpoints and strings on
//! others; both are normalised to `String`.
//!
//! ## [`LoginRequest`] / [`LoginResponse`]
//!
//! Body and reply of `POST /login`. The reply carries the bearer credential
//! (`token`, also accepted as `access_token`) and the [`store::Identity`] that
//! the session store persists.

use serde::{Deserialize, Serialize};
use store::models::string_or_number;
use store::Identity;

/// A user that can receive offers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Credentials posted to `/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `/login` reply.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_ids_are_normalised() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id": 42, "name": "Jason Momoa", "email": "jason@example.com"},
                {"id": "u-7", "name": "", "email": "anon@example.com"}]"#,
        )
        .unwrap();
        assert_eq!(users[0].id, "42");
        assert_eq!(users[0].display_name(), "Jason Momoa");
        assert_eq!(users[1].id, "u-7");
        assert_eq!(users[1].display_name(), "anon@example.com");
    }

    #[test]
    fn test_login_response_aliases() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token": "abc", "user": {"id": 1, "name": "Jane", "email": "jane@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.user.id, "1");
    }
}
