//! Authentication data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::models::CandidateProfile;

/// The signed-in account as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(
        default,
        alias = "emailVerifiedAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub email_verified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<CandidateProfile>,
}

impl User {
    pub fn is_email_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }

    pub fn is_candidate(&self) -> bool {
        self.role.as_deref() == Some("candidate") || self.candidate.is_some()
    }

    pub fn is_company(&self) -> bool {
        self.role.as_deref() == Some("company")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Google ID token forwarded to the backend
#[derive(Debug, Clone, Serialize)]
pub struct GoogleIdTokenPayload {
    pub id_token: String,
}

/// `{ token, user }` issued by login, register and the Google callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: User,
}

/// Authentication state observed by the rest of the application
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl AuthState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
            user: Some(user),
            error: None,
        }
    }

    pub fn signed_out(error: Option<String>) -> Self {
        Self {
            error,
            ..Self::default()
        }
    }
}

/// `GET /user` and `GET /profile` answer either with the user itself or
/// with `{ "user": ... }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserPayload {
    Wrapped { user: User },
    Bare(User),
}

impl UserPayload {
    pub fn into_user(self) -> User {
        match self {
            UserPayload::Wrapped { user } | UserPayload::Bare(user) => user,
        }
    }
}
