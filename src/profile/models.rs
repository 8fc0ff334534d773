// src/profile/models.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::auth::models::User;

// ============================================================================
// Profile Models
// ============================================================================

/// Candidate-specific fields nested under `user.candidate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "profileImage",
        alias = "image",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<String>,
}

/// `POST /profile` input. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub image: Option<PathBuf>,
    pub cv: Option<PathBuf>,
}

impl ProfileUpdate {
    pub fn has_files(&self) -> bool {
        self.image.is_some() || self.cv.is_some()
    }

    /// The text fields as a JSON object
    pub fn fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        let text = [
            ("name", &self.name),
            ("surname", &self.surname),
            ("email", &self.email),
            ("description", &self.description),
        ];
        for (key, value) in text {
            if let Some(value) = value {
                fields.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        fields
    }
}

/// `POST /profile` answer: `{ message?, user }` or the bare user
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProfileUpdateResponse {
    Wrapped {
        #[serde(default)]
        message: Option<String>,
        user: User,
    },
    Bare(User),
}

impl ProfileUpdateResponse {
    pub fn into_user(self) -> User {
        match self {
            ProfileUpdateResponse::Wrapped { user, .. } | ProfileUpdateResponse::Bare(user) => user,
        }
    }
}

// ============================================================================
// Password Models
// ============================================================================

/// `GET /password`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PasswordSettings {
    /// False for accounts created through Google sign-in
    #[serde(default = "default_true", alias = "hasPassword")]
    pub has_password: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_true() -> bool {
    true
}

/// `POST /password`
#[derive(Debug, Clone, Serialize)]
pub struct PasswordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    pub password: String,
    pub password_confirmation: String,
}
