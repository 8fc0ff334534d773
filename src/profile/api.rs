//! Profile and password calls

use reqwest::multipart::Form;
use serde_json::Value;
use tracing::info;

use super::models::{PasswordSettings, PasswordUpdate, ProfileUpdate, ProfileUpdateResponse};
use super::routes;
use crate::auth::models::{User, UserPayload};
use crate::client::{ApiClient, FileUpload};
use crate::common::{ApiError, MessageResponse};

impl ApiClient {
    /// GET /profile
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let payload: UserPayload = self.get(routes::PROFILE).await?;
        Ok(payload.into_user())
    }

    /// POST /profile
    ///
    /// Sent as multipart when an image or CV is attached, as JSON otherwise.
    /// The stored user snapshot is replaced with the server's answer.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let fields = update.fields();

        let response: ProfileUpdateResponse = if update.has_files() {
            let mut form = Form::new();
            for (key, value) in &fields {
                if let Value::String(text) = value {
                    form = form.text(key.clone(), text.clone());
                }
            }

            let mut summary = fields.clone();
            let uploads = [("image", &update.image), ("cv", &update.cv)];
            for (field, path) in uploads {
                if let Some(path) = path {
                    let (name, part) = FileUpload::new(field, path).into_part().await?;
                    form = form.part(name, part);
                    summary.insert(field.to_string(), Value::String(path.display().to_string()));
                }
            }

            self.post_multipart(routes::PROFILE, form, &Value::Object(summary))
                .await?
        } else {
            self.post(routes::PROFILE, &fields).await?
        };

        let user = response.into_user();
        self.store().set_user_snapshot(&user).await?;
        info!(user_id = user.id, "Profile updated");
        Ok(user)
    }

    /// DELETE /profile
    ///
    /// Clears the local session once the server confirms.
    pub async fn delete_account(&self) -> Result<MessageResponse, ApiError> {
        let response: MessageResponse = self.delete(routes::PROFILE).await?;
        self.store().clear_session().await?;
        info!("Account deleted");
        Ok(response)
    }

    /// GET /password
    pub async fn password_settings(&self) -> Result<PasswordSettings, ApiError> {
        self.get(routes::PASSWORD).await
    }

    /// POST /password
    pub async fn update_password(&self, update: &PasswordUpdate) -> Result<MessageResponse, ApiError> {
        let response: MessageResponse = self.post(routes::PASSWORD, update).await?;
        info!("Password updated");
        Ok(response)
    }
}
