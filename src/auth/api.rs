//! Authentication calls

use tracing::{info, warn};

use super::models::{
    AuthResponse, GoogleIdTokenPayload, LoginRequest, RegisterRequest, User, UserPayload,
};
use super::routes;
use crate::client::ApiClient;
use crate::common::{safe_email_log, ApiError, MessageResponse};

impl ApiClient {
    /// POST /register
    ///
    /// Persists the issued token and user snapshot on success.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let auth: AuthResponse = self.post(routes::REGISTER, request).await?;
        self.store().save_session(&auth.token, &auth.user).await?;
        info!(user = %safe_email_log(&auth.user.email), "Account registered");
        Ok(auth)
    }

    /// POST /login
    ///
    /// Persists the issued token and user snapshot on success.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let auth: AuthResponse = self.post(routes::LOGIN, request).await?;
        self.store().save_session(&auth.token, &auth.user).await?;
        info!(user = %safe_email_log(&auth.user.email), "Logged in");
        Ok(auth)
    }

    /// POST /auth/google/callback
    ///
    /// # Request Body
    /// ```json
    /// { "id_token": "<google id token>" }
    /// ```
    pub async fn google_callback(&self, id_token: &str) -> Result<AuthResponse, ApiError> {
        let payload = GoogleIdTokenPayload {
            id_token: id_token.to_string(),
        };
        let auth: AuthResponse = self.post(routes::GOOGLE_CALLBACK, &payload).await?;
        self.store().save_session(&auth.token, &auth.user).await?;
        info!(user = %safe_email_log(&auth.user.email), "Logged in with Google");
        Ok(auth)
    }

    /// POST /logout
    ///
    /// The local session is cleared even when the server call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        if self.store().token().await?.is_some() {
            if let Err(e) = self.post_empty::<MessageResponse>(routes::LOGOUT).await {
                warn!(error = %e, "Server logout failed, clearing local session anyway");
            }
        }
        self.store().clear_session().await?;
        info!("Logged out");
        Ok(())
    }

    /// GET /user
    ///
    /// Refreshes the stored user snapshot.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let user = self
            .get::<UserPayload>(routes::CURRENT_USER)
            .await?
            .into_user();
        self.store().set_user_snapshot(&user).await?;
        Ok(user)
    }
}
