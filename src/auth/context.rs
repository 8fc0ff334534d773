// src/auth/context.rs
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::models::{AuthResponse, AuthState, LoginRequest, RegisterRequest, User};
use super::validators::{LoginValidator, RegisterValidator};
use crate::client::ApiClient;
use crate::common::{safe_email_log, ApiError, ErrorKind, MessageResponse, Validator};
use crate::notifications::reminders::verification_email_reminder;
use crate::notifications::NotificationContext;
use crate::profile::models::ProfileUpdate;
use crate::profile::validators::ProfileValidator;

/// Process-wide authentication state.
///
/// Every operation publishes the resulting `AuthState` on a watch channel;
/// `subscribe` hands out receivers that see each change.
#[derive(Debug, Clone)]
pub struct AuthContext {
    client: ApiClient,
    notifications: NotificationContext,
    state: Arc<watch::Sender<AuthState>>,
}

impl AuthContext {
    pub fn new(client: ApiClient, notifications: NotificationContext) -> Self {
        let (sender, _) = watch::channel(AuthState::loading());
        Self {
            client,
            notifications,
            state: Arc::new(sender),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Restore the session left by a previous run.
    ///
    /// - No stored token: signed out
    /// - `GET /user` succeeds: signed in, snapshot refreshed
    /// - Auth error: the stale session is cleared
    /// - Network error: the cached user snapshot, if any
    pub async fn init(&self) -> AuthState {
        self.state.send_replace(AuthState::loading());

        let token = match self.client.store().token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Could not read stored session");
                return self.publish(AuthState::signed_out(Some(e.to_string())));
            }
        };

        if token.is_none() {
            debug!("No stored session");
            return self.publish(AuthState::signed_out(None));
        }

        match self.client.current_user().await {
            Ok(user) => {
                info!(user = %safe_email_log(&user.email), "Session restored");
                self.publish(AuthState::signed_in(user))
            }
            Err(e) => match e.kind() {
                ErrorKind::Auth { message } => {
                    info!("Stored session rejected, signing out");
                    if let Err(e) = self.client.store().clear_session().await {
                        warn!(error = %e, "Could not clear rejected session");
                    }
                    self.publish(AuthState::signed_out(Some(message)))
                }
                ErrorKind::Network { message } => {
                    match self.client.store().user_snapshot().await.ok().flatten() {
                        Some(user) => {
                            warn!(error = %message, "Backend unreachable, using cached user");
                            self.publish(AuthState::signed_in(user))
                        }
                        None => self.publish(AuthState::signed_out(Some(message))),
                    }
                }
                other => {
                    warn!(error = %other, "Could not restore session");
                    self.publish(AuthState::signed_out(Some(other.message().to_string())))
                }
            },
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        LoginValidator.validate(request).into_result()?;
        self.set_loading();
        let result = self.client.login(request).await;
        self.finish_sign_in(result)
    }

    /// Register, then remind the user to check their verification email
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        RegisterValidator.validate(request).into_result()?;
        self.set_loading();
        let user = self.finish_sign_in(self.client.register(request).await)?;

        let reminder = verification_email_reminder(&user.email);
        if let Err(e) = self.notifications.send_notification(reminder).await {
            warn!(error = %e, "Could not send verification reminder");
        }

        Ok(user)
    }

    pub async fn google_login(&self, id_token: &str) -> Result<User, ApiError> {
        self.set_loading();
        let result = self.client.google_callback(id_token).await;
        self.finish_sign_in(result)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.client.logout().await;
        self.publish(AuthState::signed_out(None));
        result
    }

    pub async fn delete_account(&self) -> Result<MessageResponse, ApiError> {
        let response = self.track(self.client.delete_account().await)?;
        self.publish(AuthState::signed_out(None));
        Ok(response)
    }

    pub async fn refresh_user(&self) -> Result<User, ApiError> {
        let user = self.track(self.client.current_user().await)?;
        self.publish(AuthState::signed_in(user.clone()));
        Ok(user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        ProfileValidator.validate(update).into_result()?;
        let user = self.track(self.client.update_profile(update).await)?;
        self.publish(AuthState::signed_in(user.clone()));
        Ok(user)
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|state| state.error = None);
    }

    fn set_loading(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
    }

    fn finish_sign_in(&self, result: Result<AuthResponse, ApiError>) -> Result<User, ApiError> {
        match result {
            Ok(auth) => {
                self.publish(AuthState::signed_in(auth.user.clone()));
                Ok(auth.user)
            }
            Err(e) => {
                self.publish(AuthState::signed_out(Some(e.message())));
                Err(e)
            }
        }
    }

    /// Record a failure on the current state without signing out
    fn track<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(e) = &result {
            let message = e.message();
            self.state.send_modify(|state| {
                state.is_loading = false;
                state.error = Some(message);
            });
        }
        result
    }

    fn publish(&self, state: AuthState) -> AuthState {
        self.state.send_replace(state.clone());
        state
    }
}
