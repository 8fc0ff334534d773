// Application context shared across all modules

use std::sync::Arc;
use tracing::info;

use super::config::ClientConfig;
use super::error::ApiError;
use crate::auth::{AuthContext, AuthState};
use crate::candidates::{ApplicationFlow, SavedOffersFlow};
use crate::client::ApiClient;
use crate::notifications::{NotificationBackend, NotificationContext};
use crate::storage::SessionStore;
use crate::verification::EmailVerificationGuard;

/// Everything a front-end needs, built once at startup and disposed at exit
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: ClientConfig,
    pub store: SessionStore,
    pub client: ApiClient,
    pub notifications: NotificationContext,
    pub auth: AuthContext,
    pub guard: EmailVerificationGuard,
}

impl AppContext {
    /// Open the session store, wire the contexts together and restore the
    /// previous session
    pub async fn init(
        config: ClientConfig,
        backend: Arc<dyn NotificationBackend>,
    ) -> Result<Self, ApiError> {
        let store = if config.store_url.contains(":memory:") {
            SessionStore::in_memory().await?
        } else {
            SessionStore::open(&config.store_url).await?
        };

        let client = ApiClient::new(&config, store.clone())?;
        let notifications = NotificationContext::new(backend);
        notifications.init().await;

        let auth = AuthContext::new(client.clone(), notifications.clone());
        let guard = EmailVerificationGuard::new(client.clone());

        let state: AuthState = auth.init().await;
        info!(
            api_url = %config.api_url,
            authenticated = state.is_authenticated,
            "Application context ready"
        );

        Ok(Self {
            config,
            store,
            client,
            notifications,
            auth,
            guard,
        })
    }

    pub fn applications(&self) -> ApplicationFlow {
        ApplicationFlow::new(
            self.client.clone(),
            self.guard.clone(),
            self.notifications.clone(),
            self.config.reminder_delay(),
        )
    }

    pub fn saved_offers(&self) -> SavedOffersFlow {
        SavedOffersFlow::new(
            self.client.clone(),
            self.guard.clone(),
            self.notifications.clone(),
            self.config.reminder_delay(),
        )
    }

    /// Cancel pending reminders and close the store
    pub async fn dispose(self) {
        let cancelled = self.notifications.cancel_all().await;
        self.store.close().await;
        info!(cancelled, "Application context disposed");
    }
}
