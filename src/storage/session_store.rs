// src/storage/session_store.rs
use serde::{de::DeserializeOwned, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::auth::models::User;
use crate::common::migrations::run_migrations;
use crate::common::{safe_email_log, safe_token_log};
use crate::profile::models::CandidateProfile;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const CANDIDATE_KEY: &str = "candidate";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Key-value session storage backed by SQLite.
///
/// Reads go through an in-process cache, including cached misses, so the
/// token lookup done before every request does not touch the database.
#[derive(Debug, Clone)]
pub struct SessionStore {
    db_pool: SqlitePool,
    cache: Arc<RwLock<HashMap<String, Option<String>>>>,
}

impl SessionStore {
    /// Wrap an already migrated pool
    pub fn new(db_pool: SqlitePool) -> Self {
        Self {
            db_pool,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Open (creating if missing) the store at a `sqlite://` URL
    pub async fn open(url: &str) -> Result<Self, StoreError> {
        let connect_options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_options)
            .await?;
        run_migrations(&pool).await?;

        info!(url = %url, "Session store opened");
        Ok(Self::new(pool))
    }

    /// Store that lives only as long as the process
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.get(key) {
                return Ok(cached.clone());
            }
        }

        let value: Option<(String,)> =
            sqlx::query_as("SELECT value FROM session_storage WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.db_pool)
                .await?;
        let value = value.map(|(v,)| v);

        {
            let mut cache = self.cache.write().await;
            cache.insert(key.to_string(), value.clone());
        }

        debug!(key = %key, found = value.is_some(), "Storage read");
        Ok(value)
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO session_storage (key, value, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.db_pool)
        .await?;

        let mut cache = self.cache.write().await;
        cache.insert(key.to_string(), Some(value.to_string()));
        Ok(())
    }

    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM session_storage WHERE key = ?")
            .bind(key)
            .execute(&self.db_pool)
            .await?;

        let mut cache = self.cache.write().await;
        cache.insert(key.to_string(), None);
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                // Unreadable snapshots are dropped, never surfaced
                warn!(key = %key, error = %e, "Discarding unreadable snapshot");
                self.remove(key).await?;
                Ok(None)
            }
        }
    }

    async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        self.set(key, &raw).await
    }

    pub async fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.get(TOKEN_KEY).await?.filter(|t| !t.is_empty()))
    }

    pub async fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.set(TOKEN_KEY, token).await
    }

    pub async fn user_snapshot(&self) -> Result<Option<User>, StoreError> {
        self.get_json(USER_KEY).await
    }

    pub async fn set_user_snapshot(&self, user: &User) -> Result<(), StoreError> {
        self.set_json(USER_KEY, user).await?;
        if let Some(candidate) = &user.candidate {
            self.set_candidate_snapshot(candidate).await?;
        }
        Ok(())
    }

    pub async fn candidate_snapshot(&self) -> Result<Option<CandidateProfile>, StoreError> {
        self.get_json(CANDIDATE_KEY).await
    }

    pub async fn set_candidate_snapshot(
        &self,
        candidate: &CandidateProfile,
    ) -> Result<(), StoreError> {
        self.set_json(CANDIDATE_KEY, candidate).await
    }

    /// Persist a freshly issued session
    pub async fn save_session(&self, token: &str, user: &User) -> Result<(), StoreError> {
        self.set_token(token).await?;
        self.set_user_snapshot(user).await?;
        info!(
            user = %safe_email_log(&user.email),
            token = %safe_token_log(token),
            "Session stored"
        );
        Ok(())
    }

    pub async fn clear_session(&self) -> Result<(), StoreError> {
        for key in [TOKEN_KEY, USER_KEY, CANDIDATE_KEY] {
            self.remove(key).await?;
        }
        info!("Session cleared");
        Ok(())
    }

    pub async fn close(&self) {
        self.db_pool.close().await;
    }
}
