// Client configuration loaded from the environment

use std::env;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_STORE_URL: &str = "sqlite://empleaworks_session.db";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_REMINDER_DAYS: u64 = 3;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub store_url: String,
    pub timeout_secs: u64,
    pub reminder_days: u64,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_url = env::var("EMPLEAWORKS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let store_url =
            env::var("EMPLEAWORKS_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());
        let timeout_secs = parse_u64("EMPLEAWORKS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        let reminder_days = parse_u64("EMPLEAWORKS_REMINDER_DAYS", DEFAULT_REMINDER_DAYS);

        info!(api_url = %api_url, timeout_secs, "Loaded client configuration");

        Self {
            api_url,
            store_url,
            timeout_secs,
            reminder_days,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_store_url(mut self, store_url: impl Into<String>) -> Self {
        self.store_url = store_url.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn reminder_delay(&self) -> Duration {
        Duration::from_secs(self.reminder_days * 24 * 60 * 60)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            store_url: DEFAULT_STORE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            reminder_days: DEFAULT_REMINDER_DAYS,
        }
    }
}

fn parse_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key = %key, value = %raw, "Invalid number in environment, using default");
            default
        }),
        Err(_) => default,
    }
}
