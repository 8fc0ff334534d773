//! Session storage schema

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

/// Create the key-value table backing the session store.
///
/// Set `EMPLEAWORKS_RESET_STORE=true` to wipe any stored session first.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset = env::var("EMPLEAWORKS_RESET_STORE").unwrap_or_else(|_| "false".to_string())
        == "true";

    if should_reset {
        warn!("EMPLEAWORKS_RESET_STORE=true - dropping stored session");
        sqlx::query("DROP TABLE IF EXISTS session_storage")
            .execute(pool)
            .await?;
    }

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS session_storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Session storage ready");
    Ok(())
}
