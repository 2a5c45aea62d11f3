use std::time::Duration;

use anyhow::Context;

use crate::config::DbConfig;
use crate::store::MySqlStore;

pub const MAX_ATTEMPTS: u32 = 30;
const BACKOFF_CAP_SECS: u64 = 10;

/// Waits for the database to come up, retrying the open/ping cycle with a
/// capped linear backoff. Exhausting `MAX_ATTEMPTS` is a hard failure.
pub async fn connect(config: &DbConfig) -> anyhow::Result<MySqlStore> {
    let url = config.connection_url();
    let mut attempt = 1;

    loop {
        match try_connect(&url).await {
            Ok(store) => {
                tracing::info!(database = %config.name, "connected to database");
                return Ok(store);
            }
            Err(e) => {
                tracing::warn!(
                    attempt,
                    max_attempts = MAX_ATTEMPTS,
                    error = %e,
                    "error pinging database",
                );
                if attempt >= MAX_ATTEMPTS {
                    return Err(e).with_context(|| {
                        format!("could not connect to db after {MAX_ATTEMPTS} attempts")
                    });
                }
                tokio::time::sleep(backoff(attempt)).await;
                attempt += 1;
            }
        }
    }
}

async fn try_connect(url: &str) -> Result<MySqlStore, sqlx::Error> {
    let store = MySqlStore::connect_lazy(url)?;
    if let Err(e) = store.ping().await {
        store.close().await;
        return Err(e);
    }
    Ok(store)
}

fn backoff(attempt: u32) -> Duration {
    Duration::from_secs(u64::from(attempt).min(BACKOFF_CAP_SECS))
}
