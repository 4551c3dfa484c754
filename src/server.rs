use tokio::net::TcpListener;
use tracing::warn;

use crate::config::AppConfig;
use crate::error::StartupError;

/// Binds the configured address, retrying once on the next port up.
pub async fn bind_listener(config: &AppConfig) -> Result<TcpListener, StartupError> {
    let addr = config.socket_addr()?;
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(fallback)
                .await
                .map_err(|source| StartupError::Bind { addr: fallback, source })
        }
    }
}
