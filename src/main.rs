use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::AppConfig;
use mergington::database::ActivityStore;
use mergington::error::StartupError;
use mergington::{server, web};

#[tokio::main]
async fn main() {
    // .env is optional
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mergington=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("mergington stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    // 2. Config and activity catalog
    let config = AppConfig::from_env()?;

    let store = match &config.seed_file {
        Some(path) => {
            info!(path = %path.display(), "loading activities from seed file");
            ActivityStore::load_seed_file(path)?
        }
        None => ActivityStore::seeded(),
    };

    // 3. Router
    let app = web::router(store, &config.static_dir);

    // 4. Bind (with fallback port)
    let listener = server::bind_listener(&config).await?;

    match listener.local_addr() {
        Ok(bound) => info!("Mergington activities running on http://{}", bound),
        Err(_) => info!("Mergington activities running"),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
