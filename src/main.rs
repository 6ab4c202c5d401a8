use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use drugcheck_core::{
    CoreConfig, DEFAULT_BIND_ADDR, DEFAULT_OPENFDA_BASE_URL, OpenFdaLookupService,
    config::{timeout_from_env_value, workers_from_env_value},
};

/// Main entry point for the drugcheck web application
///
/// Serves the condition form, the lookup result page and the JSON API on one address.
/// All configuration is read here, once, before the runtime starts.
///
/// # Environment Variables
/// - `DRUGCHECK_ADDR`: bind address (default: "0.0.0.0:8000")
/// - `DRUGCHECK_WORKERS`: tokio worker threads (default: 4)
/// - `OPENFDA_BASE_URL`: openFDA base URL (default: "https://api.fda.gov")
/// - `OPENFDA_TIMEOUT_SECS`: per-request openFDA timeout (default: 30)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - any configuration value is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drugcheck_run=info".parse()?)
                .add_directive("drugcheck_core=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("DRUGCHECK_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
    let workers = workers_from_env_value(std::env::var("DRUGCHECK_WORKERS").ok())?;
    let base_url =
        std::env::var("OPENFDA_BASE_URL").unwrap_or_else(|_| DEFAULT_OPENFDA_BASE_URL.into());
    let timeout = timeout_from_env_value(std::env::var("OPENFDA_TIMEOUT_SECS").ok())?;

    let cfg = CoreConfig::new(base_url, timeout)?;

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers)
        .enable_all()
        .build()?
        .block_on(serve(addr, workers, cfg))
}

async fn serve(addr: String, workers: usize, cfg: CoreConfig) -> anyhow::Result<()> {
    tracing::info!("++ Starting drugcheck on {} ({} workers)", addr, workers);
    tracing::info!("++ Using openFDA at {}", cfg.openfda_base_url());

    let lookup = OpenFdaLookupService::from_config(&cfg)?;
    let app = api_rest::router(lookup);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- drugcheck stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("-- Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("-- Received SIGTERM, shutting down"),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::signal::unix::{SignalKind, signal};

    #[tokio::test]
    async fn sigterm_triggers_shutdown() {
        // Keep a handler of our own so SIGTERM never falls through to the default action.
        let _guard = signal(SignalKind::terminate()).expect("register SIGTERM handler");
        let mut shutdown = tokio::spawn(shutdown_signal());

        let pid = std::process::id().to_string();
        let stopped = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                std::process::Command::new("kill")
                    .args(["-TERM", &pid])
                    .status()
                    .expect("send SIGTERM");
                tokio::select! {
                    res = &mut shutdown => break res,
                    _ = tokio::time::sleep(Duration::from_millis(50)) => {}
                }
            }
        })
        .await;

        assert!(matches!(stopped, Ok(Ok(()))));
    }
}
