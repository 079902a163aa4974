//! Focus Spotlight service binary.
//! Loads the catalog, ranks it once, and serves the spotlight over Axum.

use shuttle_axum::ShuttleAxum;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use focus_spotlight::api::{create_router, AppState};
use focus_spotlight::config::SpotlightConfig;
use focus_spotlight::metrics::Metrics;

const DEV_LOG_FILTER: &str = "spotlight=debug,focus_spotlight=info,warn";

/// `SPOTLIGHT_DEV_LOG=1` only counts outside deployed environments.
fn dev_log_requested() -> bool {
    if std::env::var("SPOTLIGHT_DEV_LOG").as_deref() != Ok("1") {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    std::env::var("SHUTTLE_ENV")
        .map(|env| {
            let env = env.to_ascii_lowercase();
            env == "local" || env.starts_with("dev")
        })
        .unwrap_or(false)
}

/// Compact ranking/navigation logs for local runs. `RUST_LOG` overrides the
/// default filter.
fn init_spotlight_logging() {
    if !dev_log_requested() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEV_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true))
        .init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_spotlight_logging();

    let cfg = SpotlightConfig::from_env()?;
    let entries = cfg.catalog.len();
    let state = AppState::new(cfg).map_err(anyhow::Error::from)?;

    let mut router = create_router(state);
    match Metrics::init(entries) {
        Ok(m) => router = router.merge(m.router()),
        Err(e) => warn!("metrics disabled: {e:#}"),
    }

    Ok(router.into())
}
