//! ClinicaVida core — local doctor registry, labor-rule tables, and
//! roster helpers for the clinic scheduling desktop app.
//!
//! Everything lives on the user's machine: records persist in a single
//! SQLite file under the app data directory, and no network access is
//! ever required.

pub mod config;
pub mod db;
pub mod hours;
pub mod models;
pub mod requirements;
pub mod shifts;
pub mod state;
pub mod validation;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process. Call once at startup, before
/// opening the state; honors `RUST_LOG` when set.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("ClinicaVida core starting v{}", config::APP_VERSION);
}
