use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "ClinicaVida";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registry database file name inside the app data directory
pub const DB_FILE_NAME: &str = "clinicavida.db";

/// Get the application data directory
/// ~/ClinicaVida/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("ClinicaVida")
}

/// Get the doctor registry database path
pub fn database_path() -> PathBuf {
    app_data_dir().join(DB_FILE_NAME)
}

/// Tracing filter applied when RUST_LOG is not set
pub fn default_log_filter() -> &'static str {
    "info,clinica_vida=debug"
}
