use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "SeizureTrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that relocates the data directory (tests, portable installs).
pub const DATA_DIR_ENV: &str = "SEIZURETRACK_DATA_DIR";

/// Medications at or below this many pills are flagged for refill.
pub const LOW_STOCK_THRESHOLD: u32 = 7;

/// Number of ranked triggers carried into reports.
pub const REPORT_TOP_TRIGGERS: usize = 5;

/// Number of recent seizures listed in the exported report.
pub const REPORT_RECENT_SEIZURES: usize = 10;

/// Get the application data directory
/// ~/SeizureTrack/ on all platforms unless `SEIZURETRACK_DATA_DIR` is set.
pub fn app_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the SQLite file backing the record store
pub fn database_path() -> PathBuf {
    app_data_dir().join("seizuretrack.db")
}

/// Get the directory where exported reports are written
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "seizuretrack=info,seizuretrack_lib=info"
}
