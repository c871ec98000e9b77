pub mod analytics;
pub mod appointment;
pub mod config;
pub mod db;
pub mod emergency;
pub mod home;
pub mod journal;
pub mod medications;
pub mod models;
pub mod reminders;
pub mod report;
pub mod seizures;
pub mod store;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use reminders::{start_reminder_scheduler, ReminderConfig, SystemClock, TracingNotifier};
use store::{RecordStore, StoreError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    if let Err(e) = run_daemon() {
        tracing::error!(error = %e, "{} stopped", config::APP_NAME);
        std::process::exit(1);
    }
}

/// Opens the store, arms medication reminders and waits for Ctrl+C.
fn run_daemon() -> Result<(), AppError> {
    let db_path = config::database_path();
    let mut store = RecordStore::open_path(&db_path)?;
    for warning in store.take_warnings() {
        tracing::warn!(key = warning.key, error = %warning.message, "Storage problem at startup");
    }

    let today = chrono::Local::now().date_naive();
    let dashboard = home::dashboard_summary(&store.snapshot(), today);
    tracing::info!(
        path = %db_path.display(),
        seizures_last_30_days = dashboard.seizures_last_30_days,
        trend = dashboard.trend.delta,
        upcoming_appointments = dashboard.upcoming_appointments.len(),
        low_stock = dashboard.low_stock.len(),
        "Record store ready"
    );

    let shared = store.into_shared();
    let reminders = start_reminder_scheduler(
        shared,
        Box::new(TracingNotifier),
        Box::new(SystemClock),
        ReminderConfig::default(),
    );
    reminders.arm();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(tokio::signal::ctrl_c())?;

    tracing::info!("Shutdown requested");
    reminders.disarm();
    drop(reminders);
    Ok(())
}
