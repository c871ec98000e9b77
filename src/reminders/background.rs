//! Background reminder thread: periodic due-dose check.
//!
//! Spawns a thread that checks the shared store every `check_interval`
//! and hands due reminders to the notifier. The first check runs right
//! away. The interval stays well under a minute so no scheduled minute is
//! skipped; the per-minute dedup in `ReminderScheduler` absorbs the
//! repeated checks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::notifier::{Clock, Notifier};
use super::scheduler::ReminderScheduler;
use crate::store::SharedStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderConfig {
    pub check_interval: Duration,
    /// Sleep step between shutdown checks.
    pub sleep_granularity: Duration,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            check_interval: Duration::from_secs(15),
            sleep_granularity: Duration::from_millis(250),
        }
    }
}

impl ReminderConfig {
    fn sleep_steps(&self) -> u64 {
        let granularity = self.sleep_granularity.as_millis().max(1);
        (self.check_interval.as_millis() / granularity).max(1) as u64
    }
}

/// Handle for the reminder thread.
///
/// Supports graceful shutdown via `shutdown()` or automatic cleanup on `Drop`.
pub struct ReminderSchedulerHandle {
    shutdown: Arc<AtomicBool>,
    scheduler: Arc<Mutex<ReminderScheduler>>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl ReminderSchedulerHandle {
    pub fn arm(&self) {
        match self.scheduler.lock() {
            Ok(mut s) => s.arm(),
            Err(e) => tracing::warn!(error = %e, "Reminder scheduler lock poisoned, cannot arm"),
        }
    }

    pub fn disarm(&self) {
        match self.scheduler.lock() {
            Ok(mut s) => s.disarm(),
            Err(e) => tracing::warn!(error = %e, "Reminder scheduler lock poisoned, cannot disarm"),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.scheduler.lock().map(|s| s.is_armed()).unwrap_or(false)
    }

    /// Request shutdown. A check in progress completes; no new check starts.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

impl Drop for ReminderSchedulerHandle {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

struct TickContext {
    store: SharedStore,
    scheduler: Arc<Mutex<ReminderScheduler>>,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn Clock>,
}

/// Start the reminder thread. The scheduler starts idle; call `arm()` on
/// the returned handle to begin delivering reminders.
pub fn start_reminder_scheduler(
    store: SharedStore,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn Clock>,
    config: ReminderConfig,
) -> ReminderSchedulerHandle {
    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = shutdown.clone();
    let scheduler = Arc::new(Mutex::new(ReminderScheduler::new()));

    let ctx = TickContext {
        store,
        scheduler: scheduler.clone(),
        notifier,
        clock,
    };

    let handle = std::thread::spawn(move || {
        tracing::info!(
            "Reminder scheduler started (check every {}ms)",
            config.check_interval.as_millis()
        );
        scheduler_loop(&ctx, &config, &flag);
    });

    ReminderSchedulerHandle {
        shutdown,
        scheduler,
        handle: Some(handle),
    }
}

fn scheduler_loop(ctx: &TickContext, config: &ReminderConfig, shutdown: &AtomicBool) {
    while !shutdown.load(Ordering::Relaxed) {
        run_tick(ctx);

        for _ in 0..config.sleep_steps() {
            if shutdown.load(Ordering::Relaxed) {
                tracing::info!("Reminder scheduler shutting down");
                return;
            }
            std::thread::sleep(config.sleep_granularity);
        }
    }
    tracing::info!("Reminder scheduler shutting down");
}

/// One check. Returns how many notifications were delivered.
fn run_tick(ctx: &TickContext) -> usize {
    let now = ctx.clock.now();

    // Hold the store only long enough to copy the medication list.
    let medications = match ctx.store.lock() {
        Ok(store) => store.medications().to_vec(),
        Err(e) => {
            tracing::warn!(error = %e, "Store lock poisoned, skipping reminder check");
            return 0;
        }
    };

    let due = match ctx.scheduler.lock() {
        Ok(mut scheduler) => scheduler.due_reminders(now, &medications),
        Err(e) => {
            tracing::warn!(error = %e, "Reminder scheduler lock poisoned, skipping check");
            return 0;
        }
    };

    for notification in &due {
        ctx.notifier.notify(notification);
    }
    if !due.is_empty() {
        tracing::debug!(count = due.len(), at = %now, "Reminders delivered");
    }
    due.len()
}
