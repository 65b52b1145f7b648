// Refresh scheduler - page load, periodic timer and manual triggers
use crate::application::dashboard_controller::DashboardController;
use crate::application::views::RefreshIndicator;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, Instant, MissedTickBehavior};

#[derive(Debug, Clone, Copy)]
pub struct RefreshSettings {
    pub interval: Duration,
    /// Minimum time the busy indicator stays on after a manual trigger.
    pub min_busy: Duration,
}

/// Sent by the manual refresh control.
#[derive(Debug, Clone, Copy)]
pub struct ManualRefresh;

/// Run until the task is dropped. Every refresh gets its own task, so
/// triggers can overlap and results land in completion order.
pub async fn run_scheduler(
    controller: Arc<DashboardController>,
    indicator: Arc<dyn RefreshIndicator>,
    settings: RefreshSettings,
    mut manual_rx: mpsc::Receiver<ManualRefresh>,
) {
    tracing::info!(
        interval_secs = settings.interval.as_secs(),
        "Starting refresh scheduler"
    );

    let mut ticker = interval(settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut manual_open = true;

    loop {
        tokio::select! {
            // The first tick completes immediately and doubles as the initial load
            _ = ticker.tick() => {
                tracing::debug!("Periodic refresh");
                spawn_refresh(controller.clone());
            }
            trigger = manual_rx.recv(), if manual_open => match trigger {
                Some(ManualRefresh) => {
                    tracing::debug!("Manual refresh");
                    spawn_manual_refresh(controller.clone(), indicator.clone(), settings.min_busy);
                }
                None => {
                    tracing::debug!("Manual trigger channel closed, timer only from now on");
                    manual_open = false;
                }
            },
        }
    }
}

fn spawn_refresh(controller: Arc<DashboardController>) {
    tokio::spawn(async move {
        controller.refresh().await;
    });
}

fn spawn_manual_refresh(
    controller: Arc<DashboardController>,
    indicator: Arc<dyn RefreshIndicator>,
    min_busy: Duration,
) {
    tokio::spawn(async move {
        let started = Instant::now();
        indicator.set_busy(true);

        controller.refresh().await;

        let elapsed = started.elapsed();
        if elapsed < min_busy {
            tokio::time::sleep(min_busy - elapsed).await;
        }
        indicator.set_busy(false);
    });
}
