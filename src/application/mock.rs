// Test doubles - in-memory data source and recording views
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::data_source::{DataSource, DataSourceError};
use crate::application::views::{ChartView, ReadingsPanel, RefreshIndicator};
use crate::domain::format::PanelText;
use crate::domain::reading::{HistorySeries, Reading};
use crate::domain::series::RenderedSeries;

/// Canned responses, replayed on every call until replaced.
pub struct MockDataSource {
    latest: Mutex<Result<Reading, String>>,
    history: Mutex<Result<HistorySeries, String>>,
    latency: Mutex<Duration>,
    latest_calls: AtomicU32,
    history_calls: AtomicU32,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self {
            latest: Mutex::new(Ok(Reading::default())),
            history: Mutex::new(Ok(HistorySeries::default())),
            latency: Mutex::new(Duration::ZERO),
            latest_calls: AtomicU32::new(0),
            history_calls: AtomicU32::new(0),
        }
    }

    pub fn set_latest(&self, response: Result<Reading, DataSourceError>) {
        *self.latest.lock().unwrap() = response.map_err(|e| e.to_string());
    }

    pub fn set_history(&self, response: Result<HistorySeries, DataSourceError>) {
        *self.history.lock().unwrap() = response.map_err(|e| e.to_string());
    }

    /// Delay applied to each fetch.
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock().unwrap() = latency;
    }

    pub fn latest_calls(&self) -> u32 {
        self.latest_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> u32 {
        self.history_calls.load(Ordering::SeqCst)
    }

    async fn simulate_latency(&self) {
        let latency = *self.latency.lock().unwrap();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn get_latest(&self) -> Result<Reading, DataSourceError> {
        self.latest_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.latest
            .lock()
            .unwrap()
            .clone()
            .map_err(DataSourceError::Transport)
    }

    async fn get_history(&self) -> Result<HistorySeries, DataSourceError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.history
            .lock()
            .unwrap()
            .clone()
            .map_err(DataSourceError::Transport)
    }
}

#[derive(Default)]
pub struct RecordingChart {
    rendered: Mutex<Vec<RenderedSeries>>,
}

impl RecordingChart {
    pub fn renders(&self) -> usize {
        self.rendered.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<RenderedSeries> {
        self.rendered.lock().unwrap().last().cloned()
    }
}

impl ChartView for RecordingChart {
    fn render(&self, series: RenderedSeries) {
        self.rendered.lock().unwrap().push(series);
    }
}

#[derive(Default)]
pub struct RecordingPanel {
    shown: Mutex<Vec<PanelText>>,
}

impl RecordingPanel {
    pub fn last(&self) -> Option<PanelText> {
        self.shown.lock().unwrap().last().cloned()
    }
}

impl ReadingsPanel for RecordingPanel {
    fn show(&self, text: PanelText) {
        self.shown.lock().unwrap().push(text);
    }
}

#[derive(Default)]
pub struct RecordingIndicator {
    busy: AtomicBool,
    transitions: AtomicU32,
}

impl RecordingIndicator {
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn transitions(&self) -> u32 {
        self.transitions.load(Ordering::SeqCst)
    }
}

impl RefreshIndicator for RecordingIndicator {
    fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::SeqCst);
        self.transitions.fetch_add(1, Ordering::SeqCst);
    }
}
