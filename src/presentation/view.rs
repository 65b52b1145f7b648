// In-memory views written by the controller and read by the HTTP handlers
use crate::application::dashboard_controller::ChartViews;
use crate::application::views::{ChartView, ReadingsPanel, RefreshIndicator};
use crate::domain::channel::{Channel, ChannelConfig, ColorPair};
use crate::domain::format::PanelText;
use crate::domain::series::RenderedSeries;
use crate::domain::time_labels::TimeLabelFormatter;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Short labels for every `stride`-th tick, empty strings elsewhere.
pub fn thin_ticks(labels: Vec<String>, stride: usize) -> Vec<String> {
    let stride = stride.max(1);
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| if i % stride == 0 { label } else { String::new() })
        .collect()
}

pub struct ChartHandle {
    config: &'static ChannelConfig,
    series: RwLock<Option<RenderedSeries>>,
    repaints: AtomicU64,
}

impl ChartHandle {
    pub fn new(channel: Channel) -> Self {
        Self {
            config: channel.config(),
            series: RwLock::new(None),
            repaints: AtomicU64::new(0),
        }
    }

    fn snapshot(&self, labels: &TimeLabelFormatter, tick_stride: usize) -> ChartSnapshot {
        let series = self
            .series
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .map(|s| SeriesSnapshot {
                tick_labels: thin_ticks(labels.format(&s.labels), tick_stride),
                legend_label: s.legend_label,
                y_min: s.y_min,
                y_max: s.y_max,
                labels: s.labels,
                values: s.values,
            });

        ChartSnapshot {
            channel: self.config.channel,
            title: self.config.chart_title(),
            axis_title: self.config.axis_title,
            color: self.config.color,
            repaints: self.repaints.load(Ordering::Relaxed),
            series,
        }
    }
}

impl ChartView for ChartHandle {
    fn render(&self, series: RenderedSeries) {
        *self.series.write().unwrap_or_else(PoisonError::into_inner) = Some(series);
        self.repaints.fetch_add(1, Ordering::Relaxed);
    }
}

pub struct PanelHandle {
    text: RwLock<PanelText>,
}

impl Default for PanelHandle {
    fn default() -> Self {
        Self {
            text: RwLock::new(PanelText::placeholder()),
        }
    }
}

impl ReadingsPanel for PanelHandle {
    fn show(&self, text: PanelText) {
        *self.text.write().unwrap_or_else(PoisonError::into_inner) = text;
    }
}

/// Counts in-flight manual refreshes; busy while any is pending.
#[derive(Default)]
pub struct BusyHandle {
    pending: AtomicUsize,
}

impl BusyHandle {
    pub fn is_busy(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }
}

impl RefreshIndicator for BusyHandle {
    fn set_busy(&self, busy: bool) {
        if busy {
            self.pending.fetch_add(1, Ordering::SeqCst);
        } else {
            let _ = self
                .pending
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesSnapshot {
    pub legend_label: String,
    pub y_min: f64,
    pub y_max: f64,
    pub labels: Vec<String>,
    pub tick_labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSnapshot {
    pub channel: Channel,
    pub title: String,
    pub axis_title: &'static str,
    pub color: ColorPair,
    pub repaints: u64,
    pub series: Option<SeriesSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub readings: PanelText,
    pub refreshing: bool,
    pub charts: Vec<ChartSnapshot>,
}

pub struct DashboardView {
    pub panel: Arc<PanelHandle>,
    pub busy: Arc<BusyHandle>,
    temperature: Arc<ChartHandle>,
    humidity: Arc<ChartHandle>,
    air_quality: Arc<ChartHandle>,
    labels: TimeLabelFormatter,
    tick_stride: usize,
}

impl DashboardView {
    pub fn new(labels: TimeLabelFormatter, tick_stride: usize) -> Self {
        Self {
            panel: Arc::new(PanelHandle::default()),
            busy: Arc::new(BusyHandle::default()),
            temperature: Arc::new(ChartHandle::new(Channel::Temperature)),
            humidity: Arc::new(ChartHandle::new(Channel::Humidity)),
            air_quality: Arc::new(ChartHandle::new(Channel::AirQuality)),
            labels,
            tick_stride,
        }
    }

    pub fn chart_views(&self) -> ChartViews {
        ChartViews {
            temperature: self.temperature.clone(),
            humidity: self.humidity.clone(),
            air_quality: self.air_quality.clone(),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let charts = [&self.temperature, &self.humidity, &self.air_quality]
            .into_iter()
            .map(|chart| chart.snapshot(&self.labels, self.tick_stride))
            .collect();

        DashboardSnapshot {
            readings: self
                .panel
                .text
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            refreshing: self.busy.is_busy(),
            charts,
        }
    }
}
