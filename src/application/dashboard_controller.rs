// Dashboard controller - Use case for one refresh cycle
use crate::application::data_source::DataSource;
use crate::application::views::{ChartView, ReadingsPanel};
use crate::domain::channel::Channel;
use crate::domain::format::{PanelText, ReadingFormatter};
use crate::domain::reading::HistorySeries;
use crate::domain::series::ChartSeriesBuilder;
use crate::domain::time_labels::parse_timestamp;
use chrono::Utc;
use chrono_tz::Tz;
use std::sync::Arc;

/// One chart handle per channel.
#[derive(Clone)]
pub struct ChartViews {
    pub temperature: Arc<dyn ChartView>,
    pub humidity: Arc<dyn ChartView>,
    pub air_quality: Arc<dyn ChartView>,
}

impl ChartViews {
    pub fn for_channel(&self, channel: Channel) -> &dyn ChartView {
        match channel {
            Channel::Temperature => self.temperature.as_ref(),
            Channel::Humidity => self.humidity.as_ref(),
            Channel::AirQuality => self.air_quality.as_ref(),
        }
    }
}

/// What a refresh did. Used for logging and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshReport {
    pub latest_ok: bool,
    pub history_ok: bool,
    pub updated: Vec<Channel>,
    pub skipped: Vec<Channel>,
}

#[derive(Clone)]
pub struct DashboardController {
    source: Arc<dyn DataSource>,
    panel: Arc<dyn ReadingsPanel>,
    charts: ChartViews,
    tz: Tz,
}

impl DashboardController {
    pub fn new(
        source: Arc<dyn DataSource>,
        panel: Arc<dyn ReadingsPanel>,
        charts: ChartViews,
        tz: Tz,
    ) -> Self {
        Self {
            source,
            panel,
            charts,
            tz,
        }
    }

    /// Fetch latest, then history. Never fails; errors only degrade the views.
    pub async fn refresh(&self) -> RefreshReport {
        let mut report = RefreshReport {
            latest_ok: self.update_current_readings().await,
            ..RefreshReport::default()
        };

        match self.source.get_history().await {
            Ok(history) => {
                report.history_ok = true;
                self.update_charts(&history, &mut report);
            }
            Err(e) => {
                // Charts keep their last rendered state
                tracing::warn!(error = %e, "Error fetching historical data");
            }
        }

        tracing::debug!(
            latest_ok = report.latest_ok,
            history_ok = report.history_ok,
            updated = report.updated.len(),
            skipped = report.skipped.len(),
            "Refresh finished"
        );

        report
    }

    async fn update_current_readings(&self) -> bool {
        match self.source.get_latest().await {
            Ok(reading) => {
                self.panel.show(ReadingFormatter::new(self.tz).format(&reading));
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching current data");
                self.panel.show(PanelText::error());
                false
            }
        }
    }

    fn update_charts(&self, history: &HistorySeries, report: &mut RefreshReport) {
        self.log_history_lag(history);

        for (channel, reason) in history.malformed_channels() {
            tracing::warn!(?channel, reason, "Skipping undecodable history channel");
        }

        for channel in history.misaligned_channels() {
            tracing::warn!(
                ?channel,
                timestamps = history.timestamps.len(),
                "History channel is not aligned with its timestamps"
            );
        }

        for channel in Channel::ALL {
            let built = ChartSeriesBuilder::build(
                channel.config(),
                &history.timestamps,
                history.values(channel),
            );

            match built {
                Some(series) => {
                    self.charts.for_channel(channel).render(series);
                    report.updated.push(channel);
                }
                None => {
                    tracing::debug!(?channel, "No data for channel, leaving chart as is");
                    report.skipped.push(channel);
                }
            }
        }
    }

    fn log_history_lag(&self, history: &HistorySeries) {
        let newest = history
            .timestamps
            .last()
            .and_then(|raw| parse_timestamp(raw, self.tz));

        match newest {
            Some(newest) => {
                let lag_minutes = (Utc::now() - newest.with_timezone(&Utc)).num_seconds() as f64 / 60.0;
                tracing::debug!(
                    samples = history.timestamps.len(),
                    lag_minutes,
                    "Received history"
                );
            }
            None => tracing::debug!(samples = history.timestamps.len(), "Received history"),
        }
    }
}
