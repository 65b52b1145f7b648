// Renderable chart series, rebuilt from scratch on every refresh
use super::channel::ChannelConfig;
use super::format::NumberFormatter;
use super::statistics::SeriesStatistics;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSeries {
    /// Full timestamps; short tick labels are derived by the chart view.
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub y_min: f64,
    pub y_max: f64,
    pub legend_label: String,
}

pub struct ChartSeriesBuilder;

impl ChartSeriesBuilder {
    /// `None` means skip: the channel has no data this cycle.
    pub fn build(
        config: &ChannelConfig,
        timestamps: &[String],
        values: Option<&[f64]>,
    ) -> Option<RenderedSeries> {
        let values = values?;
        let stats = SeriesStatistics::compute(values)?;
        let (y_min, y_max) = stats.axis_bounds(&config.bounds);

        Some(RenderedSeries {
            labels: timestamps.to_vec(),
            values: values.to_vec(),
            y_min,
            y_max,
            legend_label: format!(
                "{} - Avg: {}{}",
                config.label,
                NumberFormatter::fixed(stats.average, 1),
                config.unit_suffix
            ),
        })
    }
}
