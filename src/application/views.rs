// Output surfaces written by the dashboard controller
use crate::domain::format::PanelText;
use crate::domain::series::RenderedSeries;

/// A chart widget. Receives a full replacement series and repaints.
pub trait ChartView: Send + Sync {
    fn render(&self, series: RenderedSeries);
}

/// The "current readings" text fields.
pub trait ReadingsPanel: Send + Sync {
    fn show(&self, text: PanelText);
}

/// Busy state of the manual refresh control.
pub trait RefreshIndicator: Send + Sync {
    fn set_busy(&self, busy: bool);
}
