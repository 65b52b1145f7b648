// Timestamp parsing and short chart labels
use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse an RFC 3339 timestamp, or a naive one taken as wall-clock time in `tz`.
pub fn parse_timestamp(raw: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&tz));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
}

/// Turns full timestamps into `HH:MM` labels in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct TimeLabelFormatter {
    tz: Tz,
}

impl TimeLabelFormatter {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn label(&self, raw: &str) -> String {
        match parse_timestamp(raw, self.tz) {
            Some(dt) => dt.format("%H:%M").to_string(),
            // Keep the slot; show whatever time part the server sent
            None => raw
                .split_once(' ')
                .map(|(_, time)| time.to_string())
                .unwrap_or_else(|| raw.to_string()),
        }
    }

    /// One label per input timestamp, in the same order.
    pub fn format(&self, timestamps: &[String]) -> Vec<String> {
        timestamps.iter().map(|t| self.label(t)).collect()
    }
}
