// Display formatting for the current-readings panel
use super::reading::Reading;
use super::time_labels::parse_timestamp;
use chrono_tz::Tz;
use serde::Serialize;

/// Shown when a field is absent from an otherwise valid reading.
pub const PLACEHOLDER: &str = "--";
/// Shown in every field when the latest reading could not be fetched.
pub const ERROR_TEXT: &str = "Error";

pub struct NumberFormatter;

impl NumberFormatter {
    pub fn fixed(value: f64, decimals: usize) -> String {
        format!("{value:.decimals$}")
    }
}

/// Text for the four scalar fields of the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelText {
    pub temperature: String,
    pub humidity: String,
    pub air_quality: String,
    pub timestamp: String,
}

impl PanelText {
    pub fn placeholder() -> Self {
        Self::filled(PLACEHOLDER)
    }

    pub fn error() -> Self {
        Self::filled(ERROR_TEXT)
    }

    fn filled(text: &str) -> Self {
        Self {
            temperature: text.to_string(),
            humidity: text.to_string(),
            air_quality: text.to_string(),
            timestamp: text.to_string(),
        }
    }
}

/// Formats a latest reading as `DD/MM/YYYY, HH:MM:SS` in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct ReadingFormatter {
    tz: Tz,
}

impl ReadingFormatter {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn format(&self, reading: &Reading) -> PanelText {
        PanelText {
            temperature: Self::scalar(reading.temperature),
            humidity: Self::scalar(reading.humidity),
            air_quality: Self::scalar(reading.air_quality),
            timestamp: reading
                .timestamp
                .as_deref()
                .and_then(|raw| parse_timestamp(raw, self.tz))
                .map(|dt| dt.format("%d/%m/%Y, %H:%M:%S").to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }

    fn scalar(value: Option<f64>) -> String {
        value
            .map(|v| NumberFormatter::fixed(v, 1))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed() {
        assert_eq!(NumberFormatter::fixed(21.0, 1), "21.0");
        assert_eq!(NumberFormatter::fixed(3.14159, 2), "3.14");
        assert_eq!(NumberFormatter::fixed(0.0, 1), "0.0");
    }

    #[test]
    fn test_full_reading() {
        let formatter = ReadingFormatter::new(chrono_tz::Asia::Karachi);
        let reading = Reading {
            temperature: Some(24.56),
            humidity: Some(61.0),
            air_quality: Some(0.0),
            timestamp: Some("2024-03-05T04:07:09Z".to_string()),
        };

        assert_eq!(
            formatter.format(&reading),
            PanelText {
                temperature: "24.6".to_string(),
                humidity: "61.0".to_string(),
                air_quality: "0.0".to_string(),
                timestamp: "05/03/2024, 09:07:09".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_reading_uses_placeholders() {
        let formatter = ReadingFormatter::new(chrono_tz::Asia::Karachi);
        assert_eq!(formatter.format(&Reading::default()), PanelText::placeholder());
    }

    #[test]
    fn test_bad_timestamp_only_degrades_that_field() {
        let formatter = ReadingFormatter::new(chrono_tz::UTC);
        let reading = Reading {
            temperature: Some(20.0),
            timestamp: Some("not a date".to_string()),
            ..Reading::default()
        };

        let text = formatter.format(&reading);
        assert_eq!(text.temperature, "20.0");
        assert_eq!(text.humidity, PLACEHOLDER);
        assert_eq!(text.timestamp, PLACEHOLDER);
    }
}
