// Channel domain model - one row per charted sensor channel
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Temperature,
    Humidity,
    AirQuality,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Temperature, Channel::Humidity, Channel::AirQuality];

    pub fn config(self) -> &'static ChannelConfig {
        match self {
            Channel::Temperature => &CHANNELS[0],
            Channel::Humidity => &CHANNELS[1],
            Channel::AirQuality => &CHANNELS[2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorPair {
    pub border: &'static str,
    pub background: &'static str,
}

/// How the y-axis is padded around the observed min/max and where it is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsPolicy {
    pub pad_lower: f64,
    pub pad_upper: f64,
    pub floor: Option<f64>,
    pub cap: Option<f64>,
}

impl BoundsPolicy {
    /// Returns `(y_min, y_max)` for an observed range.
    pub fn apply(&self, min: f64, max: f64) -> (f64, f64) {
        let mut lower = min.floor() - self.pad_lower;
        let mut upper = max.ceil() + self.pad_upper;

        if let Some(floor) = self.floor {
            lower = lower.max(floor);
        }
        if let Some(cap) = self.cap {
            upper = upper.min(cap);
        }

        (lower, upper)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelConfig {
    pub channel: Channel,
    pub label: &'static str,
    pub color: ColorPair,
    pub axis_title: &'static str,
    pub unit_suffix: &'static str,
    pub bounds: BoundsPolicy,
}

impl ChannelConfig {
    pub fn chart_title(&self) -> String {
        format!("{} Over Time", self.label)
    }
}

pub static CHANNELS: [ChannelConfig; 3] = [
    ChannelConfig {
        channel: Channel::Temperature,
        label: "Temperature (°C)",
        color: ColorPair {
            border: "rgb(255, 99, 132)",
            background: "rgba(255, 99, 132, 0.15)",
        },
        axis_title: "Temperature (°C)",
        unit_suffix: "°C",
        bounds: BoundsPolicy {
            pad_lower: 1.0,
            pad_upper: 1.0,
            floor: None,
            cap: None,
        },
    },
    ChannelConfig {
        channel: Channel::Humidity,
        label: "Humidity (%)",
        color: ColorPair {
            border: "rgb(54, 162, 235)",
            background: "rgba(54, 162, 235, 0.15)",
        },
        axis_title: "Humidity (%)",
        unit_suffix: "%",
        bounds: BoundsPolicy {
            pad_lower: 5.0,
            pad_upper: 5.0,
            floor: Some(0.0),
            cap: Some(100.0),
        },
    },
    ChannelConfig {
        channel: Channel::AirQuality,
        label: "Air Quality (PPM)",
        color: ColorPair {
            border: "rgb(75, 192, 192)",
            background: "rgba(75, 192, 192, 0.15)",
        },
        axis_title: "Air Quality (PPM)",
        unit_suffix: "",
        bounds: BoundsPolicy {
            pad_lower: 10.0,
            pad_upper: 10.0,
            floor: Some(0.0),
            cap: None,
        },
    },
];
