// Sensor payload models as served by /get-latest and /get-history
use super::channel::Channel;
use serde::{Deserialize, Deserializer};

/// Most recent snapshot across all channels. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Reading {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub air_quality: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One channel's history array, decoded independently of the others.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChannelData {
    #[default]
    Absent,
    Values(Vec<f64>),
    Malformed(String),
}

impl From<Vec<f64>> for ChannelData {
    fn from(values: Vec<f64>) -> Self {
        ChannelData::Values(values)
    }
}

impl<'de> Deserialize<'de> for ChannelData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(ChannelData::Absent);
        }

        Ok(match serde_json::from_value::<Vec<f64>>(raw) {
            Ok(values) => ChannelData::Values(values),
            Err(e) => ChannelData::Malformed(e.to_string()),
        })
    }
}

/// Co-indexed history arrays, ascending by time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HistorySeries {
    #[serde(default)]
    pub timestamps: Vec<String>,
    #[serde(default)]
    pub temperatures: ChannelData,
    #[serde(default)]
    pub humidities: ChannelData,
    #[serde(default)]
    pub air_qualities: ChannelData,
}

impl HistorySeries {
    fn channel(&self, channel: Channel) -> &ChannelData {
        match channel {
            Channel::Temperature => &self.temperatures,
            Channel::Humidity => &self.humidities,
            Channel::AirQuality => &self.air_qualities,
        }
    }

    /// `None` when the array is absent or could not be decoded.
    pub fn values(&self, channel: Channel) -> Option<&[f64]> {
        match self.channel(channel) {
            ChannelData::Values(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Channels whose array was present but not a list of numbers.
    pub fn malformed_channels(&self) -> Vec<(Channel, &str)> {
        Channel::ALL
            .into_iter()
            .filter_map(|c| match self.channel(c) {
                ChannelData::Malformed(reason) => Some((c, reason.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Channels whose array is present but not co-indexed with `timestamps`.
    pub fn misaligned_channels(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|c| {
                self.values(*c)
                    .is_some_and(|v| v.len() != self.timestamps.len())
            })
            .collect()
    }
}
