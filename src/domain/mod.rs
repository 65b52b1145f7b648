// Domain layer - Sensor payloads, channel table and series derivation
pub mod channel;
pub mod format;
pub mod reading;
pub mod series;
pub mod statistics;
pub mod time_labels;
