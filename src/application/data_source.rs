// Data source trait for the sensor server
use crate::domain::reading::{HistorySeries, Reading};
use async_trait::async_trait;

/// Failures at the fetch boundary. None of these escape the controller.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed payload: {0}")]
    Decode(String),
}

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the single most recent reading
    async fn get_latest(&self) -> Result<Reading, DataSourceError>;

    /// Fetch the co-indexed history arrays
    async fn get_history(&self) -> Result<HistorySeries, DataSourceError>;
}
