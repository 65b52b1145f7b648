// HTTP data source for the sensor server
use crate::application::data_source::{DataSource, DataSourceError};
use crate::domain::reading::{HistorySeries, Reading};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DataSourceError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "Fetching");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DataSourceError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DataSourceError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(DataSourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| DataSourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn get_latest(&self) -> Result<Reading, DataSourceError> {
        self.get_json("/get-latest").await
    }

    async fn get_history(&self) -> Result<HistorySeries, DataSourceError> {
        self.get_json("/get-history").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/")
    }

    fn source(base_url: &str) -> HttpDataSource {
        HttpDataSource::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        let source = source("http://sensors.local:5000/");
        assert_eq!(
            source.endpoint("/get-latest"),
            "http://sensors.local:5000/get-latest"
        );
    }

    #[tokio::test]
    async fn test_fetches_latest_and_history() {
        let router = Router::new()
            .route(
                "/get-latest",
                get(|| async { r#"{"temperature": 25.1, "timestamp": "2024-01-01 15:00:00"}"# }),
            )
            .route(
                "/get-history",
                get(|| async {
                    r#"{"timestamps": ["2024-01-01 15:00:00"], "temperatures": [25.1], "humidities": [40.0]}"#
                }),
            );
        let source = source(&serve(router).await);

        let latest = source.get_latest().await.unwrap();
        assert_eq!(latest.temperature, Some(25.1));
        assert_eq!(latest.humidity, None);

        let history = source.get_history().await.unwrap();
        assert_eq!(history.timestamps.len(), 1);
        assert_eq!(history.humidities, Some(vec![40.0]));
        assert_eq!(history.air_qualities, None);
    }

    #[tokio::test]
    async fn test_not_found_is_a_status_error() {
        let router = Router::new().route(
            "/get-latest",
            get(|| async { (StatusCode::NOT_FOUND, r#"{"error": "No data found"}"#) }),
        );
        let source = source(&serve(router).await);

        match source.get_latest().await {
            Err(DataSourceError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert!(body.contains("No data found"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_payload_is_a_decode_error() {
        let router = Router::new().route(
            "/get-history",
            get(|| async { r#"{"timestamps": "not-a-list"}"# }),
        );
        let source = source(&serve(router).await);

        assert!(matches!(
            source.get_history().await,
            Err(DataSourceError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = source(&format!("http://{addr}"));
        assert!(matches!(
            source.get_latest().await,
            Err(DataSourceError::Transport(_))
        ));
    }
}
