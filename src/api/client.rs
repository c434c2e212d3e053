//! Schedule endpoint client.
//!
//! Issues a single unauthenticated GET against the configured endpoint and
//! decodes the body into a [`Table`]. Failed requests are not retried.

use std::time::Duration;

use reqwest::{header, Client, Response};
use tracing::{debug, info, instrument};

use super::error::{ApiError, Result};
use super::types::Table;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the schedule endpoint.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    /// The HTTP client.
    client: Client,
    /// The full URL of the schedule document.
    endpoint: String,
}

impl ScheduleClient {
    /// Create a client for the given endpoint with the default timeout.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client for the given endpoint with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the endpoint is not an http(s) URL,
    /// or `ApiError::Network` if the HTTP client cannot be built.
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = normalize_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self { client, endpoint })
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the schedule table.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_table(&self) -> Result<Table> {
        debug!("Fetching schedule table");

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let table = self.handle_response(response).await?;
        info!(
            columns = table.column_count(),
            rows = table.row_count(),
            "Schedule table fetched"
        );
        Ok(table)
    }

    /// Check the status and decode the body.
    async fn handle_response(&self, response: Response) -> Result<Table> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Error response body: {}", body);
            return Err(ApiError::from_status(status, &self.endpoint));
        }

        let body = response.text().await?;
        serde_json::from_str::<Table>(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

/// Trim the endpoint and make sure it is an http(s) URL.
fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let endpoint = endpoint.trim();

    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(ApiError::InvalidUrl(format!(
            "'{}' must start with http:// or https://",
            endpoint
        )));
    }

    Ok(endpoint.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Cell;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the URL to hit.
    async fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}/horarios", addr)
    }

    #[test]
    fn test_normalize_endpoint_trims_whitespace() {
        assert_eq!(
            normalize_endpoint("  http://localhost:3000/horarios \n").unwrap(),
            "http://localhost:3000/horarios"
        );
    }

    #[test]
    fn test_normalize_endpoint_rejects_other_schemes() {
        let err = normalize_endpoint("ftp://localhost/horarios").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let client = ScheduleClient::new("http://localhost:3000/horarios").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/horarios");
    }

    #[tokio::test]
    async fn test_fetch_table_success() {
        let url = serve_once(
            "200 OK",
            r#"{"caption":"Horarios","header":["Day","Course"],"data":[["Mon","Math"]]}"#,
        )
        .await;

        let client = ScheduleClient::new(&url).unwrap();
        let table = client.fetch_table().await.unwrap();
        assert_eq!(table.caption, "Horarios");
        assert_eq!(table.header, vec!["Day", "Course"]);
        assert_eq!(table.data, vec![vec![Cell::from("Mon"), Cell::from("Math")]]);
    }

    #[tokio::test]
    async fn test_fetch_table_non_success_status() {
        let url = serve_once("503 Service Unavailable", "{}").await;

        let client = ScheduleClient::new(&url).unwrap();
        let err = client.fetch_table().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_table_invalid_body() {
        let url = serve_once("200 OK", "<html>not json</html>").await;

        let client = ScheduleClient::new(&url).unwrap();
        let err = client.fetch_table().await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_table_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ScheduleClient::new(&format!("http://{}/horarios", addr)).unwrap();
        let err = client.fetch_table().await.unwrap_err();
        assert!(err.is_network());
    }
}
