//! HTTP utilities for Bridge REST API calls

use super::error::LookupError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and drops non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.chars().count() > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Bridge API calls
///
/// No authentication, no custom headers and no timeout override: requests go
/// out with the transport defaults.
#[derive(Debug, Clone)]
pub struct BridgeHttpClient {
    client: Client,
}

impl BridgeHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self, LookupError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Issue one GET and decode a 200 response body as `T`.
    ///
    /// The response is either fully consumed or dropped before this returns,
    /// so the connection is released on every path.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            // Body is not inspected for error detail.
            tracing::warn!("API error: {} for {}", status, url);
            return Err(LookupError::RemoteStatus { status });
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|err| {
            tracing::debug!(
                "Failed to parse response JSON: {} - {}",
                err,
                sanitize_for_log(&String::from_utf8_lossy(&body))
            );
            LookupError::Decode(err)
        })
    }
}
