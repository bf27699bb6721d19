//! Bridge Client
//!
//! Client bound to one Bridge API base endpoint, combining URL construction
//! and HTTP functionality.

use super::error::LookupError;
use super::http::BridgeHttpClient;
use serde::de::DeserializeOwned;

/// Path template under the base endpoint: `/resource/{name}`
const RESOURCE_PATH: &str = "resource";

/// Main Bridge client
#[derive(Debug, Clone)]
pub struct BridgeClient {
    http: BridgeHttpClient,
    base_url: String,
}

impl BridgeClient {
    /// Create a new client for the given base endpoint.
    ///
    /// The endpoint is treated as opaque apart from trimming trailing
    /// slashes; malformed URLs surface from the transport at call time.
    pub fn new(api_url: &str) -> Result<Self, LookupError> {
        if api_url.trim().is_empty() {
            return Err(LookupError::invalid_input("api_url must not be empty"));
        }

        Ok(Self {
            http: BridgeHttpClient::new()?,
            base_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base endpoint (without trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the resource URL for `name`
    pub fn resource_url(&self, name: &str) -> Result<String, LookupError> {
        resource_url(&self.base_url, name)
    }

    /// Fetch one resource by name and decode it as `T`
    pub async fn get_resource<T: DeserializeOwned>(&self, name: &str) -> Result<T, LookupError> {
        let url = self.resource_url(name)?;
        self.http.get_json(&url).await
    }
}

/// Build `<api_url>/resource/<name>`.
///
/// `name` becomes exactly one path segment: it is percent-encoded, and the
/// dot segments `.` and `..` are refused since URL normalisation would
/// re-target the request.
pub fn resource_url(api_url: &str, name: &str) -> Result<String, LookupError> {
    if name.is_empty() {
        return Err(LookupError::invalid_input("name must not be empty"));
    }
    if name == "." || name == ".." {
        return Err(LookupError::invalid_input(format!(
            "name {:?} is not a valid path segment",
            name
        )));
    }

    Ok(format!(
        "{}/{}/{}",
        api_url.trim_end_matches('/'),
        RESOURCE_PATH,
        urlencoding::encode(name)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_trailing_slash() {
        let url = resource_url("http://api.example.test", "widget-1").unwrap();
        assert_eq!(url, "http://api.example.test/resource/widget-1");
    }

    #[test]
    fn joins_with_trailing_slash() {
        let url = resource_url("http://api.example.test/", "widget-1").unwrap();
        assert_eq!(url, "http://api.example.test/resource/widget-1");
    }

    #[test]
    fn keeps_base_path() {
        let url = resource_url("http://localhost:5000/api/", "db-password").unwrap();
        assert_eq!(url, "http://localhost:5000/api/resource/db-password");
    }

    #[test]
    fn encodes_reserved_characters() {
        let url = resource_url("http://api.example.test", "team/app?x=1#frag").unwrap();
        assert_eq!(
            url,
            "http://api.example.test/resource/team%2Fapp%3Fx%3D1%23frag"
        );
    }

    #[test]
    fn encodes_spaces_and_unicode() {
        let url = resource_url("http://api.example.test", "my key é").unwrap();
        assert_eq!(url, "http://api.example.test/resource/my%20key%20%C3%A9");
    }

    #[test]
    fn rejects_empty_name() {
        let err = resource_url("http://api.example.test", "").unwrap_err();
        assert!(matches!(err, LookupError::InvalidInput(_)));
    }

    #[test]
    fn rejects_dot_segments() {
        for name in [".", ".."] {
            let err = resource_url("http://api.example.test", name).unwrap_err();
            assert!(matches!(err, LookupError::InvalidInput(_)), "{name}");
        }
    }

    #[test]
    fn dots_inside_names_are_fine() {
        let url = resource_url("http://api.example.test", "v1.2..3").unwrap();
        assert_eq!(url, "http://api.example.test/resource/v1.2..3");
    }

    #[test]
    fn client_trims_base_url() {
        let client = BridgeClient::new("http://api.example.test///").unwrap();
        assert_eq!(client.base_url(), "http://api.example.test");
        assert_eq!(
            client.resource_url("widget-1").unwrap(),
            "http://api.example.test/resource/widget-1"
        );
    }

    #[test]
    fn client_rejects_empty_endpoint() {
        assert!(matches!(
            BridgeClient::new("  "),
            Err(LookupError::InvalidInput(_))
        ));
    }
}
