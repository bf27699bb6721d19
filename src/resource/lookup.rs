//! Resource Lookup
//!
//! The read path of the `bridge_value` data source: build the resource URL,
//! GET it, decode the body and map it onto the exposed attributes.

use crate::bridge::client::BridgeClient;
use crate::bridge::error::LookupError;
use crate::config::ProviderConfig;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One lookup, by resource name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub name: String,
}

impl LookupRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Resource as served by `GET /resource/{name}`
///
/// Missing (or null) fields decode to the empty string and unknown fields
/// are ignored. A field of the wrong JSON type is a decode error. Keys match
/// case-sensitively; a repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputResource {
    #[serde(deserialize_with = "null_as_empty")]
    pub value: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub arn: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub resource_type: String,
}

impl OutputResource {
    /// Decode a response body.
    ///
    /// Goes through a JSON object first so repeated keys collapse to the last
    /// occurrence instead of failing as duplicate fields.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Map an already parsed JSON document onto the resource shape
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Attributes handed back to the caller
///
/// `id` is always the requested name, never anything from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub id: String,
    pub value: String,
    pub arn: String,
    pub resource_type: String,
}

impl LookupResult {
    /// Map a decoded resource onto the result for `name`
    pub fn from_output(name: &str, output: OutputResource) -> Self {
        Self {
            id: name.to_string(),
            value: output.value,
            arn: output.arn,
            resource_type: output.resource_type,
        }
    }
}

/// Look up one resource.
///
/// Makes exactly one GET against `config.api_url`. Cancellation and
/// deadlines belong to the caller: dropping the future aborts the request.
pub async fn lookup(
    config: &ProviderConfig,
    request: &LookupRequest,
) -> Result<LookupResult, LookupError> {
    let client = BridgeClient::new(&config.api_url)?;

    tracing::debug!("Looking up resource {:?} at {}", request.name, client.base_url());

    // Parsed as a plain document first: repeated keys collapse to the last one.
    let document: Value = client.get_resource(&request.name).await?;
    let output = OutputResource::from_value(document).map_err(|err| {
        tracing::debug!("Failed to decode resource {:?}: {}", request.name, err);
        LookupError::Decode(err)
    })?;
    Ok(LookupResult::from_output(&request.name, output))
}
