//! Read-only lookup bridge for the Bridge API
//!
//! Given a resource name, fetch `GET <api_url>/resource/<name>` and expose the
//! resource's `value`, `arn` and `resource_type` as computed attributes of
//! the `bridge_value` data source, with the id set to the name.

pub mod bridge;
pub mod config;
pub mod resource;

pub use bridge::error::LookupError;
pub use config::ProviderConfig;
pub use resource::{lookup, LookupRequest, LookupResult};
