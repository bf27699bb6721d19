//! Bridge API interaction module
//!
//! This module provides the plumbing for talking to the Bridge HTTP API:
//! URL construction against the configured base endpoint, the single GET
//! used by lookups, and the error taxonomy every lookup failure maps onto.
//!
//! # Module Structure
//!
//! - [`client`] - Bridge client bound to one base endpoint
//! - [`error`] - Lookup error taxonomy
//! - [`http`] - HTTP utilities for the REST call
//!
//! # Example
//!
//! ```ignore
//! use bridge_lookup::bridge::client::BridgeClient;
//!
//! async fn example() -> Result<(), bridge_lookup::LookupError> {
//!     let client = BridgeClient::new("http://localhost:5000/api")?;
//!     let resource = client.get_resource("widget-1").await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod http;
