//! `bridge_value` data source
//!
//! # Architecture
//!
//! - [`lookup`] - Typed lookup: name in, computed attributes out
//! - [`schema`] - Attribute schema, host attribute store and diagnostics
//! - [`data_source`] - Host-facing read built on the two above
//!
//! # Example
//!
//! ```ignore
//! use bridge_lookup::config::ProviderConfig;
//! use bridge_lookup::resource::{read, ResourceData};
//!
//! async fn read_widget(config: &ProviderConfig) -> anyhow::Result<()> {
//!     let mut data = ResourceData::for_name("widget-1")?;
//!     let diags = read(config, &mut data).await;
//!     anyhow::ensure!(!diags.has_error(), "lookup failed");
//!     println!("{}", data.to_json());
//!     Ok(())
//! }
//! ```

mod data_source;
mod lookup;
mod schema;

pub use data_source::read;
pub use lookup::{lookup, LookupRequest, LookupResult, OutputResource};
pub use schema::{
    data_source_schema, Attribute, AttributeMode, AttributeType, Diagnostic, Diagnostics,
    ResourceData, Schema, Severity, DATA_SOURCE_NAME,
};
