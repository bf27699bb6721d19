//! `bridge_value` data source read
//!
//! Adapter between the host's attribute store and the typed lookup: pull the
//! name out, run the lookup, write the computed attributes back.

use super::lookup::{lookup, LookupRequest, LookupResult};
use super::schema::{Diagnostics, ResourceData};
use crate::bridge::error::LookupError;
use crate::config::ProviderConfig;

impl LookupRequest {
    /// Typed request from the host's attribute store
    pub fn from_data(data: &ResourceData) -> Result<Self, LookupError> {
        match data.get_str("name") {
            Some(name) => Ok(Self::new(name)),
            None => Err(LookupError::invalid_input(
                "attribute \"name\" is required and must be a string",
            )),
        }
    }
}

impl LookupResult {
    /// Record the computed attributes and the id on `data`.
    ///
    /// All or nothing: `data` is untouched if any attribute is refused.
    pub fn apply_to(&self, data: &mut ResourceData) -> Result<(), LookupError> {
        let mut staged = data.clone();
        staged.set("value", self.value.as_str())?;
        staged.set("arn", self.arn.as_str())?;
        staged.set("resource_type", self.resource_type.as_str())?;
        staged.set_id(self.id.as_str());
        *data = staged;
        Ok(())
    }
}

/// Read the data source.
///
/// On failure the returned diagnostics hold exactly one error and `data`
/// has no id.
pub async fn read(config: &ProviderConfig, data: &mut ResourceData) -> Diagnostics {
    match try_read(config, data).await {
        Ok(()) => Diagnostics::new(),
        Err(err) => {
            tracing::debug!("bridge_value read failed: {}", err);
            Diagnostics::from_err(&err)
        }
    }
}

async fn try_read(config: &ProviderConfig, data: &mut ResourceData) -> Result<(), LookupError> {
    let request = LookupRequest::from_data(data)?;
    let result = lookup(config, &request).await?;
    result.apply_to(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::schema::data_source_schema;

    fn result() -> LookupResult {
        LookupResult {
            id: "widget-1".to_string(),
            value: "42".to_string(),
            arn: "arn:aws:svc:::widget-1".to_string(),
            resource_type: "Widget".to_string(),
        }
    }

    #[test]
    fn request_from_data_reads_name() {
        let data = ResourceData::for_name("widget-1").unwrap();
        assert_eq!(
            LookupRequest::from_data(&data).unwrap(),
            LookupRequest::new("widget-1")
        );
    }

    #[test]
    fn request_from_data_requires_name() {
        let data = ResourceData::new(data_source_schema());
        assert!(matches!(
            LookupRequest::from_data(&data),
            Err(LookupError::InvalidInput(_))
        ));
    }

    #[test]
    fn apply_to_sets_all_outputs_and_id() {
        let mut data = ResourceData::for_name("widget-1").unwrap();
        result().apply_to(&mut data).unwrap();

        assert_eq!(data.id(), Some("widget-1"));
        assert_eq!(data.get_str("value"), Some("42"));
        assert_eq!(data.get_str("arn"), Some("arn:aws:svc:::widget-1"));
        assert_eq!(data.get_str("resource_type"), Some("Widget"));
    }

    #[test]
    fn apply_to_propagates_assignment_failure() {
        let mut schema = data_source_schema();
        schema.remove("arn");
        let mut data = ResourceData::new(schema);
        data.set("name", "widget-1").unwrap();

        let err = result().apply_to(&mut data).unwrap_err();
        assert!(matches!(
            err,
            LookupError::FieldAssignment { ref attribute, .. } if attribute == "arn"
        ));
        assert_eq!(data.id(), None);
        assert!(data.get("value").is_none());
    }

    #[tokio::test]
    async fn read_without_name_is_one_error() {
        let mut data = ResourceData::new(data_source_schema());

        let diags = read(&ProviderConfig::new("http://127.0.0.1:9"), &mut data).await;
        assert_eq!(diags.len(), 1);
        assert!(diags.has_error());
        assert_eq!(data.id(), None);
    }
}
