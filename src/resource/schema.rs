//! Data source schema and host-side state
//!
//! The attribute schema of the `bridge_value` data source, the checked
//! attribute store the host hands to a read, and the diagnostics a read
//! returns.

use crate::bridge::error::LookupError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Name under which the data source is registered with the host
pub const DATA_SOURCE_NAME: &str = "bridge_value";

/// Attribute value type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

impl AttributeType {
    fn accepts(self, value: &Value) -> bool {
        match self {
            AttributeType::String => value.is_string(),
        }
    }
}

/// Whether the caller supplies the attribute or the read computes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    Required,
    Computed,
}

/// One schema attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub kind: AttributeType,
    pub mode: AttributeMode,
}

impl Attribute {
    pub const fn required_string() -> Self {
        Self {
            kind: AttributeType::String,
            mode: AttributeMode::Required,
        }
    }

    pub const fn computed_string() -> Self {
        Self {
            kind: AttributeType::String,
            mode: AttributeMode::Computed,
        }
    }
}

/// Declared attributes, keyed by name
pub type Schema = BTreeMap<&'static str, Attribute>;

/// Schema of the `bridge_value` data source
pub fn data_source_schema() -> Schema {
    BTreeMap::from([
        ("name", Attribute::required_string()),
        ("value", Attribute::computed_string()),
        ("arn", Attribute::computed_string()),
        ("resource_type", Attribute::computed_string()),
    ])
}

/// Attribute store for one data source instance
///
/// Writes are checked against the schema: unknown attributes and values of
/// the wrong type are refused with [`LookupError::FieldAssignment`].
#[derive(Debug, Clone)]
pub struct ResourceData {
    schema: Schema,
    id: Option<String>,
    attributes: BTreeMap<String, Value>,
}

impl ResourceData {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            id: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Store for `bridge_value` with the `name` input already set
    pub fn for_name(name: &str) -> Result<Self, LookupError> {
        let mut data = Self::new(data_source_schema());
        data.set("name", name)?;
        Ok(data)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Record an attribute value
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), LookupError> {
        let value = value.into();

        let Some(attribute) = self.schema.get(key) else {
            return Err(LookupError::FieldAssignment {
                attribute: key.to_string(),
                reason: "attribute is not declared in the schema".to_string(),
            });
        };

        if !attribute.kind.accepts(&value) {
            return Err(LookupError::FieldAssignment {
                attribute: key.to_string(),
                reason: format!("expected {:?}, got {}", attribute.kind, value),
            });
        }

        self.attributes.insert(key.to_string(), value);
        Ok(())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Flat JSON view: `id` followed by every recorded attribute
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(id) = &self.id {
            map.insert("id".to_string(), Value::String(id.clone()));
        }
        for (key, value) in &self.attributes {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// One message reported back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "Error",
        };
        write!(f, "{}: {}", label, self.summary)
    }
}

/// Diagnostics returned by a read; empty means success
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single error diagnostic carrying the error text verbatim
    pub fn from_err(err: &dyn std::error::Error) -> Self {
        Self(vec![Diagnostic {
            severity: Severity::Error,
            summary: err.to_string(),
        }])
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_declares_one_input_and_three_outputs() {
        let schema = data_source_schema();
        assert_eq!(schema.len(), 4);
        assert_eq!(schema["name"].mode, AttributeMode::Required);
        for key in ["value", "arn", "resource_type"] {
            assert_eq!(schema[key], Attribute::computed_string(), "{key}");
        }
    }

    #[test]
    fn for_name_sets_the_input() {
        let data = ResourceData::for_name("widget-1").unwrap();
        assert_eq!(data.get_str("name"), Some("widget-1"));
        assert_eq!(data.id(), None);
    }

    #[test]
    fn set_refuses_undeclared_attribute() {
        let mut data = ResourceData::new(data_source_schema());
        let err = data.set("region", "eu-west-1").unwrap_err();
        assert!(matches!(
            err,
            LookupError::FieldAssignment { ref attribute, .. } if attribute == "region"
        ));
        assert!(data.get("region").is_none());
    }

    #[test]
    fn set_refuses_wrong_type() {
        let mut data = ResourceData::new(data_source_schema());
        let err = data.set("value", 42).unwrap_err();
        assert!(err.to_string().contains("expected String, got 42"));
    }

    #[test]
    fn to_json_flattens_id_and_attributes() {
        let mut data = ResourceData::for_name("widget-1").unwrap();
        data.set("value", "42").unwrap();
        data.set_id("widget-1");
        assert_eq!(
            data.to_json(),
            json!({"id": "widget-1", "name": "widget-1", "value": "42"})
        );
    }

    #[test]
    fn diagnostics_from_err_is_one_error() {
        let err = LookupError::InvalidInput("name must not be empty".to_string());
        let diags = Diagnostics::from_err(&err);
        assert_eq!(diags.len(), 1);
        assert!(diags.has_error());
        assert_eq!(
            diags.iter().next().map(ToString::to_string).as_deref(),
            Some("Error: invalid input: name must not be empty")
        );
    }
}
