// src/parse/record.rs

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::Value;
use crate::error::FormatError;

/// One parsed catalog row: label → value pairs in schema order, immutable
/// once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new(fields: Vec<(String, Value)>) -> Self {
        Record { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    fn require(&self, label: &str) -> Result<&Value, FormatError> {
        self.get(label).ok_or_else(|| FormatError::MissingColumn {
            column: label.to_string(),
        })
    }

    fn wrong_type(label: &str, expected: &'static str, v: &Value) -> FormatError {
        FormatError::WrongType {
            column: label.to_string(),
            expected,
            found: v.kind(),
        }
    }

    /// Required string field.
    pub fn str_field(&self, label: &str) -> Result<&str, FormatError> {
        let v = self.require(label)?;
        v.as_str().ok_or_else(|| Self::wrong_type(label, "string", v))
    }

    /// Required integer field.
    pub fn int_field(&self, label: &str) -> Result<i64, FormatError> {
        let v = self.require(label)?;
        v.as_int().ok_or_else(|| Self::wrong_type(label, "integer", v))
    }

    /// Required float field.
    pub fn float_field(&self, label: &str) -> Result<f64, FormatError> {
        let v = self.require(label)?;
        v.as_f64().ok_or_else(|| Self::wrong_type(label, "real", v))
    }

    /// Nullable float field: `Absent` maps to `None`.
    pub fn opt_float(&self, label: &str) -> Result<Option<f64>, FormatError> {
        let v = self.require(label)?;
        match v {
            Value::Absent => Ok(None),
            _ => v
                .as_f64()
                .map(Some)
                .ok_or_else(|| Self::wrong_type(label, "real", v)),
        }
    }

    /// Nullable string field: `Absent` maps to `None`.
    pub fn opt_str(&self, label: &str) -> Result<Option<&str>, FormatError> {
        let v = self.require(label)?;
        match v {
            Value::Absent => Ok(None),
            _ => v
                .as_str()
                .map(Some)
                .ok_or_else(|| Self::wrong_type(label, "string", v)),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec() -> Record {
        Record::new(vec![
            ("Name".into(), Value::Str("J000000.00+000000.0".into())),
            ("RAdeg".into(), Value::Float(0.0)),
            ("nW1".into(), Value::Int(32)),
            ("SDist".into(), Value::Absent),
        ])
    }

    #[test]
    fn typed_getters() {
        let r = rec();
        assert_eq!(r.str_field("Name").unwrap(), "J000000.00+000000.0");
        assert_eq!(r.float_field("RAdeg").unwrap(), 0.0);
        assert_eq!(r.int_field("nW1").unwrap(), 32);
        assert_eq!(r.opt_float("SDist").unwrap(), None);
        assert_eq!(r.opt_float("RAdeg").unwrap(), Some(0.0));
    }

    #[test]
    fn missing_and_mistyped_columns_are_errors() {
        let r = rec();
        assert!(matches!(
            r.float_field("nope"),
            Err(FormatError::MissingColumn { .. })
        ));
        assert!(matches!(
            r.int_field("Name"),
            Err(FormatError::WrongType { .. })
        ));
        // a required getter never silently maps Absent to a number
        assert!(matches!(
            r.float_field("SDist"),
            Err(FormatError::WrongType { .. })
        ));
    }

    #[test]
    fn serializes_to_a_json_object_in_schema_order() {
        let json = serde_json::to_string(&rec()).unwrap();
        assert_eq!(
            json,
            r#"{"Name":"J000000.00+000000.0","RAdeg":0.0,"nW1":32,"SDist":null}"#
        );
    }
}
