//! Record types: an ordered mapping from field name to value.
//!
//! A [`Record`] is one input row. Field insertion order is preserved because
//! it drives column discovery in first-record mode; see the `columns` module.

use indexmap::IndexMap;

use crate::error::RecordsToCsvError;
use crate::value::Value;

/// One input record: an insertion-ordered mapping from field name to
/// [`Value`].
///
/// Assigning an existing field name replaces its value but keeps the
/// field's original position. Records are plain values; the converter never
/// mutates them.
///
/// # Example
///
/// ```
/// use records_to_csv::Record;
///
/// let record = Record::new()
///     .with("code", "HK")
///     .with("name", "Hong Kong");
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["code", "name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field assignment.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Assigns a field, replacing any existing value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a record from a JSON value, which must be an object.
    ///
    /// Scalar members map onto [`Value`] kinds; nested arrays and objects
    /// are stringified to compact JSON text. Member order is preserved.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, RecordsToCsvError> {
        match value {
            serde_json::Value::Object(map) => Ok(map
                .iter()
                .map(|(name, member)| (name.clone(), Value::from_json(member)))
                .collect()),
            other => Err(RecordsToCsvError::InvalidInput(format!(
                "expected a key-value record, got JSON {}",
                json_kind(other)
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}

/// Short noun for a JSON value's kind, used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
