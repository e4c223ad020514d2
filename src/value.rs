//! Field value types for CSV serialization.
//!
//! Defines [`Value`], the closed union of field kinds a record can hold,
//! and [`ValueCasts`], the optional per-kind formatting overrides applied
//! when a value is turned into a CSV field.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::RecordsToCsvError;

/// Timestamp output format: ISO 8601 in UTC with millisecond precision
/// (e.g., "2024-01-15T10:30:00.123Z").
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// A single field value.
///
/// Records map field names to this closed union rather than to arbitrary
/// types, so field formatting never depends on runtime type inspection.
/// Every variant has a locale-independent default rendering (see
/// [`Value::to_field`]); callers that need different output install a
/// [`ValueCasts`] hook instead of pre-formatting their data.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, emitted as-is (the CSV writer handles quoting).
    Text(String),
    /// Signed integer, emitted in decimal.
    Int(i64),
    /// Floating-point number, emitted as the shortest round-trip decimal.
    Float(f64),
    /// Boolean, emitted as `true` or `false`.
    Bool(bool),
    /// UTC timestamp, emitted in ISO 8601 with millisecond precision.
    Date(DateTime<Utc>),
    /// Missing/empty value, emitted as the empty string.
    Null,
}

impl Value {
    /// Returns true for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Converts a JSON scalar into a field value.
    ///
    /// Integer-representable numbers become [`Value::Int`], all other
    /// numbers [`Value::Float`]. Nested arrays and objects are stringified
    /// to their compact JSON text, since a CSV field can only hold text.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s.clone()),
            nested => Value::Text(nested.to_string()),
        }
    }

    /// Formats the value as a CSV field, honoring any matching cast hook.
    ///
    /// A hook failure surfaces as [`RecordsToCsvError::Cast`]; without hooks
    /// this cannot fail.
    pub(crate) fn to_field(&self, casts: &ValueCasts) -> Result<String, RecordsToCsvError> {
        let cast = match self {
            Value::Bool(b) => casts.bool_cast.as_ref().map(|f| f(*b)),
            Value::Int(i) => casts.int_cast.as_ref().map(|f| f(*i)),
            Value::Float(x) => casts.float_cast.as_ref().map(|f| f(*x)),
            Value::Date(d) => casts.date_cast.as_ref().map(|f| f(d)),
            Value::Null => casts.null_cast.as_ref().map(|f| f()),
            Value::Text(_) => None,
        };
        match cast {
            Some(result) => result.map_err(RecordsToCsvError::Cast),
            None => Ok(self.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Value::Null => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

type BoolCast = Box<dyn Fn(bool) -> Result<String, String> + Send + Sync>;
type IntCast = Box<dyn Fn(i64) -> Result<String, String> + Send + Sync>;
type FloatCast = Box<dyn Fn(f64) -> Result<String, String> + Send + Sync>;
type DateCast = Box<dyn Fn(&DateTime<Utc>) -> Result<String, String> + Send + Sync>;
type NullCast = Box<dyn Fn() -> Result<String, String> + Send + Sync>;

/// Optional per-kind formatting overrides.
///
/// Each hook replaces the default rendering for one [`Value`] kind; kinds
/// without a hook keep their default. Hooks return `Err` to reject a value,
/// which aborts the conversion with [`RecordsToCsvError::Cast`].
///
/// # Example
///
/// ```
/// use records_to_csv::ValueCasts;
///
/// // Spreadsheet-style booleans and a custom null token
/// let casts = ValueCasts::new()
///     .with_bool(|b| Ok(if b { "YES" } else { "NO" }.to_string()))
///     .with_null(|| Ok("N/A".to_string()));
/// ```
#[derive(Default)]
pub struct ValueCasts {
    bool_cast: Option<BoolCast>,
    int_cast: Option<IntCast>,
    float_cast: Option<FloatCast>,
    date_cast: Option<DateCast>,
    null_cast: Option<NullCast>,
}

impl ValueCasts {
    /// Creates an empty hook set; all kinds keep their default rendering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides boolean rendering.
    #[must_use]
    pub fn with_bool<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) -> Result<String, String> + Send + Sync + 'static,
    {
        self.bool_cast = Some(Box::new(f));
        self
    }

    /// Overrides integer rendering.
    #[must_use]
    pub fn with_int<F>(mut self, f: F) -> Self
    where
        F: Fn(i64) -> Result<String, String> + Send + Sync + 'static,
    {
        self.int_cast = Some(Box::new(f));
        self
    }

    /// Overrides floating-point rendering.
    #[must_use]
    pub fn with_float<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> Result<String, String> + Send + Sync + 'static,
    {
        self.float_cast = Some(Box::new(f));
        self
    }

    /// Overrides date rendering.
    #[must_use]
    pub fn with_date<F>(mut self, f: F) -> Self
    where
        F: Fn(&DateTime<Utc>) -> Result<String, String> + Send + Sync + 'static,
    {
        self.date_cast = Some(Box::new(f));
        self
    }

    /// Overrides the empty-string rendering of missing/null fields.
    #[must_use]
    pub fn with_null<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<String, String> + Send + Sync + 'static,
    {
        self.null_cast = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for ValueCasts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCasts")
            .field("bool", &self.bool_cast.is_some())
            .field("int", &self.int_cast.is_some())
            .field("float", &self.float_cast.is_some())
            .field("date", &self.date_cast.is_some())
            .field("null", &self.null_cast.is_some())
            .finish()
    }
}

/// Formats a timestamp the way [`Value::Date`] renders by default.
///
/// Exposed for callers that mix pre-formatted text dates with [`Value::Date`]
/// fields and want identical output for both.
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}
