//! The record-array to CSV converter.
//!
//! [`RecordsToCsv`] owns an immutable record collection and renders it to
//! CSV text. Column discovery and row projection happen here; all field
//! quoting, escaping, and line termination are delegated to the csv crate.

use crate::columns::{discover_columns, ColumnMode};
use crate::error::RecordsToCsvError;
use crate::record::{json_kind, Record};
use crate::value::{Value, ValueCasts};

/// Options for a single conversion call.
///
/// # Example
///
/// ```
/// use records_to_csv::RenderOptions;
///
/// let options = RenderOptions::new()
///     .with_header(false)
///     .with_delimiter(b';');
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit the column list as the first output row. Default: true.
    pub header: bool,
    /// Discover columns from all records instead of only the first.
    /// Default: false.
    pub all_columns: bool,
    /// Field delimiter. Default: comma.
    pub delimiter: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            header: true,
            all_columns: false,
            delimiter: b',',
        }
    }
}

impl RenderOptions {
    /// Creates the default options: header on, first-record column
    /// discovery, comma delimiter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the column list is emitted as the first row.
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Sets the column discovery mode.
    #[must_use]
    pub fn with_all_columns(mut self, all_columns: bool) -> Self {
        self.all_columns = all_columns;
        self
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub(crate) fn column_mode(&self) -> ColumnMode {
        if self.all_columns {
            ColumnMode::AllRecords
        } else {
            ColumnMode::FirstRecord
        }
    }
}

/// Converts an ordered collection of records into CSV text.
///
/// The record collection is fixed at construction time and never mutated;
/// re-rendering the same converter with different options is supported and
/// deterministic.
///
/// # Example
///
/// ```
/// use records_to_csv::{Record, RecordsToCsv, RenderOptions};
///
/// let converter = RecordsToCsv::new([
///     Record::new().with("code", "HK").with("name", "Hong Kong"),
///     Record::new().with("code", "KLN").with("name", "Kowloon"),
/// ]);
/// let csv = converter.to_csv_string(&RenderOptions::new()).unwrap();
/// assert_eq!(csv, "code,name\nHK,Hong Kong\nKLN,Kowloon\n");
/// ```
pub struct RecordsToCsv {
    records: Vec<Record>,
    casts: ValueCasts,
}

impl RecordsToCsv {
    /// Creates a converter from typed records.
    pub fn new(records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            records: records.into_iter().collect(),
            casts: ValueCasts::new(),
        }
    }

    /// Creates a converter from a JSON value, which must be an array of
    /// objects.
    ///
    /// An empty array is valid. Any other shape is rejected with
    /// [`RecordsToCsvError::InvalidInput`] before a converter exists.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, RecordsToCsvError> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            other => {
                return Err(RecordsToCsvError::InvalidInput(format!(
                    "the input to records-to-csv must be an array of objects, got JSON {}",
                    json_kind(other)
                )))
            }
        };
        let records = items
            .iter()
            .map(|item| {
                Record::from_json(item).map_err(|_| {
                    RecordsToCsvError::InvalidInput(format!(
                        "the array must contain objects, not other data types (got JSON {})",
                        json_kind(item)
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(records))
    }

    /// Parses JSON text and delegates to [`RecordsToCsv::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self, RecordsToCsvError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// Installs per-kind cast hooks used when values become CSV fields.
    #[must_use]
    pub fn with_casts(mut self, casts: ValueCasts) -> Self {
        self.casts = casts;
        self
    }

    /// The records this converter was built from.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Renders the records as CSV text.
    ///
    /// An empty record collection renders as the empty string for every
    /// option combination, header included. Otherwise the output carries one
    /// line per row, each terminated with `\n` (the last row included);
    /// fields containing the delimiter, a double quote, or a line break are
    /// wrapped in double quotes with embedded quotes doubled.
    ///
    /// Records missing a discovered column contribute an empty field at that
    /// position; fields not in the column list are dropped.
    pub fn to_csv_string(&self, options: &RenderOptions) -> Result<String, RecordsToCsvError> {
        if self.records.is_empty() {
            return Ok(String::new());
        }

        let columns = discover_columns(&self.records, options.column_mode());
        if columns.is_empty() {
            // First record carries no fields: there is no column to project.
            return Ok(String::new());
        }

        let mut buffer = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(options.delimiter)
                .from_writer(&mut buffer);

            if options.header {
                writer.write_record(&columns)?;
            }

            for record in &self.records {
                let mut row = Vec::with_capacity(columns.len());
                for column in &columns {
                    let field = record
                        .get(column)
                        .unwrap_or(&Value::Null)
                        .to_field(&self.casts)?;
                    row.push(field);
                }
                writer.write_record(&row)?;
            }

            writer.flush()?;
        }

        Ok(String::from_utf8(buffer).expect("CSV output of string fields is valid UTF-8"))
    }
}

impl std::fmt::Debug for RecordsToCsv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordsToCsv")
            .field("records", &self.records.len())
            .field("casts", &self.casts)
            .finish()
    }
}
