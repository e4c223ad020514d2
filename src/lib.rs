//! records-to-csv Library
//!
//! Converts an ordered collection of key-value records into CSV text, and
//! optionally writes or appends it to a file. Column discovery, header
//! emission, byte-order-mark handling, and append-vs-overwrite semantics
//! are configurable per call; all field quoting and escaping follow
//! RFC 4180 via the csv crate.
//!
//! # Example
//!
//! ```
//! use records_to_csv::{Record, RecordsToCsv, RenderOptions};
//!
//! let converter = RecordsToCsv::new([
//!     Record::new().with("code", "HK").with("name", "Hong Kong"),
//!     Record::new().with("code", "KLN").with("name", "Kowloon"),
//! ]);
//! let csv = converter.to_csv_string(&RenderOptions::new()).unwrap();
//! assert_eq!(csv, "code,name\nHK,Hong Kong\nKLN,Kowloon\n");
//! ```

pub mod columns;
pub mod converter;
pub mod error;
pub mod persist;
pub mod record;
pub mod value;

pub use columns::{discover_columns, ColumnMode};
pub use converter::{RecordsToCsv, RenderOptions};
pub use error::RecordsToCsvError;
pub use persist::DiskOptions;
pub use record::Record;
pub use value::{format_date, Value, ValueCasts};
