//! Column discovery for CSV output.
//!
//! A pure function from a record slice to an ordered, duplicate-free column
//! list. Discovery runs on every conversion so the mode can vary per call;
//! the result is never cached.

use std::collections::BTreeSet;

use crate::record::Record;

/// Column discovery strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnMode {
    /// Columns are the first record's field names in insertion order.
    ///
    /// Fields absent from the first record never appear in the output, even
    /// when later records carry them; those extra fields are silently
    /// dropped. This is the long-standing default and is kept as-is.
    #[default]
    FirstRecord,
    /// Columns are the deduplicated union of all records' field names,
    /// sorted lexicographically for output that does not depend on record
    /// order or per-record field order.
    AllRecords,
}

/// Computes the column list for a record slice under the given mode.
///
/// An empty slice yields an empty column list. The result never contains
/// duplicates.
#[must_use]
pub fn discover_columns(records: &[Record], mode: ColumnMode) -> Vec<String> {
    match mode {
        ColumnMode::FirstRecord => records
            .first()
            .map(|record| record.keys().map(str::to_string).collect())
            .unwrap_or_default(),
        ColumnMode::AllRecords => {
            let mut names = BTreeSet::new();
            for record in records {
                for key in record.keys() {
                    names.insert(key);
                }
            }
            names.into_iter().map(str::to_string).collect()
        }
    }
}
