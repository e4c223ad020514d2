//! Disk persistence for converted CSV text.
//!
//! Decides header inclusion from the target file's state and the caller's
//! append intent, optionally prepends a UTF-8 byte-order-mark, and performs
//! exactly one write or append call per invocation.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::converter::{RecordsToCsv, RenderOptions};
use crate::error::RecordsToCsvError;

/// The UTF-8 byte-order-mark as a single leading code point (EF BB BF on
/// disk). Spreadsheet applications use it to detect Unicode content.
const BOM: char = '\u{FEFF}';

/// Options for writing CSV text to a file.
///
/// # Example
///
/// ```
/// use records_to_csv::DiskOptions;
///
/// let options = DiskOptions::new().with_append(true).with_bom(true);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskOptions {
    /// Append to the file instead of overwriting it. Default: false.
    pub append: bool,
    /// Prepend a byte-order-mark on the first write to an absent or empty
    /// file. Default: false.
    pub bom: bool,
    /// Discover columns from all records instead of only the first.
    /// Default: false.
    pub all_columns: bool,
}

impl DiskOptions {
    /// Creates the default options: overwrite, no BOM, first-record column
    /// discovery.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets append-instead-of-overwrite.
    #[must_use]
    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Sets byte-order-mark emission.
    #[must_use]
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    /// Sets the column discovery mode.
    #[must_use]
    pub fn with_all_columns(mut self, all_columns: bool) -> Self {
        self.all_columns = all_columns;
        self
    }
}

impl RecordsToCsv {
    /// Renders the records and writes or appends the CSV text to a file.
    ///
    /// The header row is included whenever the target file is absent or
    /// empty, and also on every overwrite; it is suppressed only when
    /// appending to a file that already has content. With `bom` set, a
    /// byte-order-mark is prepended on the first write to an absent or empty
    /// file and never again on subsequent appends, so repeated appends
    /// cannot accumulate BOMs.
    ///
    /// Returns the exact text that was written, including the BOM when one
    /// was added.
    ///
    /// The file probe and the subsequent write are two separate system
    /// calls; concurrent writers to the same path race at the file-system
    /// level, and no locking is provided. A failed write may leave a
    /// partially written file behind.
    ///
    /// # Errors
    ///
    /// [`RecordsToCsvError::EmptyPath`] when `path` is empty, before any
    /// file-system access; otherwise I/O errors from the probe or the write
    /// propagate verbatim.
    pub fn to_disk(
        &self,
        path: impl AsRef<Path>,
        options: &DiskOptions,
    ) -> Result<String, RecordsToCsvError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(RecordsToCsvError::EmptyPath);
        }

        let absent_or_empty = match fs::metadata(path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        // Header goes in unless we are appending to a file that already has
        // content.
        let add_header = absent_or_empty || !options.append;

        let render = RenderOptions::new()
            .with_header(add_header)
            .with_all_columns(options.all_columns);
        let mut text = self.to_csv_string(&render)?;

        if options.bom && absent_or_empty {
            text.insert(0, BOM);
        }

        if options.append {
            let mut file = OpenOptions::new().append(true).create(true).open(path)?;
            file.write_all(text.as_bytes())?;
        } else {
            fs::write(path, &text)?;
        }

        Ok(text)
    }
}
