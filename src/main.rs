//! records-to-csv - Convert a JSON array of objects to CSV
//!
//! Reads a JSON file (or stdin) containing an array of objects and renders
//! it as CSV, either to stdout or to a file with append/BOM handling.
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Configuration or input error |
//! | 3 | File I/O error |

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use records_to_csv::{DiskOptions, RecordsToCsv, RecordsToCsvError, RenderOptions};

/// Exit code for success
const EXIT_SUCCESS: u8 = 0;
/// Exit code for configuration or input errors
const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for file I/O errors
const EXIT_IO_ERROR: u8 = 3;

/// Command-line arguments.
///
/// Use the `validate()` method after parsing to ensure argument
/// combinations are valid.
#[derive(Parser, Debug)]
#[command(name = "records-to-csv")]
#[command(about = "Convert a JSON array of objects to CSV")]
#[command(version)]
struct Args {
    /// Input JSON file containing an array of objects ("-" for stdin)
    input: String,

    /// Output CSV file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Append to the output file instead of overwriting it
    #[arg(long, default_value = "false")]
    append: bool,

    /// Prepend a UTF-8 byte-order-mark on the first write
    #[arg(long, default_value = "false")]
    bom: bool,

    /// Discover columns from all records instead of only the first
    #[arg(long, default_value = "false")]
    all_columns: bool,

    /// Omit the header row (stdout output only)
    #[arg(long, default_value = "false")]
    no_header: bool,

    /// Field delimiter (stdout output only)
    #[arg(long, default_value = ",")]
    delimiter: char,
}

impl Args {
    /// Validates argument combinations.
    fn validate(&self) -> Result<(), RecordsToCsvError> {
        if self.output.is_none() && (self.append || self.bom) {
            return Err(RecordsToCsvError::InvalidInput(
                "--append and --bom require --output".to_string(),
            ));
        }
        if self.output.is_some() && self.no_header {
            return Err(RecordsToCsvError::InvalidInput(
                "--no-header only applies to stdout output; file output decides \
                 the header from the file state"
                    .to_string(),
            ));
        }
        if self.output.is_some() && self.delimiter != ',' {
            return Err(RecordsToCsvError::InvalidInput(
                "--delimiter only applies to stdout output".to_string(),
            ));
        }
        if !self.delimiter.is_ascii() {
            return Err(RecordsToCsvError::InvalidInput(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: Configuration error: {}", e);
        eprintln!("  Hint: Use --help for usage information");
        return ExitCode::from(EXIT_CONFIG_ERROR);
    }

    match run(&args) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => ExitCode::from(error_to_exit_code(&e)),
    }
}

/// Main application logic: read input, convert, write output.
fn run(args: &Args) -> Result<(), RecordsToCsvError> {
    let text = read_input(&args.input).map_err(|e| {
        eprintln!("Error: Failed to read input {}: {}", args.input, e);
        e
    })?;

    let converter = RecordsToCsv::from_json_str(&text).map_err(|e| {
        eprintln!("Error: {}", e);
        e
    })?;

    match &args.output {
        Some(path) => {
            let options = DiskOptions::new()
                .with_append(args.append)
                .with_bom(args.bom)
                .with_all_columns(args.all_columns);
            let written = converter.to_disk(path, &options).map_err(|e| {
                eprintln!("Error: Failed to write output file {:?}: {}", path, e);
                e
            })?;
            eprintln!(
                "Conversion complete. {} records, {} bytes written to {}.",
                converter.records().len(),
                written.len(),
                path.display()
            );
        }
        None => {
            let options = RenderOptions::new()
                .with_header(!args.no_header)
                .with_all_columns(args.all_columns)
                .with_delimiter(args.delimiter as u8);
            let csv = converter.to_csv_string(&options)?;
            print!("{}", csv);
        }
    }

    Ok(())
}

/// Reads the input file, or stdin when the path is "-".
fn read_input(input: &str) -> Result<String, RecordsToCsvError> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

/// Convert an error to the appropriate exit code.
fn error_to_exit_code(error: &RecordsToCsvError) -> u8 {
    match error {
        RecordsToCsvError::InvalidInput(_)
        | RecordsToCsvError::EmptyPath
        | RecordsToCsvError::Json(_)
        | RecordsToCsvError::Cast(_) => EXIT_CONFIG_ERROR,
        RecordsToCsvError::Io(_) | RecordsToCsvError::Csv(_) => EXIT_IO_ERROR,
    }
}
