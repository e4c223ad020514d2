//! Property-based tests for the header/BOM/append interaction on disk.

use proptest::prelude::*;
use tempfile::tempdir;

use records_to_csv::{DiskOptions, Record, RecordsToCsv};

fn small_records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        ("[a-z]{1,6}", "[a-zA-Z0-9 ]{0,12}").prop_map(|(k, v)| Record::new().with(k, v)),
        1..4,
    )
}

proptest! {
    // Disk tests are slower than in-memory rendering; keep the case count
    // modest.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_repeated_appends_write_header_exactly_once(
        records in small_records_strategy(),
        appends in 1usize..4,
        bom in any::<bool>(),
    ) {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("out.csv");
        let converter = RecordsToCsv::new(records.clone());
        let options = DiskOptions::new().with_append(true).with_bom(bom);

        for _ in 0..appends {
            converter.to_disk(&file_path, &options).unwrap();
        }

        let content = std::fs::read_to_string(&file_path).unwrap();
        let header_line = records[0].keys().collect::<Vec<_>>().join(",");
        let starts_with_header = content
            .trim_start_matches('\u{FEFF}')
            .starts_with(&format!("{}\n", header_line));
        prop_assert!(starts_with_header);
        prop_assert_eq!(content.matches('\u{FEFF}').count(), usize::from(bom));

        // One header row, then one row per record per append
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.trim_start_matches('\u{FEFF}').as_bytes());
        let row_count = reader.records().count();
        prop_assert_eq!(row_count, 1 + records.len() * appends);
    }

    #[test]
    fn prop_overwrite_is_idempotent(records in small_records_strategy(), times in 1usize..4) {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("out.csv");
        let converter = RecordsToCsv::new(records);

        let mut last = None;
        for _ in 0..times {
            converter.to_disk(&file_path, &DiskOptions::new()).unwrap();
            let content = std::fs::read(&file_path).unwrap();
            if let Some(previous) = last.replace(content.clone()) {
                prop_assert_eq!(previous, content);
            }
        }
    }

    #[test]
    fn prop_returned_text_is_what_was_appended(records in small_records_strategy()) {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("out.csv");
        let converter = RecordsToCsv::new(records);
        let options = DiskOptions::new().with_append(true);

        let first = converter.to_disk(&file_path, &options).unwrap();
        let after_first = std::fs::read(&file_path).unwrap();
        prop_assert_eq!(first.as_bytes(), &after_first[..]);

        let second = converter.to_disk(&file_path, &options).unwrap();
        let after_second = std::fs::read(&file_path).unwrap();
        prop_assert_eq!(
            &after_second[after_first.len()..],
            second.as_bytes()
        );
    }
}
