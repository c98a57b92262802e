//! Header discovery against files on disk.

use std::io::Write;

use intake_ingest::{HeaderIndex, IngestError, locate_header_row, read_csv_file};
use intake_model::IngestConfig;
use tempfile::NamedTempFile;

const EXPECTED: [&str; 3] = ["Name", "Amount", "Date"];

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write");
    file
}

#[test]
fn header_after_metadata_preamble() {
    let file = write_csv(
        "Sales Order Report\n\
         Generated: 2024-01-15\n\
         Subsidiary: US\n\
         \n\
         Name,Amount,Date\n\
         Acme,100.00,2024-01-15\n",
    );
    let index = locate_header_row(file.path(), &EXPECTED, &IngestConfig::default()).unwrap();
    assert_eq!(index, 3);
}

#[test]
fn header_matches_case_and_excel_formatting() {
    let file = write_csv("\"=\"\"Name\"\"\", AMOUNT ,date\nAcme,1,2024-01-15\n");
    let index = locate_header_row(file.path(), &EXPECTED, &IngestConfig::default()).unwrap();
    assert_eq!(index, 0);

    let csv = read_csv_file(file.path(), &IngestConfig::default()).unwrap();
    let header = HeaderIndex::from_row(&csv.records[index]);
    assert_eq!(header.position("Name"), Some(0));
    assert_eq!(header.position("Date"), Some(2));
}

#[test]
fn header_outside_window_is_file_level_error() {
    let mut content = String::new();
    for i in 0..20 {
        content.push_str(&format!("preamble line {i}\n"));
    }
    content.push_str("Name,Amount,Date\n");
    let file = write_csv(&content);

    let result = locate_header_row(file.path(), &EXPECTED, &IngestConfig::default());
    assert!(matches!(
        result,
        Err(IngestError::HeaderNotFound { searched: 20, .. })
    ));

    let wider = IngestConfig {
        header_search_rows: 21,
        ..IngestConfig::default()
    };
    assert_eq!(
        locate_header_row(file.path(), &EXPECTED, &wider).unwrap(),
        20
    );
}

#[test]
fn partial_header_not_found() {
    let file = write_csv("Name,Amount\nAcme,1\n");
    let result = locate_header_row(file.path(), &EXPECTED, &IngestConfig::default());
    assert!(matches!(result, Err(IngestError::HeaderNotFound { .. })));
}

#[test]
fn empty_file_has_no_header() {
    let file = write_csv("");
    let result = locate_header_row(file.path(), &EXPECTED, &IngestConfig::default());
    assert!(matches!(
        result,
        Err(IngestError::HeaderNotFound { searched: 0, .. })
    ));
}

#[test]
fn oversized_file_rejected_before_reading() {
    let file = write_csv("Name,Amount,Date\n");
    let tiny = IngestConfig {
        max_file_size: 4,
        ..IngestConfig::default()
    };
    let result = locate_header_row(file.path(), &EXPECTED, &tiny);
    assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
}
