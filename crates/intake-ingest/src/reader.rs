//! Size-checked reading, decoding, and tokenizing of upload files.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use encoding_rs::Encoding;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use intake_model::IngestConfig;

use crate::error::{IngestError, Result};

/// A fully tokenized upload file.
#[derive(Debug, Clone)]
pub struct CsvFile {
    pub path: PathBuf,
    /// Records in file order; blank lines are not records.
    pub records: Vec<Vec<String>>,
    /// Hex SHA-256 of the raw file bytes.
    pub sha256: String,
    /// True when malformed byte sequences were replaced during decoding.
    pub had_replacements: bool,
}

/// Check file size against a limit, returning the size.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;
    let size = metadata.len();
    if size > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }
    Ok(size)
}

/// Reads raw bytes after the size check.
pub fn read_bytes(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    check_file_size(path, max_size)?;
    std::fs::read(path).map_err(|e| IngestError::from_io(path, e))
}

/// Decodes bytes under an encoding label, replacing malformed sequences
/// with U+FFFD. Returns the text and whether any replacement happened.
pub fn decode_bytes(bytes: &[u8], label: &str) -> Result<(String, bool)> {
    let encoding =
        Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| IngestError::UnknownEncoding {
            label: label.to_string(),
        })?;
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    Ok((text.into_owned(), had_errors))
}

/// Hex SHA-256 digest of a byte slice.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Tokenizes decoded text into records, keeping at most `limit` of them.
///
/// Field counts may vary between records and stray quotes are kept
/// literally.
pub fn parse_records(text: &str, path: &Path, limit: Option<usize>) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        if limit.is_some_and(|limit| records.len() >= limit) {
            break;
        }
        let record = result.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}

fn read_decoded(path: &Path, config: &IngestConfig) -> Result<(Vec<u8>, String, bool)> {
    let bytes = read_bytes(path, config.max_file_size)?;
    let (text, had_replacements) = decode_bytes(&bytes, &config.encoding)?;
    if had_replacements {
        warn!(
            path = %path.display(),
            encoding = %config.encoding,
            "Replaced malformed byte sequences with U+FFFD"
        );
    }
    Ok((bytes, text, had_replacements))
}

/// Reads, decodes, and tokenizes an upload file.
pub fn read_csv_file(path: &Path, config: &IngestConfig) -> Result<CsvFile> {
    let (bytes, text, had_replacements) = read_decoded(path, config)?;
    let records = parse_records(&text, path, None)?;
    let sha256 = sha256_hex(&bytes);

    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        records = records.len(),
        "Read CSV file"
    );

    Ok(CsvFile {
        path: path.to_path_buf(),
        records,
        sha256,
        had_replacements,
    })
}

/// Reads only the first `limit` records of a file.
pub fn read_leading_records(
    path: &Path,
    config: &IngestConfig,
    limit: usize,
) -> Result<Vec<Vec<String>>> {
    let (_, text, _) = read_decoded(path, config)?;
    parse_records(&text, path, Some(limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_check_file_size() {
        let file = create_temp_csv(b"a,b\n1,2\n");
        assert_eq!(check_file_size(file.path(), 100).unwrap(), 8);

        let result = check_file_size(file.path(), 4);
        assert!(matches!(
            result,
            Err(IngestError::FileTooLarge {
                size: 8,
                max_size: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = check_file_size(Path::new("/nonexistent/upload.csv"), 100);
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_decode_replaces_invalid_utf8() {
        let (text, replaced) = decode_bytes(b"Caf\xe9,1", "utf-8").unwrap();
        assert_eq!(text, "Caf\u{fffd},1");
        assert!(replaced);
    }

    #[test]
    fn test_decode_strips_bom() {
        let (text, replaced) = decode_bytes(b"\xef\xbb\xbfName,Amount", "utf-8").unwrap();
        assert_eq!(text, "Name,Amount");
        assert!(!replaced);
    }

    #[test]
    fn test_decode_legacy_encoding() {
        let (text, replaced) = decode_bytes(b"Caf\xe9", "windows-1252").unwrap();
        assert_eq!(text, "Café");
        assert!(!replaced);
    }

    #[test]
    fn test_unknown_encoding() {
        let result = decode_bytes(b"x", "klingon");
        assert!(matches!(result, Err(IngestError::UnknownEncoding { .. })));
    }

    #[test]
    fn test_parse_records_ragged_and_blank_lines() {
        let text = "Report,Q1\n\nName,Amount,Extra\nAcme\n";
        let records = parse_records(text, Path::new("t.csv"), None).unwrap();
        assert_eq!(
            records,
            vec![
                vec!["Report", "Q1"],
                vec!["Name", "Amount", "Extra"],
                vec!["Acme"],
            ]
        );
    }

    #[test]
    fn test_parse_records_limit() {
        let text = "a\nb\nc\n";
        let records = parse_records(text, Path::new("t.csv"), Some(2)).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_records_stray_quotes() {
        let text = "5\" pipe,\"quoted, value\"\n";
        let records = parse_records(text, Path::new("t.csv"), None).unwrap();
        assert_eq!(records, vec![vec!["5\" pipe", "quoted, value"]]);
    }

    #[test]
    fn test_read_csv_file_hashes_raw_bytes() {
        let file = create_temp_csv(b"a,b\n1,2\n");
        let csv = read_csv_file(file.path(), &IngestConfig::default()).unwrap();
        assert_eq!(csv.records.len(), 2);
        assert_eq!(csv.sha256, sha256_hex(b"a,b\n1,2\n"));
        assert_eq!(csv.sha256.len(), 64);
        assert!(!csv.had_replacements);
    }
}
