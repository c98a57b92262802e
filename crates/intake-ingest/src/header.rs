//! Header discovery and column indexing.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use intake_model::IngestConfig;

use crate::error::{IngestError, Result};
use crate::reader::read_leading_records;
use crate::sanitize::{clean_header, headers_equal};

/// Normalized column name to zero-based column position.
///
/// Built once per file from the header record and shared read-only by every
/// row of that file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Indexes a header row. When two cells normalize to the same name the
    /// later one wins.
    pub fn from_row<S: AsRef<str>>(header: &[S]) -> Self {
        let positions = header
            .iter()
            .enumerate()
            .map(|(position, cell)| (clean_header(cell.as_ref()), position))
            .collect();
        Self { positions }
    }

    /// Position of a column, matched under the same normalization.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&clean_header(name)).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Returns the index of the first of the leading `max_rows` records that
/// matches `expected`.
pub fn find_header_row<R, S>(records: &[R], expected: &[S], max_rows: usize) -> Option<usize>
where
    R: AsRef<[String]>,
    S: AsRef<str>,
{
    records
        .iter()
        .take(max_rows)
        .position(|record| headers_equal(record.as_ref(), expected))
}

/// Finds the header row directly from a file.
///
/// Only the first `header_search_rows` records are tokenized.
pub fn locate_header_row<S: AsRef<str>>(
    path: &Path,
    expected: &[S],
    config: &IngestConfig,
) -> Result<usize> {
    let records = read_leading_records(path, config, config.header_search_rows)?;
    let index = find_header_row(&records, expected, config.header_search_rows).ok_or_else(
        || IngestError::HeaderNotFound {
            path: path.to_path_buf(),
            searched: records.len(),
        },
    )?;
    debug!(path = %path.display(), header_row = index, "Located header row");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn test_index_normalizes_names() {
        let index = HeaderIndex::from_row(&["  Customer ID ", "=\"Amount\"", "netsuite:Memo"]);
        assert_eq!(index.position("customer id"), Some(0));
        assert_eq!(index.position("AMOUNT"), Some(1));
        assert_eq!(index.position("Memo"), Some(2));
        assert_eq!(index.position("Missing"), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_index_later_duplicate_wins() {
        let index = HeaderIndex::from_row(&["Date", "Amount", "date"]);
        assert_eq!(index.position("Date"), Some(2));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_find_header_row_positions() {
        let expected = ["Name", "Amount"];
        let at_zero = rows(&[&["Name", "Amount"], &["a", "1"]]);
        assert_eq!(find_header_row(&at_zero, &expected, 20), Some(0));

        let at_two = rows(&[&["Report"], &["Generated", "today"], &["name", "AMOUNT"]]);
        assert_eq!(find_header_row(&at_two, &expected, 20), Some(2));
    }

    #[test]
    fn test_find_header_row_rejects_partial() {
        let expected = ["Name", "Amount"];
        let partial = rows(&[&["Name"], &["Name", "Amount", "Extra"]]);
        assert_eq!(find_header_row(&partial, &expected, 20), None);
        let empty: Vec<Vec<String>> = Vec::new();
        assert_eq!(find_header_row(&empty, &expected, 20), None);
    }

    #[test]
    fn test_find_header_row_respects_window() {
        let expected = ["Name"];
        let mut records: Vec<Vec<String>> = (0..20).map(|i| vec![format!("filler {i}")]).collect();
        records.push(vec!["Name".to_string()]);
        assert_eq!(find_header_row(&records, &expected, 20), None);
        assert_eq!(find_header_row(&records, &expected, 21), Some(20));
    }
}
