//! CSV-backed quote index with fallback resolution.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::record::QuoteRecord;
use crate::time_key::TimeKey;

/// Errors raised while building the index. All of them are fatal at
/// startup; there is no partial-index recovery.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The quote table could not be opened or read.
    #[error("failed to read quote table")]
    Io(#[from] std::io::Error),
    /// The quote table is not parseable as CSV at all.
    #[error("failed to parse quote table")]
    Csv(#[from] csv::Error),
    /// The table parsed but produced zero usable rows.
    #[error("no quotes loaded from table")]
    Empty,
}

/// Immutable mapping from [`TimeKey`] to [`QuoteRecord`].
///
/// Built once from a five-column CSV table (time-key, emphasis, body,
/// title, author). The first row is treated as a header and skipped.
/// Rows with fewer than five fields are skipped; duplicate keys keep the
/// last occurrence.
#[derive(Debug)]
pub struct QuoteIndex {
    entries: HashMap<String, QuoteRecord>,
}

impl QuoteIndex {
    /// Load the index from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuoteError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading quote table");
        Self::from_reader(File::open(path)?)
    }

    /// Load the index from any CSV byte stream.
    pub fn from_reader(reader: impl Read) -> Result<Self, QuoteError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut entries = HashMap::new();
        let mut skipped = 0usize;
        for row in csv_reader.records() {
            let row = row?;
            if row.len() < 5 {
                skipped = skipped.saturating_add(1);
                continue;
            }
            let field = |i: usize| row.get(i).unwrap_or_default().trim().to_string();
            // Last occurrence of a key wins: plain insert overwrites.
            entries.insert(
                field(0),
                QuoteRecord {
                    emphasis: field(1),
                    body: field(2),
                    title: field(3),
                    author: field(4),
                },
            );
        }

        if skipped > 0 {
            tracing::debug!(skipped, "skipped malformed quote rows");
        }
        if entries.is_empty() {
            return Err(QuoteError::Empty);
        }
        tracing::info!(count = entries.len(), "quote index built");
        Ok(Self { entries })
    }

    /// Resolve a key to its record.
    ///
    /// Exact match on `key` first; when absent, exact match on the
    /// reserved fallback key; `None` when neither exists. An unmapped
    /// minute is not an error — the caller skips the tick.
    pub fn resolve(&self, key: &TimeKey) -> Option<&QuoteRecord> {
        self.entries
            .get(key.as_str())
            .or_else(|| self.entries.get(TimeKey::fallback().as_str()))
    }

    /// Number of distinct keys in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the index holds no entries (never observable after a
    /// successful load).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
time,to_bold,quote,book,author
9:00,nine,It was nine in the morning.,Some Novel,A. Writer
0:00 midnight,midnight,The clock struck midnight.,Night Book,N. Owl
";

    fn index(table: &str) -> QuoteIndex {
        QuoteIndex::from_reader(table.as_bytes()).unwrap()
    }

    #[test]
    fn test_exact_key_returns_stored_record() {
        let idx = index(TABLE);
        let rec = idx.resolve(&TimeKey::new("9:00")).unwrap();
        assert_eq!(rec.emphasis, "nine");
        assert_eq!(rec.body, "It was nine in the morning.");
        assert_eq!(rec.title, "Some Novel");
        assert_eq!(rec.author, "A. Writer");
    }

    #[test]
    fn test_absent_key_falls_back_to_midnight() {
        let idx = index(TABLE);
        let rec = idx.resolve(&TimeKey::new("3:17")).unwrap();
        assert_eq!(rec.title, "Night Book");
    }

    #[test]
    fn test_absent_key_without_fallback_misses() {
        let idx = index("time,to_bold,quote,book,author\n9:00,,Quote.,T,A\n");
        assert!(idx.resolve(&TimeKey::new("3:17")).is_none());
    }

    #[test]
    fn test_header_row_is_not_an_entry() {
        let idx = index(TABLE);
        assert_eq!(idx.len(), 2);
        // Without a fallback entry masking the lookup, the header's key
        // column must truly miss.
        let idx = index("time,to_bold,quote,book,author\n9:00,,Quote.,T,A\n");
        assert!(idx.resolve(&TimeKey::new("time")).is_none());
    }

    #[test]
    fn test_short_rows_skipped() {
        let idx = index("time,to_bold,quote,book,author\nbroken,row\n9:00,,Quote.,T,A\n");
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let idx = index(
            "time,to_bold,quote,book,author\n9:00,,First.,T1,A1\n9:00,,Second.,T2,A2\n",
        );
        assert_eq!(idx.resolve(&TimeKey::new("9:00")).unwrap().title, "T2");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let idx = index("time,to_bold,quote,book,author\n9:00 , bold , Quote. , T , A \n");
        let rec = idx.resolve(&TimeKey::new("9:00")).unwrap();
        assert_eq!(rec.emphasis, "bold");
        assert_eq!(rec.author, "A");
    }

    #[test]
    fn test_quoted_field_with_commas() {
        let idx = index(
            "time,to_bold,quote,book,author\n9:00,,\"One, two, three.\",T,A\n",
        );
        assert_eq!(idx.resolve(&TimeKey::new("9:00")).unwrap().body, "One, two, three.");
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let err = QuoteIndex::from_reader("time,to_bold,quote,book,author\n".as_bytes());
        assert!(matches!(err, Err(QuoteError::Empty)));
    }
}
