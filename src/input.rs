//! Shared CSV reader setup for the flat input files.
//!
//! All three inputs are comma-separated, headerless, and carry no quoting
//! or escaping. Blank lines are skipped by the reader.

use crate::error::Result;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;

/// Reads every record of a flat file into memory.
///
/// Record lengths are not checked here; each parser enforces its own
/// field count.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<StringRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        records.push(result?);
    }
    Ok(records)
}

/// 1-based line number a record started on.
pub fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Field at `index`, or an empty string when the record is too short.
pub fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_headerless_records_with_line_numbers() {
        let records = read_records(Cursor::new("1,a\n\n2, b ,c\n")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(line_of(&records[0]), 1);
        assert_eq!(field(&records[1], 1), "b");
        assert_eq!(field(&records[1], 5), "");
    }

    #[test]
    fn test_quotes_are_plain_characters() {
        let records = read_records(Cursor::new("1,\"x,y\"\n")).unwrap();
        assert_eq!(records[0].len(), 3);
        assert_eq!(field(&records[0], 1), "\"x");
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = read_records(Cursor::new("1,a\r\n2,b\r\n")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(field(&records[1], 1), "b");
    }
}
