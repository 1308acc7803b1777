use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How the fields of one row are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Any run of spaces or tabs.
    Whitespace,
    /// A single byte such as `b','` or `b'\t'`.
    Byte(u8),
}

/// Layout of one data row of a text table.
///
/// `fields` is the minimum number of fields a row must carry; `columns`
/// lists, in output order, which (0-based) fields are kept. Everything else
/// on the row is read past but not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFormat {
    pub delimiter: Delimiter,
    pub fields: usize,
    pub columns: Vec<usize>,
}

impl RowFormat {
    pub fn new(delimiter: Delimiter, fields: usize, columns: Vec<usize>) -> Self {
        RowFormat {
            delimiter,
            fields,
            columns,
        }
    }

    /// `time value error`, whitespace separated.
    pub fn wg() -> Self {
        Self::new(Delimiter::Whitespace, 3, vec![0, 1, 2])
    }

    /// `index time value error limit`, whitespace separated; the index and
    /// detection limit are ignored.
    pub fn wg2() -> Self {
        Self::new(Delimiter::Whitespace, 5, vec![1, 2, 3])
    }

    /// `time value`, whitespace separated.
    pub fn mc() -> Self {
        Self::new(Delimiter::Whitespace, 2, vec![0, 1])
    }

    /// `time,value`.
    pub fn csv() -> Self {
        Self::new(Delimiter::Byte(b','), 2, vec![0, 1])
    }

    /// Check that the format selects exactly `arity` existing fields.
    pub(crate) fn validate(&self, arity: usize) -> Result<()> {
        if self.columns.len() != arity {
            return Err(Error::InvalidArgument(format!(
                "Row format selects {} columns but {arity} were requested",
                self.columns.len()
            )));
        }
        if let Some(&bad) = self.columns.iter().find(|&&c| c >= self.fields) {
            return Err(Error::InvalidArgument(format!(
                "Row format selects field {bad} of a {}-field row",
                self.fields
            )));
        }
        if matches!(self.delimiter, Delimiter::Byte(b'#' | b'\n' | b'\r')) {
            return Err(Error::InvalidArgument(
                "Row delimiter cannot be '#' or a line terminator".to_string(),
            ));
        }
        Ok(())
    }
}
