//! Positional records and datasets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// One row of a catalog: an ordered sequence of string fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Vec<String>);

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Returns the field at `index`, or `ColumnOutOfRange` when the record is
    /// shorter than that.
    pub fn field(&self, index: usize) -> Result<&str> {
        self.get(index).ok_or(DataError::ColumnOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            width: self.len(),
        })
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn into_fields(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl From<Vec<&str>> for Record {
    fn from(fields: Vec<&str>) -> Self {
        Self(fields.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Record {
    fn from(fields: [&str; N]) -> Self {
        Self(fields.iter().map(|field| (*field).to_string()).collect())
    }
}

impl FromIterator<String> for Record {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// How a profile addresses a column.
///
/// Non-negative indices count from the first field, negative indices from the
/// last header field (`-1` is the last column), and names are matched
/// exactly against the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Index(i64),
    Name(String),
}

impl ColumnRef {
    /// Resolve to a concrete field index against `header`.
    pub fn resolve(&self, header: &Record) -> Result<usize> {
        let width = header.len();
        match self {
            Self::Index(index) => {
                let absolute = if *index < 0 {
                    i64::try_from(width).unwrap_or(i64::MAX) + index
                } else {
                    *index
                };
                usize::try_from(absolute)
                    .ok()
                    .filter(|resolved| *resolved < width)
                    .ok_or(DataError::ColumnOutOfRange {
                        index: *index,
                        width,
                    })
            }
            Self::Name(name) => header
                .fields()
                .iter()
                .position(|field| field == name)
                .ok_or_else(|| DataError::UnknownColumn { name: name.clone() }),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for ColumnRef {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// A header record plus the data records that share its schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    header: Record,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(header: Record, records: Vec<Record>) -> Self {
        Self { header, records }
    }

    /// Build a dataset from raw rows, treating the first row as the header.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: Into<Record>,
    {
        let mut rows = rows.into_iter().map(Into::into);
        let header = rows.next().unwrap_or_default();
        Self {
            header,
            records: rows.collect(),
        }
    }

    pub fn header(&self) -> &Record {
        &self.header
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of data records (the header is not counted).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Field count of the header.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    pub fn resolve(&self, column: &ColumnRef) -> Result<usize> {
        column.resolve(&self.header)
    }

    /// Records in `start..end`, clamped to the dataset bounds.
    pub fn slice(&self, start: usize, end: usize) -> &[Record] {
        let end = end.min(self.records.len());
        let start = start.min(end);
        &self.records[start..end]
    }

    /// A dataset with the same header and a new set of records.
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        Self {
            header: self.header.clone(),
            records,
        }
    }

    pub fn into_parts(self) -> (Record, Vec<Record>) {
        (self.header, self.records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
