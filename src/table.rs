//! Parsed table produced by the CSV parser

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column name to column values, in header order
pub type ColumnMap = IndexMap<String, Vec<String>>;

/// Result of parsing CSV text
///
/// `rows` holds every record in source order, including the header row when
/// headers are enabled. Rows may be ragged; `column_count` is the widest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParsedTable {
    rows: Vec<Vec<String>>,
    column_count: usize,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    headers: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    data_by_column: Option<ColumnMap>,
}

impl ParsedTable {
    /// Build a table without header indexing
    pub fn new(rows: Vec<Vec<String>>, column_count: usize) -> Self {
        ParsedTable {
            rows,
            column_count,
            headers: None,
            data_by_column: None,
        }
    }

    /// Build a table treating `rows[0]` as column names
    ///
    /// Each header collects the value at its position from every later row,
    /// padding short rows with `""`. Duplicate header names keep the values
    /// of the last column with that name.
    pub fn with_headers(rows: Vec<Vec<String>>, column_count: usize) -> Self {
        let headers = rows.first().cloned().unwrap_or_default();
        let data_rows = rows.get(1..).unwrap_or_default();

        let mut data_by_column = ColumnMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            let values = data_rows
                .iter()
                .map(|row| row.get(i).cloned().unwrap_or_default())
                .collect();
            data_by_column.insert(name.clone(), values);
        }

        ParsedTable {
            rows,
            column_count,
            headers: Some(headers),
            data_by_column: Some(data_by_column),
        }
    }

    /// All rows in source order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Widest row seen
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Column names, present when headers were requested
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// Values grouped by column name, present when headers were requested
    pub fn data_by_column(&self) -> Option<&ColumnMap> {
        self.data_by_column.as_ref()
    }

    /// Values of one named column
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.data_by_column
            .as_ref()
            .and_then(|map| map.get(name))
            .map(Vec::as_slice)
    }

    /// Rows holding data, skipping the header row when there is one
    pub fn data_rows(&self) -> &[Vec<String>] {
        if self.headers.is_some() {
            self.rows.get(1..).unwrap_or_default()
        } else {
            &self.rows
        }
    }

    /// Number of rows, header included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no rows were parsed
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Take ownership of the rows
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}
