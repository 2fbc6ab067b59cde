//! Serialization entry points and a writer for any `io::Write` sink

use crate::csv::CsvEncoder;
use crate::error::Result;
use crate::options::Delimiter;
use crate::types::Value;
use std::io::Write;

/// Serialize row-likes into CSV text
///
/// Scalars become one-field rows; nulls and empty lists are skipped without
/// leaving a blank line.
///
/// # Examples
///
/// ```
/// use csvtable::{serialize, Delimiter, Value};
///
/// let rows = vec![Value::from(vec!["a,b", "c"]), Value::Null, Value::from("d")];
/// assert_eq!(serialize(&rows, Delimiter::COMMA), "\"a,b\",c\nd\n");
/// ```
pub fn serialize(rows: &[Value], delimiter: Delimiter) -> String {
    let mut out = String::new();
    CsvEncoder::new(delimiter).encode_rows(rows, &mut out);
    out
}

/// Serialize loosely typed host input
///
/// Anything other than a [`Value::List`] of row-likes yields `""`. A
/// delimiter that is missing or not exactly one character falls back to `,`.
pub fn to_csv(rows: &Value, delimiter: Option<&str>) -> String {
    match rows {
        Value::List(rows) => serialize(rows, Delimiter::from_option(delimiter)),
        _ => String::new(),
    }
}

/// CSV writer streaming encoded rows into a sink
///
/// # Examples
///
/// ```
/// use csvtable::CsvWriter;
///
/// let mut writer = CsvWriter::new(Vec::new());
/// writer.write_row(["Name", "Age"]).unwrap();
/// writer.write_row(["Alice", "30"]).unwrap();
///
/// assert_eq!(writer.row_count(), 2);
/// assert_eq!(writer.into_inner(), b"Name,Age\nAlice,30\n");
/// ```
pub struct CsvWriter<W: Write> {
    sink: W,
    encoder: CsvEncoder,
    buffer: String,
    row_count: u64,
}

impl<W: Write> CsvWriter<W> {
    /// Create a writer with a comma delimiter
    pub fn new(sink: W) -> Self {
        CsvWriter {
            sink,
            encoder: CsvEncoder::new(Delimiter::COMMA),
            buffer: String::with_capacity(1024),
            row_count: 0,
        }
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delim: impl Into<Delimiter>) -> Self {
        self.encoder = CsvEncoder::new(delim.into());
        self
    }

    /// Write a row of fields
    pub fn write_row<I, V>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let fields: Vec<Value> = fields.into_iter().map(Into::into).collect();
        self.write_value(&Value::List(fields))
    }

    /// Write a single row-like; rows that are not rows are skipped
    pub fn write_value(&mut self, row_like: &Value) -> Result<()> {
        let Some(fields) = row_like.as_row() else {
            return Ok(());
        };
        self.buffer.clear();
        self.encoder.encode_row(fields, &mut self.buffer);
        self.sink.write_all(self.buffer.as_bytes())?;
        self.row_count += 1;
        Ok(())
    }

    /// Write every row-like in order
    pub fn write_rows(&mut self, rows: &[Value]) -> Result<()> {
        for row_like in rows {
            self.write_value(row_like)?;
        }
        Ok(())
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Get the number of rows written so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Unwrap the writer, returning the sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}
