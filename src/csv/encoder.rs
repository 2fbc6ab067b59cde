//! CSV encoding with minimal quoting

use crate::options::Delimiter;
use crate::types::Value;
use tracing::{debug, trace};

const QUOTE: char = '"';

/// CSV encoder for writing properly formatted CSV text
///
/// A field is quoted only when it contains a quote, a CR, a LF or the
/// delimiter. Quotes inside a quoted field are doubled. Every row ends
/// with a single `\n`.
#[derive(Debug, Clone, Copy)]
pub struct CsvEncoder {
    delimiter: char,
}

impl CsvEncoder {
    /// Create a new CSV encoder with a custom delimiter
    pub fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter: delimiter.as_char(),
        }
    }

    /// Encode every row-like, skipping those that are not rows
    pub fn encode_rows(&self, rows: &[Value], buffer: &mut String) {
        let mut written = 0usize;
        for (index, row_like) in rows.iter().enumerate() {
            match row_like.as_row() {
                Some(fields) => {
                    self.encode_row(fields, buffer);
                    written += 1;
                }
                None => trace!(index, "skipped row-like that is not a row"),
            }
        }
        debug!(
            rows = written,
            skipped = rows.len() - written,
            delimiter = %self.delimiter,
            "serialized CSV rows"
        );
    }

    /// Encode one row of fields, terminated by `\n`
    pub fn encode_row(&self, fields: &[Value], buffer: &mut String) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                buffer.push(self.delimiter);
            }
            self.encode_field(&field.to_field(), buffer);
        }
        buffer.push('\n');
    }

    /// Encode single field with proper quoting/escaping
    pub fn encode_field(&self, field: &str, buffer: &mut String) {
        if self.needs_quoting(field) {
            buffer.push(QUOTE);
            for ch in field.chars() {
                if ch == QUOTE {
                    buffer.push(QUOTE);
                }
                buffer.push(ch);
            }
            buffer.push(QUOTE);
        } else {
            buffer.push_str(field);
        }
    }

    /// Check if field requires quoting
    pub fn needs_quoting(&self, field: &str) -> bool {
        field
            .chars()
            .any(|c| c == self.delimiter || c == QUOTE || c == '\n' || c == '\r')
    }
}
