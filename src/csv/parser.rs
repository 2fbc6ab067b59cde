//! CSV parsing with RFC 4180-like behavior and lenient quote recovery

use crate::options::{Delimiter, ParseOptions};
use crate::table::ParsedTable;
use tracing::{debug, trace};

const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

/// Rows accumulated so far plus the field and row in progress
struct Accumulator {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    field: String,
    column_count: usize,
}

impl Accumulator {
    fn new() -> Self {
        Accumulator {
            rows: Vec::new(),
            row: Vec::new(),
            field: String::new(),
            column_count: 0,
        }
    }

    /// Close the field at a delimiter; empty fields are kept
    fn end_field(&mut self) {
        self.row.push(std::mem::take(&mut self.field));
    }

    /// Close the row; an empty last field is dropped, an empty row is skipped
    fn end_row(&mut self) {
        if !self.field.is_empty() {
            self.end_field();
        }
        if !self.row.is_empty() {
            self.column_count = self.column_count.max(self.row.len());
            self.rows.push(std::mem::take(&mut self.row));
        }
    }
}

/// CSV parser turning text into a [`ParsedTable`]
///
/// Never fails. Malformed quoting is recovered from with fixed rules, so the
/// worst outcome is a field whose content differs from what was intended.
///
/// # Examples
///
/// ```
/// use csvtable::csv::CsvParser;
/// use csvtable::Delimiter;
///
/// let parser = CsvParser::new(Delimiter::COMMA);
/// let (rows, column_count) = parser.parse_rows("a,\"b,c\"\nd\n");
/// assert_eq!(rows, vec![vec!["a", "b,c"], vec!["d"]]);
/// assert_eq!(column_count, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CsvParser {
    delimiter: char,
}

impl CsvParser {
    /// Create a new CSV parser with a custom delimiter
    pub fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter: delimiter.as_char(),
        }
    }

    /// Parse text into a table, building the header index if requested
    pub fn parse(&self, text: &str, has_headers: bool) -> ParsedTable {
        let (rows, column_count) = self.parse_rows(text);
        debug!(
            rows = rows.len(),
            column_count,
            has_headers,
            delimiter = %self.delimiter,
            "parsed CSV text"
        );
        if has_headers {
            ParsedTable::with_headers(rows, column_count)
        } else {
            ParsedTable::new(rows, column_count)
        }
    }

    /// Parse text into rows of fields and the widest row's field count
    pub fn parse_rows(&self, text: &str) -> (Vec<Vec<String>>, usize) {
        let chars: Vec<char> = text.chars().collect();
        let mut acc = Accumulator::new();
        let mut state = State::Unquoted;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();
            let third = chars.get(i + 2).copied();

            if c == self.delimiter && state == State::Unquoted {
                acc.end_field();
                i += 1;
            } else if state == State::Unquoted && (c == '\n' || c == '\r') {
                if c == '\r' && next == Some('\n') {
                    i += 1;
                }
                acc.end_row();
                i += 1;
            } else if state == State::Unquoted && acc.field.is_empty() {
                if c == QUOTE && next == Some(QUOTE) {
                    if third.is_some_and(|t| self.is_terminator(t)) {
                        // "" as a whole field: empty, stays unquoted
                        i += 2;
                    } else if third != Some(QUOTE) {
                        trace!(offset = i, "escaped quote outside quoted field");
                        acc.field.push(QUOTE);
                        i += 2;
                    } else {
                        state = State::Quoted;
                        i += 1;
                    }
                } else if c == QUOTE {
                    state = State::Quoted;
                    i += 1;
                } else {
                    acc.field.push(c);
                    i += 1;
                }
            } else if c == QUOTE && state == State::Quoted && next == Some(QUOTE) {
                acc.field.push(QUOTE);
                i += 2;
            } else if c == QUOTE {
                if state == State::Unquoted {
                    trace!(offset = i, "stray quote in unquoted field");
                    acc.field.push(QUOTE);
                } else {
                    // Closing quote; one not followed by a terminator is dropped
                    if !next.is_some_and(|n| self.is_terminator(n)) {
                        trace!(offset = i, "quote inside quoted field dropped");
                    }
                    state = State::Unquoted;
                }
                i += 1;
            } else {
                acc.field.push(c);
                i += 1;
            }
        }

        acc.end_row();
        (acc.rows, acc.column_count)
    }

    fn is_terminator(&self, c: char) -> bool {
        c == self.delimiter || c == '\n' || c == '\r'
    }
}

impl From<ParseOptions> for CsvParser {
    fn from(options: ParseOptions) -> Self {
        CsvParser::new(options.delimiter)
    }
}
