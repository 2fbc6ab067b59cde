//! Parsing entry points for hosts handing over CSV text

use crate::csv::CsvParser;
use crate::options::{Delimiter, ParseOptions};
use crate::table::ParsedTable;

/// Parse CSV text with typed options
///
/// # Examples
///
/// ```
/// use csvtable::{parse, ParseOptions};
///
/// let table = parse("name,age\nAlice,30\nBob,25\n", &ParseOptions::new().has_headers(true));
///
/// assert_eq!(table.column_count(), 2);
/// assert_eq!(table.column("age"), Some(&["30".to_string(), "25".to_string()][..]));
/// ```
pub fn parse(text: &str, options: &ParseOptions) -> ParsedTable {
    CsvParser::from(*options).parse(text, options.has_headers)
}

/// Parse CSV text from loosely typed host input
///
/// Missing text parses as an empty table. A delimiter that is missing or
/// not exactly one character falls back to `,`.
///
/// # Examples
///
/// ```
/// use csvtable::from_csv;
///
/// let table = from_csv(None, true, None);
/// assert!(table.rows().is_empty());
/// assert_eq!(table.headers(), Some(&[][..]));
///
/// let table = from_csv(Some("a;b\n"), false, Some(";;"));
/// assert_eq!(table.rows(), &[vec!["a;b".to_string()]]);
/// ```
pub fn from_csv(text: Option<&str>, has_headers: bool, delimiter: Option<&str>) -> ParsedTable {
    let options = ParseOptions::new()
        .has_headers(has_headers)
        .delimiter(Delimiter::from_option(delimiter));
    parse(text.unwrap_or_default(), &options)
}
