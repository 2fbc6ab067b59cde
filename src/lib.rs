//! # csvtable
//!
//! A small embeddable CSV codec. Parses CSV text into an in-memory table
//! and serializes tables back into CSV text.
//!
//! Neither direction can fail: malformed quoting is recovered from with
//! fixed rules and invalid row-likes are skipped, so both operations always
//! return a value.
//!
//! ## Parsing
//!
//! ```
//! use csvtable::{parse, ParseOptions};
//!
//! let options = ParseOptions::new().has_headers(true);
//! let table = parse("name,age\nAlice,30\nBob,25\n", &options);
//!
//! assert_eq!(table.headers(), Some(&["name".to_string(), "age".to_string()][..]));
//! assert_eq!(table.column("name"), Some(&["Alice".to_string(), "Bob".to_string()][..]));
//! assert_eq!(table.column_count(), 2);
//! ```
//!
//! ## Serializing
//!
//! ```
//! use csvtable::{serialize, Delimiter, Value};
//!
//! let rows = vec![
//!     Value::from(vec![Value::from("he said \"hi\""), Value::Int(3)]),
//!     Value::from("solo"),
//! ];
//! assert_eq!(
//!     serialize(&rows, Delimiter::COMMA),
//!     "\"he said \"\"hi\"\"\",3\nsolo\n"
//! );
//! ```
//!
//! ## Logging
//!
//! Events are emitted through `tracing`: a `debug` summary per call and a
//! `trace` event whenever a malformed quote is recovered or a row-like is
//! skipped. Install any subscriber in the host to see them.

pub mod csv;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod options;
pub mod table;
pub mod types;

pub use csv_reader::{from_csv, parse};
pub use csv_writer::{serialize, to_csv, CsvWriter};
pub use error::{CodecError, Result};
pub use options::{Delimiter, ParseOptions};
pub use table::{ColumnMap, ParsedTable};
pub use types::Value;
