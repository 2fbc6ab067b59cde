//! Delimiter and parse options

use crate::error::{CodecError, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field delimiter, always exactly one character
///
/// Defaults to `,`. Loose constructors fall back to the default instead of
/// failing; use [`FromStr`] or [`TryFrom`] for strict validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct Delimiter(char);

impl Delimiter {
    /// The default delimiter (`,`)
    pub const COMMA: Delimiter = Delimiter(',');

    /// Create a delimiter from a character
    pub fn new(ch: char) -> Self {
        Delimiter(ch)
    }

    /// Use the string's only character, or `,` if it is empty or longer
    ///
    /// # Examples
    ///
    /// ```
    /// use csvtable::Delimiter;
    ///
    /// assert_eq!(Delimiter::from_str_lossy(";").as_char(), ';');
    /// assert_eq!(Delimiter::from_str_lossy("::").as_char(), ',');
    /// assert_eq!(Delimiter::from_str_lossy("").as_char(), ',');
    /// ```
    pub fn from_str_lossy(s: &str) -> Self {
        single_char(s).map(Delimiter).unwrap_or_default()
    }

    /// Like [`Delimiter::from_str_lossy`], treating `None` as the default
    pub fn from_option(s: Option<&str>) -> Self {
        s.map(Self::from_str_lossy).unwrap_or_default()
    }

    /// Get the delimiter character
    pub fn as_char(&self) -> char {
        self.0
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::COMMA
    }
}

impl From<char> for Delimiter {
    fn from(ch: char) -> Self {
        Delimiter(ch)
    }
}

impl From<String> for Delimiter {
    fn from(s: String) -> Self {
        Delimiter::from_str_lossy(&s)
    }
}

impl From<Delimiter> for String {
    fn from(d: Delimiter) -> Self {
        d.0.to_string()
    }
}

impl FromStr for Delimiter {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        single_char(s)
            .map(Delimiter)
            .ok_or_else(|| CodecError::InvalidDelimiter(s.to_string()))
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = CodecError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options controlling how CSV text is parsed
///
/// # Examples
///
/// ```
/// use csvtable::ParseOptions;
///
/// let options = ParseOptions::new().has_headers(true).delimiter(';');
/// assert!(options.headers_enabled());
/// assert_eq!(options.delimiter_char(), ';');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ParseOptions {
    /// Treat the first row as column names
    pub has_headers: bool,
    /// Field delimiter
    pub delimiter: Delimiter,
}

impl ParseOptions {
    /// Create options with no headers and a comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Indicate that the first row contains headers (builder pattern)
    pub fn has_headers(mut self, has: bool) -> Self {
        self.has_headers = has;
        self
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delim: impl Into<Delimiter>) -> Self {
        self.delimiter = delim.into();
        self
    }

    /// Whether the first row is treated as headers
    pub fn headers_enabled(&self) -> bool {
        self.has_headers
    }

    /// The configured delimiter character
    pub fn delimiter_char(&self) -> char {
        self.delimiter.as_char()
    }
}
