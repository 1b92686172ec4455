//! Frequency corpus parsing
//!
//! A corpus is plain text with one `word,frequency` record per line. There is no
//! header row and no quoting.

use std::fmt;

/// One parsed corpus record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyRecord {
    pub word: String,
    pub frequency: u64,
}

impl FrequencyRecord {
    #[must_use]
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Why a record was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Record did not split into exactly two comma-separated fields
    FieldCount(usize),
    /// Frequency is not a base-10 non-negative integer
    InvalidFrequency(String),
    /// Word field is blank
    EmptyWord,
    /// Word field has whitespace inside it
    WordContainsWhitespace,
}

/// A malformed corpus record, identified by its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub record: String,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} ({:?}): ", self.line, self.record)?;
        match &self.kind {
            ParseErrorKind::FieldCount(n) => {
                write!(f, "expected 2 comma-separated fields, got {n}")
            }
            ParseErrorKind::InvalidFrequency(value) => {
                write!(f, "frequency {value:?} is not a non-negative integer")
            }
            ParseErrorKind::EmptyWord => write!(f, "word is empty"),
            ParseErrorKind::WordContainsWhitespace => write!(f, "word contains whitespace"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a single `word,frequency` record
///
/// Surrounding whitespace on both fields is ignored. A word with whitespace
/// inside it is rejected.
///
/// # Errors
/// Returns `ParseError` carrying `line` if the record is malformed.
pub fn parse_record(line: usize, record: &str) -> Result<FrequencyRecord, ParseError> {
    let fail = |kind| ParseError {
        line,
        record: record.to_string(),
        kind,
    };

    let fields: Vec<&str> = record.split(',').collect();
    let [word, frequency] = fields.as_slice() else {
        return Err(fail(ParseErrorKind::FieldCount(fields.len())));
    };

    let word = word.trim();
    if word.is_empty() {
        return Err(fail(ParseErrorKind::EmptyWord));
    }
    if word.chars().any(char::is_whitespace) {
        return Err(fail(ParseErrorKind::WordContainsWhitespace));
    }

    let frequency = frequency.trim();
    let frequency = frequency
        .parse::<u64>()
        .map_err(|_| fail(ParseErrorKind::InvalidFrequency(frequency.to_string())))?;

    Ok(FrequencyRecord::new(word, frequency))
}

/// Parse every record in a corpus, stopping at the first malformed one
///
/// # Errors
/// Returns the first `ParseError`; no partial result is produced.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::parse_corpus;
///
/// let records = parse_corpus("apple,100\ngrape,30\n").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].word, "grape");
///
/// let err = parse_corpus("apple,100\ngrape\n").unwrap_err();
/// assert_eq!(err.line, 2);
/// ```
pub fn parse_corpus(source: &str) -> Result<Vec<FrequencyRecord>, ParseError> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| parse_record(i + 1, line))
        .collect()
}
