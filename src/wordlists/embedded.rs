//! Embedded sample corpus
//!
//! A frequency-ranked English word list compiled into the binary, used when no
//! corpus file is given on the command line.

/// `word,frequency` records, one per line, most frequent first
pub const SAMPLE_CORPUS: &str = include_str!("../../data/sample_corpus.csv");
