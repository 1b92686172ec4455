//! Vocabulary construction
//!
//! Turns a `word,frequency` corpus into the pool of playable words.

mod corpus;
mod embedded;
pub mod loader;
mod pool;

pub use corpus::{FrequencyRecord, ParseError, ParseErrorKind, parse_corpus, parse_record};
pub use embedded::SAMPLE_CORPUS;
pub use pool::WordPool;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_corpus_parses() {
        let records = parse_corpus(SAMPLE_CORPUS).unwrap();
        assert!(records.len() > 5000);
        assert!(records.iter().all(|r| !r.word.is_empty()));
    }

    #[test]
    fn sample_corpus_has_default_pool() {
        let pool = WordPool::from_corpus(SAMPLE_CORPUS, 5, 10_000).unwrap();
        assert!(pool.len() > 500, "only {} five-letter words", pool.len());
        assert!(pool.words().iter().all(|w| w.chars().count() == 5));
    }

    #[test]
    fn sample_corpus_supports_other_lengths() {
        for word_len in [4, 6, 7] {
            let pool = WordPool::from_corpus(SAMPLE_CORPUS, word_len, 10_000).unwrap();
            assert!(!pool.is_empty(), "no {word_len}-letter words");
        }
    }
}
