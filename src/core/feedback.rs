//! Per-letter guess feedback
//!
//! Each guessed letter is classified against the secret independently of every
//! other position:
//! - Exact: same letter at the same position
//! - Present: letter occurs somewhere in the secret
//! - Absent: letter does not occur in the secret
//!
//! Present is a plain membership test. Repeated letters in a guess are not
//! capped by how many times they occur in the secret.

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    Exact,
    Present,
    Absent,
}

impl LetterVerdict {
    /// Single-character code used in compact notation (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square for share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Ordered verdicts for one guess, aligned to the guess positions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterVerdict>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Both words are expected to have the same length; positions beyond the
    /// shorter word are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterVerdict::*, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("alpee").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.verdicts(), &[Exact, Present, Exact, Present, Exact]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let verdicts = guess
            .letters()
            .iter()
            .zip(secret.letters())
            .map(|(&g, &s)| {
                if g == s {
                    LetterVerdict::Exact
                } else if secret.has_letter(g) {
                    LetterVerdict::Present
                } else {
                    LetterVerdict::Absent
                }
            })
            .collect();

        Self(verdicts)
    }

    /// The verdict sequence
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.0
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == LetterVerdict::Exact)
    }

    /// Count the exact-match positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&v| v == LetterVerdict::Exact).count()
    }

    /// Count the present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&v| v == LetterVerdict::Present)
            .count()
    }

    /// Convert to an emoji row such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.0 {
            write!(f, "{}", v.code())?;
        }
        Ok(())
    }
}
