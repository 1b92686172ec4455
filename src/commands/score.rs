//! Single-guess scoring command
//!
//! Scores one guess against a known secret without playing a game.

use crate::core::{Feedback, Word};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
///
/// # Examples
/// ```
/// use wordle_game::commands::score_guess;
///
/// let result = score_guess("apple", "alpee").unwrap();
/// assert_eq!(result.feedback.to_string(), "GYGYG");
/// assert!(score_guess("apple", "pear").is_err());
/// ```
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if secret.len() != guess.len() {
        return Err(format!(
            "Guess has {} letters but the secret has {}",
            guess.len(),
            secret.len()
        ));
    }

    let feedback = Feedback::calculate(&guess, &secret);
    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}
