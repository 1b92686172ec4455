//! Turn state machine
//!
//! `InProgress -> {Won, Lost, Abandoned}`. The state is a plain value moved
//! through [`step`], so each transition can be driven and checked on its own.

use super::GameConfig;
use crate::core::{Feedback, Word};
use crate::wordlists::WordPool;
use log::debug;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
    Abandoned,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// State of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Word,
    word_len: usize,
    attempts_remaining: u32,
    outcome: Outcome,
    quit_token: String,
    history: Vec<(Word, Feedback)>,
}

/// What a single input did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// Quit token entered
    Abandoned,
    /// Guess length differs from the secret; no attempt used
    WrongLength { expected: usize, actual: usize },
    /// Guess is not in the pool; no attempt used
    NotInPool(String),
    /// Guess was scored and an attempt used
    Scored { guess: Word, feedback: Feedback },
    /// The game had already ended; nothing changed
    GameOver,
}

impl GameState {
    /// Start a game for `secret` with the word length, budget and quit token
    /// from `config`
    ///
    /// Guess length is checked against `config.word_len`, which counts letters
    /// as spelled in the corpus rather than in the uppercased secret.
    #[must_use]
    pub fn new(secret: Word, config: &GameConfig) -> Self {
        Self {
            secret,
            word_len: config.word_len,
            attempts_remaining: config.attempt_budget,
            outcome: Outcome::InProgress,
            quit_token: config.quit_token.clone(),
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Scored guesses in play order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }
}

/// Apply one line of player input
///
/// Quit and rejected guesses leave the attempt count untouched. An accepted
/// guess uses one attempt, then the game is won on an exact match or lost when
/// no attempts remain.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{GameConfig, GameState, Outcome, TurnEvent, step};
/// use wordle_game::wordlists::WordPool;
///
/// let pool = WordPool::from_corpus("apple,100\napply,50\ngrape,30", 5, 10).unwrap();
/// let state = GameState::new(Word::new("apple").unwrap(), &GameConfig::default());
///
/// let (state, event) = step(state, "grape", &pool);
/// assert!(matches!(event, TurnEvent::Scored { .. }));
/// assert_eq!(state.attempts_remaining(), 5);
///
/// let (state, _) = step(state, "APPLE", &pool);
/// assert_eq!(state.outcome(), Outcome::Won);
/// ```
#[must_use]
pub fn step(mut state: GameState, input: &str, pool: &WordPool) -> (GameState, TurnEvent) {
    if state.outcome.is_terminal() {
        return (state, TurnEvent::GameOver);
    }

    let input = input.trim();

    if input.eq_ignore_ascii_case(&state.quit_token) {
        state.outcome = Outcome::Abandoned;
        debug!("Game abandoned with {} attempts left", state.attempts_remaining);
        return (state, TurnEvent::Abandoned);
    }

    let expected = state.word_len;
    let actual = input.chars().count();
    if actual != expected {
        return (state, TurnEvent::WrongLength { expected, actual });
    }

    if !pool.contains(input) {
        return (state, TurnEvent::NotInPool(input.to_uppercase()));
    }

    let Ok(guess) = Word::new(input) else {
        return (state, TurnEvent::NotInPool(input.to_uppercase()));
    };

    let feedback = Feedback::calculate(&guess, &state.secret);
    state.attempts_remaining = state.attempts_remaining.saturating_sub(1);

    if guess == state.secret {
        state.outcome = Outcome::Won;
    } else if state.attempts_remaining == 0 {
        state.outcome = Outcome::Lost;
    }

    debug!(
        "Scored {guess} as {feedback}; {} attempts left, {:?}",
        state.attempts_remaining, state.outcome
    );

    state.history.push((guess.clone(), feedback.clone()));
    (state, TurnEvent::Scored { guess, feedback })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Exact, Present};

    fn pool() -> WordPool {
        WordPool::from_corpus(
            "apple,100\napply,50\ngrape,30\nlemon,20\nmelon,10\npeach,5\nfig,3\n",
            5,
            10,
        )
        .unwrap()
    }

    fn new_game(secret: &str) -> GameState {
        GameState::new(Word::new(secret).unwrap(), &GameConfig::default())
    }

    fn play(mut state: GameState, inputs: &[&str]) -> GameState {
        let pool = pool();
        for input in inputs {
            state = step(state, input, &pool).0;
        }
        state
    }

    #[test]
    fn new_game_starts_in_progress_with_full_budget() {
        let state = new_game("apple");
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.attempts_remaining(), 6);
        assert_eq!(state.word_len(), 5);
        assert_eq!(state.secret().text(), "APPLE");
        assert!(state.history().is_empty());
    }

    #[test]
    fn quit_on_first_prompt_abandons_without_using_attempts() {
        let (state, event) = step(new_game("apple"), "q", &pool());
        assert_eq!(event, TurnEvent::Abandoned);
        assert_eq!(state.outcome(), Outcome::Abandoned);
        assert_eq!(state.attempts_remaining(), 6);
    }

    #[test]
    fn quit_token_is_case_insensitive_and_trimmed() {
        let (state, _) = step(new_game("apple"), "  Q \n", &pool());
        assert_eq!(state.outcome(), Outcome::Abandoned);
    }

    #[test]
    fn wrong_length_is_rejected_without_using_attempts() {
        let (state, event) = step(new_game("apple"), "fig", &pool());
        assert_eq!(
            event,
            TurnEvent::WrongLength {
                expected: 5,
                actual: 3
            }
        );
        assert_eq!(state.attempts_remaining(), 6);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn empty_input_is_a_wrong_length() {
        let (_, event) = step(new_game("apple"), "", &pool());
        assert_eq!(
            event,
            TurnEvent::WrongLength {
                expected: 5,
                actual: 0
            }
        );
    }

    #[test]
    fn length_check_follows_configured_length() {
        let pool = WordPool::from_corpus("banana,9\norange,8\n", 6, 10).unwrap();
        let config = GameConfig {
            word_len: 6,
            ..GameConfig::default()
        };
        let state = GameState::new(Word::new("banana").unwrap(), &config);

        let (state, event) = step(state, "apple", &pool);
        assert_eq!(
            event,
            TurnEvent::WrongLength {
                expected: 6,
                actual: 5
            }
        );

        let (state, event) = step(state, "orange", &pool);
        assert!(matches!(event, TurnEvent::Scored { .. }));
        assert_eq!(state.attempts_remaining(), 5);
    }

    #[test]
    fn length_check_ignores_uppercase_expansion() {
        // STRASSE has seven letters once uppercased; the pool counts six
        let pool = WordPool::from_corpus("straße,9\norange,8\n", 6, 10).unwrap();
        let config = GameConfig {
            word_len: 6,
            ..GameConfig::default()
        };
        let state = GameState::new(Word::new("straße").unwrap(), &config);
        assert_eq!(state.word_len(), 6);

        let (state, event) = step(state, "orange", &pool);
        assert!(matches!(event, TurnEvent::Scored { .. }));
        assert_eq!(state.attempts_remaining(), 5);

        let (state, event) = step(state, "straße", &pool);
        assert!(matches!(event, TurnEvent::Scored { .. }));
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn unknown_word_is_rejected_without_using_attempts() {
        let (state, event) = step(new_game("apple"), "zzzzz", &pool());
        assert_eq!(event, TurnEvent::NotInPool("ZZZZZ".to_string()));
        assert_eq!(state.attempts_remaining(), 6);
    }

    #[test]
    fn membership_is_checked_against_pool_case_insensitively() {
        let (state, event) = step(new_game("apple"), "GrApE", &pool());
        assert!(matches!(event, TurnEvent::Scored { .. }));
        assert_eq!(state.attempts_remaining(), 5);
    }

    #[test]
    fn scored_guess_reports_feedback() {
        let (_, event) = step(new_game("apple"), "apply", &pool());
        let TurnEvent::Scored { guess, feedback } = event else {
            panic!("Expected a scored guess");
        };
        assert_eq!(guess.text(), "APPLY");
        assert_eq!(feedback.count_exact(), 4);
        assert_eq!(feedback.verdicts()[0], Exact);
        assert_ne!(feedback.verdicts()[4], Present);
    }

    #[test]
    fn exact_guess_wins() {
        let state = play(new_game("apple"), &["grape", "apple"]);
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.attempts_remaining(), 4);
        assert_eq!(state.history().len(), 2);
        assert!(state.history()[1].1.is_perfect());
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let state = play(
            new_game("apple"),
            &["grape", "lemon", "melon", "peach", "apply", "apple"],
        );
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.attempts_remaining(), 0);
    }

    #[test]
    fn budget_exhaustion_loses() {
        let state = play(
            new_game("apple"),
            &["grape", "lemon", "melon", "peach", "apply", "grape"],
        );
        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.attempts_remaining(), 0);
        assert_eq!(state.history().len(), 6);
    }

    #[test]
    fn rejections_never_count_toward_loss() {
        let state = play(
            new_game("apple"),
            &["zzzzz", "fig", "", "grape", "qqqqq", "lemon", "toolong"],
        );
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.attempts_remaining(), 4);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn custom_budget_is_respected() {
        let config = GameConfig {
            attempt_budget: 2,
            ..GameConfig::default()
        };
        let state = GameState::new(Word::new("apple").unwrap(), &config);
        let state = play(state, &["grape", "lemon"]);
        assert_eq!(state.outcome(), Outcome::Lost);
    }

    #[test]
    fn zero_budget_loses_on_first_miss_without_underflow() {
        let config = GameConfig {
            attempt_budget: 0,
            ..GameConfig::default()
        };
        let state = GameState::new(Word::new("apple").unwrap(), &config);
        let (state, event) = step(state, "grape", &pool());
        assert!(matches!(event, TurnEvent::Scored { .. }));
        assert_eq!(state.attempts_remaining(), 0);
        assert_eq!(state.outcome(), Outcome::Lost);

        let state = GameState::new(Word::new("apple").unwrap(), &config);
        let (state, _) = step(state, "apple", &pool());
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn custom_quit_token() {
        let config = GameConfig {
            quit_token: "exit".to_string(),
            ..GameConfig::default()
        };
        let state = GameState::new(Word::new("apple").unwrap(), &config);

        let (state, event) = step(state, "q", &pool());
        assert!(matches!(event, TurnEvent::WrongLength { .. }));

        let (state, event) = step(state, "EXIT", &pool());
        assert_eq!(event, TurnEvent::Abandoned);
        assert_eq!(state.outcome(), Outcome::Abandoned);
    }

    #[test]
    fn terminal_state_ignores_further_input() {
        let state = play(new_game("apple"), &["apple"]);
        let before = state.clone();

        let (state, event) = step(state, "grape", &pool());
        assert_eq!(event, TurnEvent::GameOver);
        assert_eq!(state, before);

        let (state, event) = step(state, "q", &pool());
        assert_eq!(event, TurnEvent::GameOver);
        assert_eq!(state.outcome(), Outcome::Won);
    }
}
