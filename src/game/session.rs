//! Blocking game loop
//!
//! Pulls one line per prompt from the input source, feeds it through the state
//! machine and hands every event to the render sink until the game ends.

use super::{GameConfig, GameState, Outcome, TurnEvent, step};
use crate::core::Word;
use crate::error::GameError;
use crate::output::Renderer;
use crate::wordlists::WordPool;
use log::info;
use std::io::BufRead;

/// Play one game to completion
///
/// End of input counts as abandonment.
///
/// # Errors
///
/// Returns `GameError::Io` if reading input or rendering output fails.
pub fn run_game<R: BufRead, O: Renderer>(
    pool: &WordPool,
    secret: Word,
    config: &GameConfig,
    mut input: R,
    out: &mut O,
) -> Result<GameState, GameError> {
    let mut state = GameState::new(secret, config);
    info!(
        "Game started: {} letters, {} attempts, pool of {}",
        state.word_len(),
        state.attempts_remaining(),
        pool.len()
    );

    while !state.outcome().is_terminal() {
        out.prompt(state.word_len(), state.attempts_remaining())?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF counts as quitting
            let quit = config.quit_token.clone();
            state = step(state, &quit, pool).0;
            out.abandoned(state.secret())?;
            break;
        }

        let (next, event) = step(state, &line, pool);
        state = next;

        match event {
            TurnEvent::Abandoned => out.abandoned(state.secret())?,
            TurnEvent::WrongLength { expected, actual } => out.wrong_length(expected, actual)?,
            TurnEvent::NotInPool(word) => out.not_in_pool(&word)?,
            TurnEvent::Scored { guess, feedback } => {
                out.feedback(&guess, &feedback)?;
                match state.outcome() {
                    Outcome::Won => out.won(&state)?,
                    Outcome::Lost => out.lost(&state)?,
                    Outcome::InProgress | Outcome::Abandoned => {}
                }
            }
            TurnEvent::GameOver => break,
        }
    }

    info!(
        "Game finished: {:?} after {} scored guesses",
        state.outcome(),
        state.history().len()
    );
    Ok(state)
}
