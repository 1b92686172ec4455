//! Formatting utilities for terminal output

use crate::core::LetterVerdict;
use crate::game::{GameState, Outcome};
use colored::Colorize;

/// Render one guessed letter as a colored tile
#[must_use]
pub fn styled_letter(letter: char, verdict: LetterVerdict) -> String {
    let tile = format!(" {letter} ");
    let styled = match verdict {
        LetterVerdict::Exact => tile.black().on_green().bold(),
        LetterVerdict::Present => tile.black().on_yellow().bold(),
        LetterVerdict::Absent => tile.white().on_red(),
    };
    styled.to_string()
}

/// Emoji grid of every scored guess, headed by the result
///
/// The header reads `n/budget` on a win and `X/budget` otherwise.
#[must_use]
pub fn share_grid(state: &GameState) -> String {
    let used = state.history().len();
    let budget = used + state.attempts_remaining() as usize;
    let score = if state.outcome() == Outcome::Won {
        used.to_string()
    } else {
        "X".to_string()
    };

    let mut grid = format!("{score}/{budget}");
    for (_, feedback) in state.history() {
        grid.push('\n');
        grid.push_str(&feedback.to_emoji());
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameConfig, step};
    use crate::wordlists::WordPool;

    fn play(inputs: &[&str]) -> GameState {
        let pool = WordPool::from_corpus("apple,3\napply,2\ngrape,1\n", 5, 10).unwrap();
        let mut state = GameState::new(Word::new("apple").unwrap(), &GameConfig::default());
        for input in inputs {
            state = step(state, input, &pool).0;
        }
        state
    }

    #[test]
    fn styled_letter_keeps_letter_text() {
        for verdict in [
            LetterVerdict::Exact,
            LetterVerdict::Present,
            LetterVerdict::Absent,
        ] {
            assert!(styled_letter('Q', verdict).contains(" Q "));
        }
    }

    #[test]
    fn share_grid_after_win() {
        let grid = share_grid(&play(&["grape", "apply", "apple"]));
        assert_eq!(grid, "3/6\n⬜⬜🟨🟨🟩\n🟩🟩🟩🟩⬜\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_without_win_marks_x() {
        let grid = share_grid(&play(&["grape", "q"]));
        assert_eq!(grid, "X/6\n⬜⬜🟨🟨🟩");
    }

    #[test]
    fn share_grid_empty_history() {
        assert_eq!(share_grid(&play(&[])), "X/6");
    }
}
