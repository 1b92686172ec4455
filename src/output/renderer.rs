//! Render sink for the game loop

use super::formatters::{share_grid, styled_letter};
use crate::core::{Feedback, Word};
use crate::game::GameState;
use colored::Colorize;
use std::io::{self, Write};

/// Receives pre-classified game events and presents them
pub trait Renderer {
    /// Ask for the next guess
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written to.
    fn prompt(&mut self, word_len: usize, attempts_remaining: u32) -> io::Result<()>;

    /// Guess had the wrong number of letters
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written to.
    fn wrong_length(&mut self, expected: usize, actual: usize) -> io::Result<()>;

    /// Guess is not a playable word
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written to.
    fn not_in_pool(&mut self, word: &str) -> io::Result<()>;

    /// One line of per-letter feedback
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written to.
    fn feedback(&mut self, guess: &Word, feedback: &Feedback) -> io::Result<()>;

    /// Game won
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written to.
    fn won(&mut self, state: &GameState) -> io::Result<()>;

    /// Attempts exhausted
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written to.
    fn lost(&mut self, state: &GameState) -> io::Result<()>;

    /// Player quit
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written to.
    fn abandoned(&mut self, secret: &Word) -> io::Result<()>;
}

/// Colored terminal output over any writer
pub struct ConsoleRenderer<W: Write> {
    out: W,
    quit_token: String,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, quit_token: impl Into<String>) -> Self {
        Self {
            out,
            quit_token: quit_token.into(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn prompt(&mut self, word_len: usize, attempts_remaining: u32) -> io::Result<()> {
        write!(
            self.out,
            "[{attempts_remaining} left] Enter a {word_len} letter word (or {} to exit): ",
            self.quit_token
        )?;
        self.out.flush()
    }

    fn wrong_length(&mut self, expected: usize, actual: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            format!("Word must have {expected} letters. You entered {actual}!").yellow()
        )
    }

    fn not_in_pool(&mut self, word: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("Word is not valid: {word}").yellow())
    }

    fn feedback(&mut self, guess: &Word, feedback: &Feedback) -> io::Result<()> {
        let line: Vec<String> = guess
            .letters()
            .iter()
            .zip(feedback.verdicts())
            .map(|(&letter, &verdict)| styled_letter(letter, verdict))
            .collect();
        writeln!(self.out, "{}", line.join(" "))
    }

    fn won(&mut self, state: &GameState) -> io::Result<()> {
        let used = state.history().len();
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            format!(
                " Congratulations! Solved in {used} {} ",
                if used == 1 { "guess" } else { "guesses" }
            )
            .black()
            .on_green()
            .bold()
        )?;
        writeln!(self.out, "{}", share_grid(state))
    }

    fn lost(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            format!("Game over: The word was \"{}\".", state.secret())
                .red()
                .bold()
        )?;
        writeln!(self.out, "{}", share_grid(state))
    }

    fn abandoned(&mut self, secret: &Word) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            format!("Game over: The word was \"{secret}\".").red()
        )
    }
}
