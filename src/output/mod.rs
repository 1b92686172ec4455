//! Terminal output formatting
//!
//! The render sink used by the game loop, plus display helpers for the
//! non-interactive commands.

pub mod display;
pub mod formatters;
mod renderer;

pub use display::{print_pool_report, print_score_result};
pub use renderer::{ConsoleRenderer, Renderer};
