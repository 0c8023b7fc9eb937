//! Interactive quiz

mod input;
mod repl;

pub use input::{ReplCommand, ReplInput, parse_input};
pub use repl::PlayRepl;
