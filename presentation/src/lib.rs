//! Presentation layer for globetrotter
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz.

pub mod cli;
pub mod config;
pub mod output;
pub mod play;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use play::PlayRepl;
pub use progress::reporter::ProgressReporter;
