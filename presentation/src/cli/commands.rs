//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for globetrotter
#[derive(Parser, Debug)]
#[command(name = "globetrotter")]
#[command(author, version, about = "Guess the destination from cryptic clues")]
#[command(long_about = r#"
Globetrotter shows you cryptic clues about a famous place and asks you to
pick the right city. Each round unlocks fun facts and trivia, and at the
end you can challenge a friend to beat your score.

Configuration files are loaded from (in priority order):
1. GLOBETROTTER_* env vars    e.g. GLOBETROTTER_API__API_KEY
2. --config <path>            Explicit config file
3. ./globetrotter.toml        Project-level config
4. ~/.config/globetrotter/config.toml   Global config

Example:
  globetrotter
  globetrotter --invite alice
  globetrotter --card bob --score 7
"#)]
pub struct Cli {
    /// Open a friend's invite before playing
    #[arg(long, value_name = "NAME")]
    pub invite: Option<String>,

    /// Print the social-preview card for NAME and exit
    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = "")]
    pub card: Option<String>,

    /// Score shown on the preview card (with --card)
    #[arg(long, value_name = "N", requires = "card")]
    pub score: Option<String>,

    /// Public site origin used in share links
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["globetrotter"]);
        assert!(cli.invite.is_none());
        assert!(cli.card.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_card_without_name() {
        let cli = Cli::parse_from(["globetrotter", "--card"]);
        assert_eq!(cli.card.as_deref(), Some(""));
        assert!(cli.score.is_none());
    }

    #[test]
    fn test_card_with_score() {
        let cli = Cli::parse_from(["globetrotter", "--card", "bob", "--score", "7", "-vv"]);
        assert_eq!(cli.card.as_deref(), Some("bob"));
        assert_eq!(cli.score.as_deref(), Some("7"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_score_requires_card() {
        assert!(Cli::try_parse_from(["globetrotter", "--score", "7"]).is_err());
    }
}
