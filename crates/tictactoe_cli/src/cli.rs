//! Command-line interface for the tic-tac-toe host.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Mark;

/// Two-player tic-tac-toe in the terminal, with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mark that opens every round (X or O); overrides the config file
    #[arg(short, long)]
    pub first: Option<Mark>,

    /// Stop after this many completed rounds
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Print the final score as JSON on exit
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["tictactoe", "--first", "o", "--rounds", "3", "--json"]);
        assert_eq!(cli.first, Some(Mark::O));
        assert_eq!(cli.rounds, Some(3));
        assert!(cli.json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_rejects_unknown_mark() {
        assert!(Cli::try_parse_from(["tictactoe", "--first", "Z"]).is_err());
    }
}
