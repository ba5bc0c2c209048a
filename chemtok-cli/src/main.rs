//! chemtok command-line entry point

use anyhow::Result;
use clap::Parser;

use chemtok_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "chemtok", version)]
#[command(about = "Chemistry-aware tokenization and sentence splitting for scientific text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tokenize() {
        let cli = Cli::try_parse_from(["chemtok", "tokenize", "-i", "paper.txt", "-f", "json"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Tokenize(_)));
    }
}
