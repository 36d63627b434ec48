use anyhow::Result;
use clap::Parser;
use log::*;

mod commands;
mod console;
mod freq;
mod reporting;
mod script;
mod stack;

use commands::{Command, LifoCommands};

/// Linked stack and frequency tally exercises.
#[derive(Parser, Debug)]
struct LifoCLI {
    /// Suppress informational output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
    /// Increase logging verbosity (can be repeated)
    #[arg(short='v', long="verbose", action=clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: LifoCommands,
}

impl LifoCLI {
    fn init_logging(&self) -> Result<()> {
        let mut verbose: usize = 2;
        if self.verbose > 0 {
            verbose += self.verbose as usize;
        } else if self.quiet {
            verbose -= 1;
        }

        stderrlog::new()
            .module(module_path!())
            .verbosity(verbose)
            .init()?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = LifoCLI::parse();
    cli.init_logging()?;
    debug!("starting lifo");
    cli.command.run()?;
    Ok(())
}

#[test]
fn test_cli_parse() {
    let cli = LifoCLI::try_parse_from(["lifo", "-vv", "run", "--strict", "push", "-4", "pop"]).unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.command {
        LifoCommands::Run(_) => (),
        c => panic!("unexpected command {:?}", c),
    }

    let cli = LifoCLI::try_parse_from(["lifo", "freq", "3", "-1", "3"]).unwrap();
    assert!(matches!(cli.command, LifoCommands::Freq(_)));
}
