//! frequency counting command

use std::io::Write;

use clap::Args;
use log::*;

use crate::freq::count_frequencies;

use super::Command;

/// Count how often each integer occurs.
#[derive(Debug, Args)]
#[command(name = "freq")]
pub struct FreqCmd {
    /// The values to count.
    #[arg(name = "VALUES", allow_negative_numbers = true)]
    values: Vec<i64>,
}

impl Command for FreqCmd {
    fn run(&self) -> anyhow::Result<()> {
        let freqs = count_frequencies(self.values.iter().copied());
        info!(
            "{} values, {} distinct",
            self.values.len(),
            freqs.len()
        );
        let mut out = anstream::stdout();
        for (v, n) in freqs {
            writeln!(out, "{} {}", v, n)?;
        }
        Ok(())
    }
}
