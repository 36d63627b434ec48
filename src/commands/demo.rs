//! stack demonstration command

use clap::Args;
use log::*;

use crate::console::demo;

use super::Command;

/// Replay the push/pop/print demonstration.
#[derive(Debug, Args)]
#[command(name = "demo")]
pub struct DemoCmd {}

impl Command for DemoCmd {
    fn run(&self) -> anyhow::Result<()> {
        info!("running stack demonstration");
        let mut out = anstream::stdout();
        demo(&mut out)
    }
}
