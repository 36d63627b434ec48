use clap::Subcommand;
use enum_dispatch::*;

mod demo;
mod freq;
mod run;

/// Interface for lifo commands.
#[enum_dispatch]
pub trait Command {
    fn run(&self) -> anyhow::Result<()>;
}

#[derive(Subcommand, Debug)]
#[enum_dispatch(Command)]
pub enum LifoCommands {
    Demo(demo::DemoCmd),
    Run(run::RunCmd),
    Freq(freq::FreqCmd),
}
