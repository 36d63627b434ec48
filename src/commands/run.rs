//! stack script command

use clap::Args;
use log::*;

use crate::console::run_script;
use crate::script::parse_script;
use crate::stack::Stack;

use super::Command;

/// Run stack operations against a fresh stack.
#[derive(Debug, Args)]
#[command(name = "run")]
pub struct RunCmd {
    /// Fail on the first operation that needs a non-empty stack.
    #[arg(short = 's', long = "strict")]
    strict: bool,

    /// Operations: push N, pop, peek, empty, size, print.
    #[arg(name = "OPS", allow_negative_numbers = true)]
    ops: Vec<String>,
}

impl Command for RunCmd {
    fn run(&self) -> anyhow::Result<()> {
        let ops = parse_script(&self.ops)?;
        info!("running {} stack operations", ops.len());
        let mut stack = Stack::new();
        let mut out = anstream::stdout();
        run_script(&mut out, &mut stack, &ops, self.strict)?;
        debug!("finished with {} values on the stack", stack.len());
        Ok(())
    }
}
