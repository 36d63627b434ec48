//! Error reporting.

use std::fmt::Display;

pub use anyhow::{anyhow, Result};

use crate::script::Op;

pub trait ResultNote<R> {
    /// Tag an error with the script step that produced it.
    fn with_step(self, step: usize, op: &Op) -> Result<R>;
}

impl<R, E> ResultNote<R> for Result<R, E>
where
    E: Into<anyhow::Error> + Display,
{
    fn with_step(self, step: usize, op: &Op) -> Result<R> {
        self.map_err(|e| anyhow!("step {} ({}): {}", step, op, e))
    }
}

#[test]
fn test_with_step() {
    use crate::stack::EmptyStackError;

    let res: Result<(), EmptyStackError> = Err(EmptyStackError);
    let err = res.with_step(3, &Op::Pop).unwrap_err();
    assert_eq!(err.to_string(), "step 3 (pop): stack is empty");
}
