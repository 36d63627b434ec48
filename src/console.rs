//! Console presentation of stacks.
//!
//! The stack itself never prints; this module decides how values and
//! empty-stack conditions show up on a terminal.
use std::io::Write;

use anstyle::{AnsiColor, Style};
use log::*;

use crate::reporting::{Result, ResultNote};
use crate::script::Op;
use crate::stack::Stack;

const EMPTY_MESSAGE: &str = "Stack is empty";

/// Write the `Stack is empty` diagnostic line.
pub fn report_empty<W: Write>(out: &mut W) -> Result<()> {
    warn!("operation on empty stack");
    let style = Style::new().fg_color(Some(AnsiColor::Yellow.into()));
    writeln!(
        out,
        "{}{}{}",
        style.render(),
        EMPTY_MESSAGE,
        style.render_reset()
    )?;
    Ok(())
}

/// Write the stack's values top to bottom, each followed by a space.
pub fn write_stack<W: Write>(out: &mut W, stack: &Stack<i64>) -> Result<()> {
    if stack.is_empty() {
        return report_empty(out);
    }
    for v in stack {
        write!(out, "{} ", v)?;
    }
    Ok(())
}

/// Apply script operations to a stack, writing their results.
///
/// Empty-stack conditions are reported and skipped, or returned as errors
/// when `strict` is set.
pub fn run_script<W: Write>(
    out: &mut W,
    stack: &mut Stack<i64>,
    ops: &[Op],
    strict: bool,
) -> Result<()> {
    for (i, op) in ops.iter().enumerate() {
        debug!("step {}: {}", i, op);
        let line = match op {
            Op::Push(v) => {
                stack.push(*v);
                None
            }
            Op::Pop => Some(stack.pop().map(|v| v.to_string())),
            Op::Peek => Some(stack.peek().map(|v| v.to_string())),
            Op::Empty => Some(Ok(stack.is_empty().to_string())),
            Op::Size => Some(Ok(stack.len().to_string())),
            Op::Print => {
                write_stack(out, stack)?;
                if !stack.is_empty() {
                    writeln!(out)?;
                }
                None
            }
        };
        match line {
            None => (),
            Some(Ok(s)) => writeln!(out, "{}", s)?,
            Some(Err(e)) if strict => return Err(e).with_step(i, op),
            Some(Err(_)) => report_empty(out)?,
        }
    }
    Ok(())
}

/// Replay the reference demonstration: push 50, 30, 10, pop once, then
/// show emptiness and the remaining stack.
pub fn demo<W: Write>(out: &mut W) -> Result<()> {
    let mut stack = Stack::new();
    stack.push(50);
    stack.push(30);
    stack.push(10);
    let top = stack.pop()?;
    debug!("demo popped {}", top);
    writeln!(out, "{}", stack.is_empty())?;
    write_stack(out, &stack)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::script::parse_script;

    fn render(stack: &Stack<i64>) -> String {
        let mut buf = Vec::new();
        write_stack(&mut buf, stack).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn run(words: &[&str], strict: bool) -> (Result<()>, String, Stack<i64>) {
        let ops = parse_script(words).unwrap();
        let mut stack = Stack::new();
        let mut buf = Vec::new();
        let res = run_script(&mut buf, &mut stack, &ops, strict);
        (res, String::from_utf8(buf).unwrap(), stack)
    }

    #[test]
    fn test_demo_output() {
        let mut buf = Vec::new();
        demo(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "false\n30 50 ");
    }

    #[test]
    fn test_write_stack() {
        let stack: Stack<i64> = [50, 30].into_iter().collect();
        assert_eq!(render(&stack), "30 50 ");
    }

    #[test]
    fn test_write_empty_stack() {
        let out = render(&Stack::new());
        assert!(out.contains(EMPTY_MESSAGE));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_script() {
        let (res, out, stack) = run(
            &["push", "50", "push", "30", "push", "10", "pop", "empty", "size", "peek", "print"],
            false,
        );
        assert!(res.is_ok());
        assert_eq!(out, "10\nfalse\n2\n30\n30 50 \n");
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_script_lenient_empty() {
        let (res, out, stack) = run(&["pop", "push", "4", "size"], false);
        assert!(res.is_ok());
        assert!(out.contains(EMPTY_MESSAGE));
        assert!(out.ends_with("1\n"));
        assert_eq!(stack.peek(), Ok(&4));
    }

    #[test]
    fn test_script_strict_empty() {
        let (res, out, stack) = run(&["peek", "push", "4"], true);
        let err = res.unwrap_err();
        assert_eq!(err.to_string(), "step 0 (peek): stack is empty");
        assert!(out.is_empty());
        assert!(stack.is_empty());
    }
}
