//! Stack operation scripts read from command-line words.
use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown operation: {0}")]
    UnknownOp(String),
    #[error("{0} requires an operand")]
    MissingOperand(&'static str),
    #[error("invalid operand {word}: {source}")]
    BadOperand {
        word: String,
        source: ParseIntError,
    },
}

/// Single stack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Push(i64),
    Pop,
    Peek,
    Empty,
    Size,
    Print,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Push(v) => write!(f, "push {}", v),
            Op::Pop => f.write_str("pop"),
            Op::Peek => f.write_str("peek"),
            Op::Empty => f.write_str("empty"),
            Op::Size => f.write_str("size"),
            Op::Print => f.write_str("print"),
        }
    }
}

/// Parse a sequence of words into stack operations.
pub fn parse_script<I, S>(words: I) -> Result<Vec<Op>, ScriptError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = words.into_iter();
    let mut ops = Vec::new();
    while let Some(word) = words.next() {
        let word = word.as_ref();
        let op = match word.to_ascii_lowercase().as_str() {
            "push" => {
                let arg = words.next().ok_or(ScriptError::MissingOperand("push"))?;
                let arg = arg.as_ref();
                let value = arg.parse().map_err(|source| ScriptError::BadOperand {
                    word: arg.to_string(),
                    source,
                })?;
                Op::Push(value)
            }
            "pop" => Op::Pop,
            "peek" => Op::Peek,
            "empty" => Op::Empty,
            "size" => Op::Size,
            "print" => Op::Print,
            _ => return Err(ScriptError::UnknownOp(word.to_string())),
        };
        ops.push(op);
    }
    Ok(ops)
}

#[test]
fn test_parse_script() {
    let ops = parse_script(["push", "50", "PUSH", "-3", "pop", "peek", "empty", "size", "print"]);
    assert_eq!(
        ops,
        Ok(vec![
            Op::Push(50),
            Op::Push(-3),
            Op::Pop,
            Op::Peek,
            Op::Empty,
            Op::Size,
            Op::Print
        ])
    );
}

#[test]
fn test_parse_empty() {
    let words: [&str; 0] = [];
    assert_eq!(parse_script(words), Ok(vec![]));
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        parse_script(["pop", "shove"]),
        Err(ScriptError::UnknownOp("shove".into()))
    );
    assert_eq!(
        parse_script(["push"]),
        Err(ScriptError::MissingOperand("push"))
    );
    match parse_script(["push", "ten"]) {
        Err(ScriptError::BadOperand { word, .. }) => assert_eq!(word, "ten"),
        r => panic!("unexpected result {:?}", r),
    }
}
