//! Notes Reader
//!
//! Reads the plain-text notes describing each monkey:
//!
//! ```text
//! Monkey 0:
//!   Starting items: 79, 98
//!   Operation: new = old * 19
//!   Test: divisible by 23
//!     If true: throw to monkey 2
//!     If false: throw to monkey 3
//! ```
//!
//! Blocks are separated by blank lines. Indentation is ignored.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::components::actor::Transform;
use crate::error::{KeepawayError, NotesError};
use crate::setup::roster::ActorSpec;

const HEADER: &str = "Monkey ";
const ITEMS: &str = "Starting items:";
const OPERATION: &str = "Operation: new = old ";
const TEST: &str = "Test: divisible by ";
const IF_TRUE: &str = "If true: throw to monkey ";
const IF_FALSE: &str = "If false: throw to monkey ";

/// Parse every monkey block in `text`, in order of appearance
pub fn parse_notes(text: &str) -> Result<Vec<ActorSpec>, NotesError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut specs = Vec::new();
    while let Some((line, header)) = lines.next() {
        let id = header
            .strip_prefix(HEADER)
            .and_then(|rest| rest.strip_suffix(':'))
            .ok_or_else(|| NotesError::new(line, format!("expected `Monkey N:`, found `{}`", header)))
            .and_then(|id| parse_number(line, id, "monkey id"))?;

        let (line, items) = next_field(&mut lines, line, ITEMS)?;
        let items = parse_items(line, items)?;

        let (line, operation) = next_field(&mut lines, line, OPERATION)?;
        let transform = parse_operation(line, operation)?;

        let (line, divisor) = next_field(&mut lines, line, TEST)?;
        let divisor = parse_number(line, divisor, "divisor")?;

        let (line, if_true) = next_field(&mut lines, line, IF_TRUE)?;
        let if_true = parse_number(line, if_true, "true target")?;

        let (line, if_false) = next_field(&mut lines, line, IF_FALSE)?;
        let if_false = parse_number(line, if_false, "false target")?;

        specs.push(ActorSpec {
            id,
            items,
            transform,
            divisor,
            if_true,
            if_false,
        });
    }

    Ok(specs)
}

/// Read and parse a notes file
pub fn load_notes(path: impl AsRef<Path>) -> Result<Vec<ActorSpec>, KeepawayError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| KeepawayError::ReadNotes {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_notes(&text)?)
}

fn next_field<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    previous: usize,
    prefix: &str,
) -> Result<(usize, &'a str), NotesError> {
    let (line, text) = lines.next().ok_or_else(|| {
        NotesError::new(
            previous + 1,
            format!("expected `{}`, found end of notes", prefix.trim_end()),
        )
    })?;
    text.strip_prefix(prefix)
        .map(|rest| (line, rest.trim()))
        .ok_or_else(|| {
            NotesError::new(
                line,
                format!("expected `{}`, found `{}`", prefix.trim_end(), text),
            )
        })
}

fn parse_number<T: FromStr>(line: usize, text: &str, what: &str) -> Result<T, NotesError> {
    text.trim()
        .parse()
        .map_err(|_| NotesError::new(line, format!("invalid {}: `{}`", what, text)))
}

fn parse_items(line: usize, text: &str) -> Result<Vec<u64>, NotesError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|item| parse_number(line, item, "starting item"))
        .collect()
}

fn parse_operation(line: usize, text: &str) -> Result<Transform, NotesError> {
    let (op, operand) = text
        .split_once(' ')
        .ok_or_else(|| NotesError::new(line, format!("invalid operation: `old {}`", text)))?;

    match (op, operand.trim()) {
        ("*", "old") => Ok(Transform::Square),
        ("+", "old") => Ok(Transform::Multiply(2)),
        ("*", k) => parse_number(line, k, "operand").map(Transform::Multiply),
        ("+", k) => parse_number(line, k, "operand").map(Transform::Add),
        _ => Err(NotesError::new(
            line,
            format!("unknown operator `{}`", op),
        )),
    }
}
