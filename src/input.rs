use crate::output;
use crate::stack::SortedStack;
use std::io::Write;
use std::num::ParseIntError;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const PROMPT: &str = "> ";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write prompt: {0}")]
    Prompt(#[source] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{text}' is not a valid integer ({source})")]
pub struct InvalidNumber {
    pub text: String,
    #[source]
    pub source: ParseIntError,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSummary {
    pub accepted: usize,
    pub rejected: usize,
    /// False when the stream ran out before a blank line was seen.
    pub ended_by_blank_line: bool,
}

/// Parse one line of input.
///
/// Returns `Ok(None)` for a blank line, which ends input.
pub fn parse_line(line: &str) -> Result<Option<i32>, InvalidNumber> {
    let text = line.trim();
    if text.is_empty() {
        return Ok(None);
    }

    text.parse::<i32>()
        .map(Some)
        .map_err(|source| InvalidNumber {
            text: text.to_string(),
            source,
        })
}

/// Read integers line by line into `stack` until a blank line or end of
/// stream. Malformed lines are reported and skipped.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD, so such a line is
/// skipped like any other malformed line.
///
/// When `prompt` is set, a prompt is written to `out` before every line.
pub async fn read_numbers<R, W>(
    reader: R,
    out: &mut W,
    prompt: bool,
    stack: &mut SortedStack,
) -> Result<InputSummary, InputError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.split(b'\n');
    let mut summary = InputSummary::default();
    let mut line_number = 0usize;

    loop {
        if prompt {
            write!(out, "{}", PROMPT)
                .and_then(|_| out.flush())
                .map_err(InputError::Prompt)?;
        }

        let Some(bytes) = lines.next_segment().await? else {
            break;
        };
        let line = String::from_utf8_lossy(&bytes);
        line_number += 1;

        match parse_line(&line) {
            Ok(Some(value)) => {
                stack.insert(value);
                summary.accepted += 1;
            }
            Ok(None) => {
                summary.ended_by_blank_line = true;
                break;
            }
            Err(e) => {
                output::warn(&format!("line {}: {}, skipping", line_number, e));
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}
