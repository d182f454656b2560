//! Welcome banner and final results.

use crate::config::OutputFormat;
use crate::error::SessionError;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

const EMPTY_LIST: &str = "[Stack Empty]";

/// Results as written in JSON mode
#[derive(Debug, Serialize)]
pub struct ResultsReport<'a> {
    pub numbers: &'a [i32],
    pub count: usize,
}

pub struct ConsoleDisplay {
    format: OutputFormat,
    color: bool,
}

impl ConsoleDisplay {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Print the welcome banner and instructions. Nothing is written in JSON
    /// mode.
    pub fn show_welcome<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }

        let title = "=== Sorted Stack Program ===";
        if self.color {
            writeln!(out, "{}", title.bright_cyan().bold())?;
        } else {
            writeln!(out, "{}", title)?;
        }
        writeln!(out, "Enter integer numbers (one per line).")?;
        writeln!(out, "Press Enter on an empty line to finish input.")?;
        writeln!(
            out,
            "Numbers will be stored in a Stack and displayed sorted from smallest to largest."
        )?;
        writeln!(out)?;
        Ok(())
    }

    pub fn show_results<W: Write>(&self, out: &mut W, numbers: &[i32]) -> Result<(), SessionError> {
        match self.format {
            OutputFormat::Text => {
                let heading = "=== Final Results ===";
                writeln!(out)?;
                if self.color {
                    writeln!(out, "{}", heading.bright_green().bold())?;
                } else {
                    writeln!(out, "{}", heading)?;
                }
                writeln!(
                    out,
                    "Stack contents sorted (smallest to largest): {}",
                    format_list(numbers)
                )?;
                writeln!(out, "Total numbers in Stack: {}", numbers.len())?;
            }
            OutputFormat::Json => {
                let report = ResultsReport {
                    numbers,
                    count: numbers.len(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Render numbers as `[a, b, c]`, or `[Stack Empty]` when there are none.
pub fn format_list(numbers: &[i32]) -> String {
    if numbers.is_empty() {
        return EMPTY_LIST.to_string();
    }

    let items: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), SessionError>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[]), "[Stack Empty]");
        assert_eq!(format_list(&[7]), "[7]");
        assert_eq!(format_list(&[-1, 2, 3]), "[-1, 2, 3]");
    }

    #[test]
    fn test_text_results() {
        let display = ConsoleDisplay::new(OutputFormat::Text, false);
        let text = render(|out| display.show_results(out, &[1, 2, 3]));
        assert_eq!(
            text,
            "\n=== Final Results ===\n\
             Stack contents sorted (smallest to largest): [1, 2, 3]\n\
             Total numbers in Stack: 3\n"
        );
    }

    #[test]
    fn test_text_results_empty() {
        let display = ConsoleDisplay::new(OutputFormat::Text, false);
        let text = render(|out| display.show_results(out, &[]));
        assert!(text.contains("[Stack Empty]"));
        assert!(text.contains("Total numbers in Stack: 0"));
    }

    #[test]
    fn test_welcome_text() {
        let display = ConsoleDisplay::new(OutputFormat::Text, false);
        let text = render(|out| display.show_welcome(out));
        assert!(text.starts_with("=== Sorted Stack Program ===\n"));
        assert!(text.contains("Press Enter on an empty line to finish input."));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_json_mode() {
        let display = ConsoleDisplay::new(OutputFormat::Json, true);
        assert!(render(|out| display.show_welcome(out)).is_empty());

        let text = render(|out| display.show_results(out, &[-4, 0, 4]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["numbers"], serde_json::json!([-4, 0, 4]));
        assert_eq!(value["count"], 3);
    }
}
