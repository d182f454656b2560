use crate::config::Config;
use crate::display::ConsoleDisplay;
use crate::error::SessionError;
use crate::input::{self, InputSummary};
use crate::output;
use crate::stack::SortedStack;
use std::io::Write;
use tokio::io::AsyncBufRead;

pub struct Session {
    pub config: Config,
    pub stack: SortedStack,
    display: ConsoleDisplay,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let display = ConsoleDisplay::new(config.format, config.color);
        Self {
            config,
            stack: SortedStack::new(),
            display,
        }
    }

    /// Show the welcome banner, read numbers from `input`, then print the
    /// sorted results to `out`.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<InputSummary, SessionError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        if !self.config.quiet {
            self.display.show_welcome(out)?;
        }

        let summary =
            input::read_numbers(input, out, self.config.prompt, &mut self.stack).await?;

        if !self.config.quiet {
            output::info(&format!(
                "Read {} number(s), skipped {} invalid line(s)",
                summary.accepted, summary.rejected
            ));
            if !summary.ended_by_blank_line {
                output::info("Input ended without a blank line");
            }
        }

        self.display.show_results(out, &self.stack.snapshot())?;
        Ok(summary)
    }
}
