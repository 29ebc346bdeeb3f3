//! CLI result presenter.

use std::io::{self, Write};

use spinwheel_core::SpinOutcome;

use crate::output::{outcome_details, outcome_json, result_line};
use crate::ui;

/// How a finished headless spin is printed.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }

    /// Lines to print for `outcome`, without styling.
    pub fn lines(&self, outcome: &SpinOutcome) -> Result<Vec<String>, serde_json::Error> {
        if self.json {
            return Ok(vec![outcome_json(outcome)?]);
        }
        let mut lines = Vec::new();
        if self.verbose && !self.quiet {
            lines.extend(outcome_details(outcome));
        }
        lines.push(result_line(outcome));
        Ok(lines)
    }

    /// Write the outcome to `out`.
    pub fn write_outcome(&self, out: &mut dyn Write, outcome: &SpinOutcome) -> io::Result<()> {
        for line in self.lines(outcome)? {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Print the outcome on stdout; the result line is highlighted.
    pub fn present_outcome(&self, outcome: &SpinOutcome) -> io::Result<()> {
        if self.json || self.quiet {
            return self.write_outcome(&mut io::stdout().lock(), outcome);
        }
        let lines = self.lines(outcome)?;
        if let Some((last, details)) = lines.split_last() {
            for line in details {
                println!("{line}");
            }
            ui::print_result(last);
        }
        Ok(())
    }

    /// Print an error on stderr.
    pub fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
