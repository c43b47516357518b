// TAP reporter - streams test results in Test Anything Protocol version 13

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use super::diagnostics::Diagnostic;
use super::{ReportResult, Reporter};
use crate::case::TestCase;
use crate::signal::{Comparison, Signal};

/// Streaming TAP v13 reporter.
///
/// Owns its sink for the whole report run and writes one line at a time as
/// lifecycle events arrive. The protocol header is written at construction;
/// the plan line is written when the outermost suite closes.
pub struct TapReporter {
    sink: Box<dyn Write>,
    test_number: usize,
    suite_depth: usize,
    test_ok: bool,
}

impl TapReporter {
    /// Create a reporter writing to the given sink
    pub fn new(sink: impl Write + 'static) -> ReportResult<Self> {
        let mut reporter = Self {
            sink: Box::new(sink),
            test_number: 0,
            suite_depth: 0,
            test_ok: true,
        };
        reporter.write_line("TAP version 13")?;
        Ok(reporter)
    }

    /// Create a reporter writing to standard output
    pub fn stdout() -> ReportResult<Self> {
        Self::new(io::stdout())
    }

    /// Create a reporter writing to a file, created or truncated
    pub fn to_file(path: impl AsRef<Path>) -> ReportResult<Self> {
        Self::new(File::create(path)?)
    }

    /// An error occurred
    pub fn on_error(&mut self, test: &dyn TestCase, message: impl Into<String>) -> ReportResult<()> {
        self.on_signal(
            test,
            &Signal::Error {
                message: message.into(),
            },
        )
    }

    /// A warning occurred
    pub fn on_warning(
        &mut self,
        test: &dyn TestCase,
        message: impl Into<String>,
    ) -> ReportResult<()> {
        self.on_signal(
            test,
            &Signal::Warning {
                message: message.into(),
            },
        )
    }

    /// An assertion failed
    pub fn on_failure(
        &mut self,
        test: &dyn TestCase,
        message: impl Into<String>,
        comparison: Option<Comparison>,
    ) -> ReportResult<()> {
        self.on_signal(test, &Signal::failure(message, comparison))
    }

    /// The test declared itself incomplete
    pub fn on_incomplete(
        &mut self,
        test: &dyn TestCase,
        message: impl Into<String>,
    ) -> ReportResult<()> {
        self.on_signal(
            test,
            &Signal::Incomplete {
                message: message.into(),
            },
        )
    }

    /// The engine flagged the test as risky
    pub fn on_risky(&mut self, test: &dyn TestCase, message: impl Into<String>) -> ReportResult<()> {
        self.on_signal(
            test,
            &Signal::Risky {
                message: message.into(),
            },
        )
    }

    /// The test was skipped
    pub fn on_skipped(
        &mut self,
        test: &dyn TestCase,
        message: impl Into<String>,
    ) -> ReportResult<()> {
        self.on_signal(
            test,
            &Signal::Skipped {
                message: message.into(),
            },
        )
    }

    fn write_line(&mut self, line: &str) -> ReportResult<()> {
        writeln!(self.sink, "{}", line)?;
        self.sink.flush()?;
        Ok(())
    }

    /// `not ok N - <kind>: <description> # <directive>`, with empty segments
    /// dropped together with their separators.
    fn write_not_ok(&mut self, test: &dyn TestCase, kind: &str, directive: &str) -> ReportResult<()> {
        let prefix = if kind.is_empty() {
            String::new()
        } else {
            format!("{}: ", kind)
        };
        let suffix = if directive.is_empty() {
            String::new()
        } else {
            format!(" # {}", directive)
        };

        self.write_line(&format!(
            "not ok {} - {}{}{}",
            self.test_number,
            prefix,
            test.description(),
            suffix
        ))?;
        self.test_ok = false;
        Ok(())
    }

    /// `ok N - # <directive> <message>`. The run stays `ok` in TAP terms;
    /// clearing `test_ok` only suppresses the generic success line later.
    fn write_directive(&mut self, directive: &str, message: &str) -> ReportResult<()> {
        let suffix = if message.is_empty() {
            String::new()
        } else {
            format!(" {}", message)
        };

        self.write_line(&format!("ok {} - # {}{}", self.test_number, directive, suffix))?;
        self.test_ok = false;
        Ok(())
    }

    fn echo_captured_output(&mut self, test: &dyn TestCase) -> ReportResult<()> {
        let Some(output) = test.captured_output() else {
            return Ok(());
        };
        let trimmed = output.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        tracing::debug!("echoing captured output for '{}'", test.description());
        for line in trimmed.lines() {
            self.write_line(&format!("# {}", line))?;
        }
        Ok(())
    }
}

impl Reporter for TapReporter {
    fn on_suite_start(&mut self) -> ReportResult<()> {
        self.suite_depth += 1;
        tracing::trace!("suite started, depth {}", self.suite_depth);
        Ok(())
    }

    fn on_suite_end(&mut self) -> ReportResult<()> {
        if self.suite_depth == 0 {
            return Ok(());
        }
        self.suite_depth -= 1;
        tracing::trace!("suite ended, depth {}", self.suite_depth);

        if self.suite_depth == 0 {
            self.write_line(&format!("1..{}", self.test_number))?;
        }
        Ok(())
    }

    fn on_test_start(&mut self, test: &dyn TestCase) -> ReportResult<()> {
        self.test_number += 1;
        self.test_ok = true;
        tracing::trace!("test {} started: {}", self.test_number, test.description());
        Ok(())
    }

    fn on_test_end(&mut self, test: &dyn TestCase) -> ReportResult<()> {
        if self.test_ok {
            self.write_line(&format!("ok {} - {}", self.test_number, test.description()))?;
        }
        self.echo_captured_output(test)
    }

    fn on_signal(&mut self, test: &dyn TestCase, signal: &Signal) -> ReportResult<()> {
        match signal {
            Signal::Error { .. } => self.write_not_ok(test, "Error", "")?,
            Signal::Warning { .. } => self.write_not_ok(test, "Warning", "")?,
            Signal::Failure {
                message,
                comparison,
            } => {
                self.write_not_ok(test, "Failure", "")?;

                let block = Diagnostic::failure(message, comparison.as_ref()).render_block()?;
                tracing::debug!("attaching diagnostic block to test {}", self.test_number);
                self.sink.write_all(block.as_bytes())?;
                self.sink.flush()?;
            }
            Signal::Incomplete { .. } => self.write_not_ok(test, "", "TODO Incomplete Test")?,
            Signal::Risky { message } => self.write_directive("RISKY", message)?,
            Signal::Skipped { message } => self.write_directive("SKIP", message)?,
        }
        Ok(())
    }
}
