// Report module - protocol emission and reporting

pub mod diagnostics;
pub mod tap;

use std::io;

pub use diagnostics::{Diagnostic, DiagnosticData, Severity};
pub use tap::TapReporter;
use thiserror::Error;

use crate::case::TestCase;
use crate::signal::Signal;

/// Result type for report emission
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors raised while emitting a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// The sink rejected a write; the report cannot continue
    #[error("failed to write report line: {0}")]
    Write(#[from] io::Error),

    /// A diagnostic block could not be encoded
    #[error("failed to encode diagnostic block: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Reporter trait
///
/// The event surface a test-execution engine drives. Events arrive one at a
/// time, strictly ordered; receivers are `&mut self` because there is exactly
/// one writer per report run.
pub trait Reporter {
    /// Called when a suite starts
    fn on_suite_start(&mut self) -> ReportResult<()>;

    /// Called when a suite ends
    fn on_suite_end(&mut self) -> ReportResult<()>;

    /// Called when a test starts
    fn on_test_start(&mut self, test: &dyn TestCase) -> ReportResult<()>;

    /// Called when a test finishes
    fn on_test_end(&mut self, test: &dyn TestCase) -> ReportResult<()>;

    /// Called when the engine raises a signal for the test in flight
    fn on_signal(&mut self, test: &dyn TestCase, signal: &Signal) -> ReportResult<()>;
}
