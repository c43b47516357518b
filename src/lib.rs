pub mod case;
pub mod report;
pub mod signal;

pub use case::{NamedTest, TestCase};
pub use report::{Diagnostic, ReportError, ReportResult, Reporter, TapReporter};
pub use signal::{Comparison, Signal};
