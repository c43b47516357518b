// Signal model - engine notifications about the test in flight

use serde::Serialize;
use serde_json::Value;

/// Actual/expected pair from a structured expectation mismatch.
///
/// Values are carried verbatim, scalar or structured, exactly as the
/// comparison exposed them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub got: Value,
    pub expected: Value,
}

impl Comparison {
    /// Create a comparison from anything serializable to JSON values
    pub fn new(got: impl Into<Value>, expected: impl Into<Value>) -> Self {
        Self {
            got: got.into(),
            expected: expected.into(),
        }
    }
}

/// Notification kinds the engine can raise for the test in flight
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Unexpected error while running the test
    Error { message: String },
    /// Non-fatal warning raised by the test
    Warning { message: String },
    /// Assertion failure, optionally with the mismatched values
    Failure {
        message: String,
        comparison: Option<Comparison>,
    },
    /// Test declared itself incomplete
    Incomplete { message: String },
    /// Test flagged as risky by the engine
    Risky { message: String },
    /// Test skipped
    Skipped { message: String },
}

impl Signal {
    /// Create a failure signal
    pub fn failure(message: impl Into<String>, comparison: Option<Comparison>) -> Self {
        Self::Failure {
            message: message.into(),
            comparison,
        }
    }

    /// Message carried by this signal
    pub fn message(&self) -> &str {
        match self {
            Self::Error { message }
            | Self::Warning { message }
            | Self::Failure { message, .. }
            | Self::Incomplete { message }
            | Self::Risky { message }
            | Self::Skipped { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comparison_new_scalars() {
        let cmp = Comparison::new("foo", "bar");
        assert_eq!(cmp.got, json!("foo"));
        assert_eq!(cmp.expected, json!("bar"));
    }

    #[test]
    fn test_comparison_new_structured() {
        let cmp = Comparison::new(json!({"a": 1}), json!({"a": 2}));
        assert_eq!(cmp.got["a"], json!(1));
        assert_eq!(cmp.expected["a"], json!(2));
    }

    #[test]
    fn test_signal_failure_carries_comparison() {
        let signal = Signal::failure("mismatch", Some(Comparison::new(1, 2)));
        match signal {
            Signal::Failure { message, comparison } => {
                assert_eq!(message, "mismatch");
                assert!(comparison.is_some());
            }
            _ => panic!("expected failure signal"),
        }
    }

    #[test]
    fn test_signal_message_accessor() {
        let signal = Signal::Skipped {
            message: "missing fixture".to_string(),
        };
        assert_eq!(signal.message(), "missing fixture");
    }
}
