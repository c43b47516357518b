// Failure diagnostics - YAML block attached to a `not ok` line

use serde::Serialize;
use serde_json::Value;

use super::ReportResult;
use crate::signal::Comparison;

/// Diagnostic attached to a failed result line
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DiagnosticData>,
}

/// Severity of a diagnostic block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fail,
}

/// Mismatched values from a comparison failure
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticData {
    pub got: Value,
    pub expected: Value,
}

impl Diagnostic {
    /// Build a failure diagnostic from the rendered message and an optional
    /// comparison.
    ///
    /// Only the first line of the message is kept; multi-line detail reaches
    /// the consumer through the captured-output echo instead.
    pub fn failure(message: &str, comparison: Option<&Comparison>) -> Self {
        Self {
            message: message.lines().next().unwrap_or("").to_string(),
            severity: Severity::Fail,
            data: comparison.map(|cmp| DiagnosticData {
                got: cmp.got.clone(),
                expected: cmp.expected.clone(),
            }),
        }
    }

    /// Render the TAP diagnostic block: `  ---` / YAML body / `  ...`, with
    /// the body indented to align under the markers.
    pub fn render_block(&self) -> ReportResult<String> {
        let yaml = serde_yaml_ng::to_string(self)?;

        let mut block = String::from("  ---\n");
        for line in yaml.lines() {
            if line.is_empty() {
                block.push('\n');
            } else {
                block.push_str("  ");
                block.push_str(line);
                block.push('\n');
            }
        }
        block.push_str("  ...\n");

        Ok(block)
    }
}
