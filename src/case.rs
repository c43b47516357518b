// Test case surface - what the reporter may ask of an engine's test entity

/// Collaborator-supplied test identity.
///
/// The reporter treats tests as opaque apart from this surface: a stable
/// description, and captured output for the kinds of tests that record it.
/// Implementations that do not capture output keep the default body.
pub trait TestCase {
    /// Stable, human-readable identifier (class/method or equivalent)
    fn description(&self) -> String;

    /// Output captured while the test ran, when this kind of test records any
    fn captured_output(&self) -> Option<&str> {
        None
    }
}

/// Plain test identity backed by strings
#[derive(Debug, Clone, Default)]
pub struct NamedTest {
    description: String,
    output: Option<String>,
}

impl NamedTest {
    /// Create a test identity with the given description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            output: None,
        }
    }

    /// Attach captured output to this test identity
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }
}

impl TestCase for NamedTest {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn captured_output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}
