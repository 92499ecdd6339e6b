// Request validation.
//
// Every request type implements `Validate`; resource clients run it just
// before dispatch and turn a non-empty result into `Error::Validation`.

use tracing::warn;

use crate::error::Error;

/// Ordered violation messages for one request. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    messages: Vec<String>,
}

impl ValidationResult {
    pub fn builder() -> ValidationResultBuilder {
        ValidationResultBuilder::default()
    }

    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// `Ok(())` when valid, otherwise `Error::Validation` with every message.
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::Validation {
                messages: self.messages,
            })
        }
    }
}

/// Accumulates messages while a `Validate` impl walks its fields.
#[derive(Debug, Default)]
pub struct ValidationResultBuilder {
    messages: Vec<String>,
}

impl ValidationResultBuilder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Add `message` when `violated` holds.
    pub fn check(self, violated: bool, message: &str) -> Self {
        if violated { self.message(message) } else { self }
    }

    /// Append the messages of a nested result, keeping their order.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.messages.extend(other.messages);
        self
    }

    pub fn build(self) -> ValidationResult {
        ValidationResult {
            messages: self.messages,
        }
    }
}

/// Capability shared by every request type: a pure check of its own fields.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

/// Validate `request`, logging and returning the violations as an error.
pub(crate) fn ensure_valid<R: Validate>(request: &R, operation: &str) -> Result<(), Error> {
    let result = request.validate();
    if !result.is_valid() {
        warn!(operation, messages = ?result.messages(), "request failed validation");
    }
    result.into_result()
}
