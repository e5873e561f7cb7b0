//! Field validation for request DTOs.
//!
//! [`Validator`] collects every problem in a request before failing, so a client learns
//! about all invalid fields at once through the `errors` list of the envelope.

use crate::server::error::AppError;

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a non-blank string. Returns the trimmed value when present.
    pub fn required_text(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => Some(v),
            Some(_) => {
                self.errors.push(format!("{} must not be empty", field));
                None
            }
            None => {
                self.errors.push(format!("{} is required", field));
                None
            }
        }
    }

    /// Rejects a string that is present but blank. Absent is fine.
    pub fn optional_text(&mut self, field: &str, value: Option<String>) -> Option<String> {
        let value = value?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.errors.push(format!("{} must not be empty", field));
            return None;
        }
        Some(trimmed.to_string())
    }

    /// Requires a value to be present.
    pub fn required<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.errors.push(format!("{} is required", field));
        }
        value
    }

    /// Records `message` when `ok` is false.
    pub fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.errors.push(message.into());
        }
    }

    /// Fails with every collected problem, if any.
    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}
