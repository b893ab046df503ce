//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies implement [`Validate`] by listing their field violations.
//! Handlers call [`Validate::validate`] before reaching the domain, so every
//! violation is reported at once under the validation catalog entry.

use std::str::FromStr;

use crate::domain::{Error, ErrorCode};

/// Request payloads that can describe their own field violations.
pub trait Validate {
    /// Human-readable violations, empty when the payload is acceptable.
    fn violations(&self) -> Vec<String>;

    /// Fail with every violation joined into a single message.
    fn validate(&self) -> Result<(), Error> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(violations))
        }
    }
}

/// Collects violations for one payload.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<String>);

impl Violations {
    pub(crate) fn not_blank(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.0.push(format!("{field} must not be blank"));
        }
        self
    }

    pub(crate) fn not_negative(mut self, field: &str, value: f64) -> Self {
        if !(value >= 0.0) {
            self.0.push(format!("{field} must not be negative"));
        }
        self
    }

    pub(crate) fn check(mut self, ok: bool, message: &str) -> Self {
        if !ok {
            self.0.push(message.to_owned());
        }
        self
    }

    pub(crate) fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Parse a path identifier, mapping failures to the entity's not-found entry.
///
/// An identifier that cannot name any stored entity behaves like one that
/// names no stored entity.
pub(crate) fn parse_id<T: FromStr>(raw: &str, missing: ErrorCode) -> Result<T, Error> {
    raw.parse().map_err(|_| Error::new(missing))
}
