//! OpenAPI schema definitions for values that do not derive `ToSchema`
//! themselves.
//!
//! Domain errors stay framework-agnostic; the failure envelope they render to
//! is described here so operations can reference it.

use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// OpenAPI schema for the failure envelope rendered from
/// [`crate::domain::Error`].
///
/// Failures never carry a `result`.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    /// Catalog code of the failure.
    #[schema(example = 1300)]
    code: u16,
    /// Catalog message, or the override supplied at the failure site.
    #[schema(example = "Shop does not exist")]
    message: String,
    /// Moment the envelope was rendered.
    timestamp: DateTime<Utc>,
    /// Request path without the query string.
    #[schema(example = "/shops/3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    path: String,
}
