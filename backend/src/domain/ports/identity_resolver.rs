//! Driven port resolving presented bearer tokens into identities.
//!
//! Token issuance and verification belong to the external authentication
//! service. The storefront only asks it who a token belongs to.
use async_trait::async_trait;

use crate::domain::Authentication;

use super::define_port_error;

define_port_error! {
    /// Failures raised while resolving a token.
    pub enum IdentityResolutionError {
        /// The authentication backend could not be reached.
        Unavailable { message: String } => "identity backend unavailable: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Return the identity owning `token`, or `None` when the token is unknown.
    async fn resolve(&self, token: &str) -> Result<Option<Authentication>, IdentityResolutionError>;
}

/// Resolver that recognises no tokens, leaving every caller anonymous.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityResolver;

#[async_trait]
impl IdentityResolver for FixtureIdentityResolver {
    async fn resolve(
        &self,
        _token: &str,
    ) -> Result<Option<Authentication>, IdentityResolutionError> {
        Ok(None)
    }
}
