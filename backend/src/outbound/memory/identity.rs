//! Bearer-token table standing in for the external authentication service.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::ports::{IdentityResolutionError, IdentityResolver};
use crate::domain::{Authentication, User};

/// Resolver over a fixed token table.
///
/// # Examples
/// ```
/// use storefront::domain::Authentication;
/// use storefront::outbound::memory::StaticTokenResolver;
///
/// let resolver = StaticTokenResolver::default()
///     .with_token("t0k3n", Authentication::authenticated("alice", ["ROLE_USER"]));
/// assert_eq!(resolver.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTokenResolver {
    tokens: HashMap<String, Authentication>,
}

impl StaticTokenResolver {
    pub fn with_token(mut self, token: impl Into<String>, authentication: Authentication) -> Self {
        self.tokens.insert(token.into(), authentication);
        self
    }

    /// Issue `token` for `user`, granting the user's role authorities.
    pub fn with_user(self, token: impl Into<String>, user: &User) -> Self {
        let authentication =
            Authentication::authenticated(user.username.clone(), user.authorities());
        self.with_token(token, authentication)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl IdentityResolver for StaticTokenResolver {
    async fn resolve(
        &self,
        token: &str,
    ) -> Result<Option<Authentication>, IdentityResolutionError> {
        Ok(self.tokens.get(token).cloned())
    }
}
