//! Request-scoped identity context and role checks.
//!
//! An authentication collaborator resolves the caller once per request and
//! hands the result to domain operations as an explicit [`SecurityContext`].
//! The context is read-only after construction.

use std::collections::BTreeSet;

use crate::domain::{Error, ErrorCode};

/// Prefix prepended to role names to form authority strings.
pub const ROLE_PREFIX: &str = "ROLE_";

/// Role granted to operators with full access.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Principal name carried by the anonymous placeholder identity.
pub const ANONYMOUS_PRINCIPAL: &str = "anonymousUser";

/// How an [`Authentication`] was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationKind {
    /// Resolved from presented credentials.
    Credentials,
    /// Placeholder attached when no credentials were presented.
    Anonymous,
}

/// Identity attached to a request by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    principal: String,
    authorities: BTreeSet<String>,
    authenticated: bool,
    kind: AuthenticationKind,
}

impl Authentication {
    /// Identity established from valid credentials.
    pub fn authenticated<I, S>(principal: impl Into<String>, authorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            principal: principal.into(),
            authorities: authorities.into_iter().map(Into::into).collect(),
            authenticated: true,
            kind: AuthenticationKind::Credentials,
        }
    }

    /// Identity whose credentials have not (yet) been verified.
    pub fn unauthenticated(principal: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            authorities: BTreeSet::new(),
            authenticated: false,
            kind: AuthenticationKind::Credentials,
        }
    }

    /// The anonymous placeholder.
    ///
    /// It reports itself as authenticated, mirroring how security layers
    /// mark anonymous tokens, but is never accepted as a real identity.
    pub fn anonymous() -> Self {
        Self {
            principal: ANONYMOUS_PRINCIPAL.to_owned(),
            authorities: BTreeSet::from([format!("{ROLE_PREFIX}ANONYMOUS")]),
            authenticated: true,
            kind: AuthenticationKind::Anonymous,
        }
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn authorities(&self) -> &BTreeSet<String> {
        &self.authorities
    }

    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub const fn kind(&self) -> AuthenticationKind {
        self.kind
    }

    fn is_anonymous(&self) -> bool {
        matches!(self.kind, AuthenticationKind::Anonymous)
    }
}

/// Explicit per-request identity context.
///
/// # Examples
/// ```
/// use storefront::domain::{Authentication, SecurityContext};
///
/// let ctx = SecurityContext::new(Authentication::authenticated("alice", ["ROLE_ADMIN"]));
/// assert_eq!(ctx.current_username().expect("identity"), "alice");
/// assert!(ctx.require_admin().is_ok());
///
/// assert!(SecurityContext::empty().current_identity().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityContext {
    authentication: Option<Authentication>,
}

impl SecurityContext {
    pub fn new(authentication: Authentication) -> Self {
        Self {
            authentication: Some(authentication),
        }
    }

    /// Context with no identity attached at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Context carrying the anonymous placeholder.
    pub fn anonymous() -> Self {
        Self::new(Authentication::anonymous())
    }

    /// Raw attached identity, accepted or not.
    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }

    /// Return the caller's identity.
    ///
    /// # Errors
    /// [`ErrorCode::Unauthorized`] when no identity is attached, the identity
    /// is not authenticated, or it is the anonymous placeholder.
    pub fn current_identity(&self) -> Result<&Authentication, Error> {
        match &self.authentication {
            Some(auth) if auth.is_authenticated() && !auth.is_anonymous() => Ok(auth),
            _ => Err(Error::new(ErrorCode::Unauthorized)),
        }
    }

    /// Principal name of the caller.
    pub fn current_username(&self) -> Result<&str, Error> {
        self.current_identity().map(Authentication::principal)
    }

    /// Whether the accepted identity carries `ROLE_<name>` exactly.
    ///
    /// Returns `false` when there is no accepted identity.
    pub fn has_role(&self, name: &str) -> bool {
        let wanted = format!("{ROLE_PREFIX}{name}");
        self.current_identity()
            .map(|auth| auth.authorities().contains(&wanted))
            .unwrap_or(false)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }

    /// # Errors
    /// [`ErrorCode::Unauthorized`] unless the caller holds `ROLE_ADMIN`.
    pub fn require_admin(&self) -> Result<(), Error> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(Error::new(ErrorCode::Unauthorized))
        }
    }

    /// Admit admins and the named user, reject everyone else.
    pub fn require_self_or_admin(&self, username: &str) -> Result<(), Error> {
        let current = self.current_username()?;
        if self.is_admin() || current == username {
            Ok(())
        } else {
            Err(Error::new(ErrorCode::Unauthorized))
        }
    }
}
