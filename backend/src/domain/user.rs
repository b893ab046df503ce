//! User accounts and delivery addresses.
//!
//! Credentials are owned by the external authentication layer; the storefront
//! only keeps the profile data it needs to authorise requests and ship orders.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::UserId;
use super::security::{ADMIN_ROLE, ROLE_PREFIX};

/// Role assigned to every registered customer.
pub const USER_ROLE: &str = "USER";

/// Return true if `email` is a university address (`hust.edu.vn` or
/// `sis.hust.edu.vn`).
///
/// ```
/// use storefront::domain::is_campus_email;
///
/// assert!(is_campus_email("an.nv@sis.hust.edu.vn"));
/// assert!(!is_campus_email("an.nv@gmail.com"));
/// ```
pub fn is_campus_email(email: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@(sis\.)?hust\.edu\.vn$").expect("valid email regex")
    });
    RE.is_match(email)
}

/// Delivery address attached to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub phone: String,
    /// Recipient name.
    pub name: String,
    pub address_detail: String,
    /// Administrative ward code used by shipping providers.
    pub ward_code: String,
}

/// Storefront user profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// Unique login name; matches the authentication principal.
    pub username: String,
    pub fullname: Option<String>,
    pub email: Option<String>,
    /// Role names without the authority prefix, e.g. `USER`, `ADMIN`.
    pub roles: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub address: Option<Address>,
}

impl User {
    /// Create a customer with the default `USER` role.
    pub fn new(username: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: UserId::random(),
            username: username.into(),
            fullname: None,
            email: None,
            roles: BTreeSet::from([USER_ROLE.to_owned()]),
            created_at,
            address: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(ADMIN_ROLE)
    }

    /// Authority strings (`ROLE_<name>`) derived from the role set.
    pub fn authorities(&self) -> impl Iterator<Item = String> + '_ {
        self.roles.iter().map(|role| format!("{ROLE_PREFIX}{role}"))
    }
}
