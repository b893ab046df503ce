//! Domain-level error types.
//!
//! These errors are transport agnostic. [`ErrorCode`] is the closed catalog of
//! failure conditions, each carrying a stable numeric code and a default
//! message. Inbound adapters pair every entry with a protocol status and turn
//! [`Error`] values into response envelopes.

use std::fmt;

/// Closed catalog of failure conditions.
///
/// Numeric codes are partitioned by leading digits per domain: 1000s are
/// request-level failures, 1100s authentication, 1200s users, 1300s shops,
/// 1400s categories, 1500s products, 1600s carts, 1700s orders, 1800s
/// addresses, 1900 generic invalid values, 2000 payments and 9999 the
/// uncategorized catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Anything the other entries do not describe.
    UncategorizedException,
    /// Request body failed field validation.
    ValidationError,
    /// The resource exists but does not accept the HTTP method.
    MethodNotAllowed,
    /// The request body could not be parsed.
    JsonParseError,

    /// No credentials were presented.
    Unauthenticated,
    /// The caller is not permitted to perform the operation.
    Unauthorized,
    /// The presented token is malformed or revoked.
    InvalidToken,
    /// The presented token has expired.
    TokenExpired,

    UsernameExisted,
    UsernameInvalid,
    PasswordInvalid,
    UserNotExist,
    InvalidEmail,
    EmailExisted,
    EmailSendFailed,

    ShopNotExist,

    CategoryExisted,
    CategoryNotExist,
    CategoryUsedByProduct,

    ProductNotExist,

    CartEmpty,
    CartItemNotExist,

    OrderNotExist,

    WardNotFound,
    AddressNotFound,

    /// A field carries a value outside its accepted range.
    InvalidValue,

    PaymentFailed,
}

impl ErrorCode {
    /// Every catalog entry, in declaration order.
    pub const ALL: [Self; 27] = [
        Self::UncategorizedException,
        Self::ValidationError,
        Self::MethodNotAllowed,
        Self::JsonParseError,
        Self::Unauthenticated,
        Self::Unauthorized,
        Self::InvalidToken,
        Self::TokenExpired,
        Self::UsernameExisted,
        Self::UsernameInvalid,
        Self::PasswordInvalid,
        Self::UserNotExist,
        Self::InvalidEmail,
        Self::EmailExisted,
        Self::EmailSendFailed,
        Self::ShopNotExist,
        Self::CategoryExisted,
        Self::CategoryNotExist,
        Self::CategoryUsedByProduct,
        Self::ProductNotExist,
        Self::CartEmpty,
        Self::CartItemNotExist,
        Self::OrderNotExist,
        Self::WardNotFound,
        Self::AddressNotFound,
        Self::InvalidValue,
        Self::PaymentFailed,
    ];

    /// Stable numeric code reported to clients.
    pub const fn code(self) -> u16 {
        match self {
            Self::UncategorizedException => 9999,
            Self::ValidationError => 1000,
            Self::MethodNotAllowed => 1001,
            Self::JsonParseError => 1002,
            Self::Unauthenticated => 1100,
            Self::Unauthorized => 1101,
            Self::InvalidToken => 1102,
            Self::TokenExpired => 1103,
            Self::UsernameExisted => 1200,
            Self::UsernameInvalid => 1201,
            Self::PasswordInvalid => 1202,
            Self::UserNotExist => 1203,
            Self::InvalidEmail => 1204,
            Self::EmailExisted => 1205,
            Self::EmailSendFailed => 1206,
            Self::ShopNotExist => 1300,
            Self::CategoryExisted => 1400,
            Self::CategoryNotExist => 1401,
            Self::CategoryUsedByProduct => 1402,
            Self::ProductNotExist => 1500,
            Self::CartEmpty => 1600,
            Self::CartItemNotExist => 1601,
            Self::OrderNotExist => 1700,
            Self::WardNotFound => 1800,
            Self::AddressNotFound => 1801,
            Self::InvalidValue => 1900,
            Self::PaymentFailed => 2000,
        }
    }

    /// Default human-readable message.
    pub const fn message(self) -> &'static str {
        match self {
            Self::UncategorizedException => "Uncategorized Exception",
            Self::ValidationError => "Validation failed",
            Self::MethodNotAllowed => "Method not allowed",
            Self::JsonParseError => "Invalid JSON format",
            Self::Unauthenticated => "Unauthenticated",
            Self::Unauthorized => "You do not have permission",
            Self::InvalidToken => "Invalid token",
            Self::TokenExpired => "Token has expired",
            Self::UsernameExisted => "User already exists",
            Self::UsernameInvalid => "Username must be at least 3 characters",
            Self::PasswordInvalid => "Password must be at least 8 characters",
            Self::UserNotExist => "User does not exist",
            Self::InvalidEmail => "Your email must be HUST email",
            Self::EmailExisted => "Email already existed",
            Self::EmailSendFailed => "Email send failed",
            Self::ShopNotExist => "Shop does not exist",
            Self::CategoryExisted => "Category already exists",
            Self::CategoryNotExist => "Category does not exist",
            Self::CategoryUsedByProduct => "Category is used by product",
            Self::ProductNotExist => "Product does not exist",
            Self::CartEmpty => "Cart is empty",
            Self::CartItemNotExist => "Cart item does not exist",
            Self::OrderNotExist => "Order does not exist",
            Self::WardNotFound => "Ward not found",
            Self::AddressNotFound => "Address does not exist",
            Self::InvalidValue => "Invalid value",
            Self::PaymentFailed => "Payment failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.message())
    }
}

/// Separator placed between individual field violations.
pub const VIOLATION_SEPARATOR: &str = "; ";

/// Typed application error carrying a catalog entry.
///
/// The client-facing message is the override supplied at construction time,
/// falling back to the entry's default message. The optional cause is kept
/// for server-side logs only.
///
/// # Examples
/// ```
/// use storefront::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::ShopNotExist);
/// assert_eq!(err.code().code(), 1300);
/// assert_eq!(err.message(), "Shop does not exist");
///
/// let err = Error::with_message(ErrorCode::InvalidValue, "quantity must be positive");
/// assert_eq!(err.message(), "quantity must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: Option<String>,
    cause: Option<String>,
}

impl Error {
    /// Raise the catalog entry with its default message.
    pub const fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            cause: None,
        }
    }

    /// Raise the catalog entry with a caller-supplied message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            cause: None,
        }
    }

    /// Input-validation failure joining every violation into one message.
    ///
    /// An empty violation list keeps the default catalog message.
    pub fn validation<I, S>(violations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = violations
            .into_iter()
            .map(|violation| violation.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(VIOLATION_SEPARATOR);
        if joined.is_empty() {
            Self::new(ErrorCode::ValidationError)
        } else {
            Self::with_message(ErrorCode::ValidationError, joined)
        }
    }

    /// Unanticipated fault. The detail is retained for logs only.
    pub fn internal(cause: impl Into<String>) -> Self {
        Self::new(ErrorCode::UncategorizedException).with_cause(cause)
    }

    /// Attach a server-side diagnostic.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Catalog entry describing this failure.
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Client-facing message: the override when present, else the default.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(self.code.message())
    }

    /// Caller-supplied override, if any.
    pub fn override_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Server-side diagnostic, never sent to clients.
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {cause}", self.message()),
            None => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for Error {}
