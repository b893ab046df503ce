//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning every
//! failure surfacing from request handling into the response envelope with
//! the catalog entry's status. Framework failures (malformed bodies, bad path
//! segments, unknown methods and routes) are routed through the same mapping.

use actix_web::dev::ServiceResponse;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::envelope::ApiResponse;
use crate::middleware::trace::current_path;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// HTTP status paired with each catalog entry.
pub const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::UncategorizedException => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorCode::Unauthorized => StatusCode::FORBIDDEN,
        ErrorCode::UserNotExist | ErrorCode::ShopNotExist => StatusCode::NOT_FOUND,
        ErrorCode::ValidationError
        | ErrorCode::JsonParseError
        | ErrorCode::InvalidToken
        | ErrorCode::TokenExpired
        | ErrorCode::UsernameExisted
        | ErrorCode::UsernameInvalid
        | ErrorCode::PasswordInvalid
        | ErrorCode::InvalidEmail
        | ErrorCode::EmailExisted
        | ErrorCode::EmailSendFailed
        | ErrorCode::CategoryExisted
        | ErrorCode::CategoryNotExist
        | ErrorCode::CategoryUsedByProduct
        | ErrorCode::ProductNotExist
        | ErrorCode::CartEmpty
        | ErrorCode::CartItemNotExist
        | ErrorCode::OrderNotExist
        | ErrorCode::WardNotFound
        | ErrorCode::AddressNotFound
        | ErrorCode::InvalidValue
        | ErrorCode::PaymentFailed => StatusCode::BAD_REQUEST,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let path = current_path().unwrap_or_default();
        match self.code() {
            ErrorCode::UncategorizedException => error!(
                path = %path,
                error = %self,
                "unhandled fault at request boundary"
            ),
            code => error!(
                path = %path,
                code = code.code(),
                message = self.message(),
                "request failed"
            ),
        }
        ApiResponse::failure(self).respond(self.status_code())
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        Error::internal(err.to_string())
    }
}

/// Body extraction failures report the JSON parse entry.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::new(ErrorCode::JsonParseError)
        .with_cause(err.to_string())
        .into()
}

/// Malformed path segments report the generic invalid-value entry.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::new(ErrorCode::InvalidValue)
        .with_cause(err.to_string())
        .into()
}

/// Malformed query strings report the generic invalid-value entry.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::new(ErrorCode::InvalidValue)
        .with_cause(err.to_string())
        .into()
}

/// Replace the framework's bare 405 with the method-not-allowed envelope.
pub fn method_not_allowed<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, _) = res.into_parts();
    let response = Error::new(ErrorCode::MethodNotAllowed).error_response();
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body::<B>(),
    ))
}

/// Fallback for requests matching no route.
pub async fn unknown_route() -> HttpResponse {
    Error::internal("no route matches the request").error_response()
}

#[cfg(test)]
mod tests;
