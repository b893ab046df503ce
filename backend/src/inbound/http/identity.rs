//! Request-scoped identity extraction.
//!
//! Handlers take a [`SecurityContext`] argument. It is built from the
//! [`Authentication`] that the `Authenticate` middleware stored in the request
//! extensions. Requests that bypassed the middleware get an empty context,
//! which every identity check rejects.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::domain::{Authentication, Error, SecurityContext};

impl FromRequest for SecurityContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let context = req
            .extensions()
            .get::<Authentication>()
            .cloned()
            .map_or_else(SecurityContext::empty, SecurityContext::new);
        ready(Ok(context))
    }
}
