//! Middleware establishing the caller's identity once per request.
//!
//! A bearer token in the `Authorization` header is resolved through the
//! [`IdentityResolver`] port. The resulting [`Authentication`] is stored in
//! the request extensions, where the `SecurityContext` extractor reads it.
//! Requests without a recognised token carry the anonymous placeholder.

use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, HttpMessage};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, warn};

use crate::domain::Authentication;
use crate::domain::ports::IdentityResolver;

const BEARER_PREFIX: &str = "Bearer ";

/// Identity middleware backed by an [`IdentityResolver`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::App;
/// use storefront::domain::ports::FixtureIdentityResolver;
/// use storefront::middleware::Authenticate;
///
/// let app = App::new().wrap(Authenticate::new(Arc::new(FixtureIdentityResolver)));
/// ```
#[derive(Clone)]
pub struct Authenticate {
    resolver: Arc<dyn IdentityResolver>,
}

impl Authenticate {
    pub fn new(resolver: Arc<dyn IdentityResolver>) -> Self {
        Self { resolver }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authenticate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateMiddleware {
            service: Rc::new(service),
            resolver: self.resolver.clone(),
        }))
    }
}

/// Service wrapper produced by [`Authenticate`].
pub struct AuthenticateMiddleware<S> {
    service: Rc<S>,
    resolver: Arc<dyn IdentityResolver>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let resolver = Arc::clone(&self.resolver);
        let token = bearer_token(&req).map(str::to_owned);
        Box::pin(async move {
            let authentication = match token {
                Some(token) => resolve(resolver.as_ref(), &token).await,
                None => Authentication::anonymous(),
            };
            req.extensions_mut().insert(authentication);
            service.call(req).await
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

async fn resolve(resolver: &dyn IdentityResolver, token: &str) -> Authentication {
    match resolver.resolve(token).await {
        Ok(Some(authentication)) => authentication,
        Ok(None) => {
            debug!("bearer token not recognised; continuing anonymously");
            Authentication::anonymous()
        }
        Err(error) => {
            warn!(%error, "identity resolution failed; continuing anonymously");
            Authentication::anonymous()
        }
    }
}
