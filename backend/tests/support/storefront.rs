//! Shared harness assembling the storefront app over seeded in-memory data.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::middleware::ErrorHandlers;
use actix_web::{App, test, web};
use mockable::DefaultClock;
use serde_json::Value;
use storefront::Trace;
use storefront::domain::ports::{ProductRepository, UserRepository};
use storefront::inbound::http::error::{method_not_allowed, unknown_route};
use storefront::inbound::http::health::{HealthState, configure_health};
use storefront::inbound::http::routes::configure_api;
use storefront::inbound::http::state::{HttpState, HttpStatePorts};
use storefront::middleware::Authenticate;
use storefront::outbound::memory::{DemoTokens, MemoryStore, seed_demo_data};

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub state: HttpState,
    pub tokens: DemoTokens,
}

impl Harness {
    pub async fn seeded() -> Self {
        let store = Arc::new(MemoryStore::default());
        let clock = Arc::new(DefaultClock);
        let tokens = seed_demo_data(&store, clock.clone())
            .await
            .expect("seeding demo data succeeds");
        let state = HttpState::new(HttpStatePorts {
            users: store.clone(),
            shops: store.clone(),
            categories: store.clone(),
            products: store.clone(),
            carts: store.clone(),
            orders: store.clone(),
            payments: store.clone(),
            clock,
        });
        Self {
            store,
            state,
            tokens,
        }
    }

    /// Send `request`, optionally authenticated, returning status, trace id
    /// header and decoded body.
    pub async fn call(
        &self,
        request: test::TestRequest,
        token: Option<&str>,
    ) -> (StatusCode, Option<String>, Value) {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let app = test::init_service(
            App::new()
                .app_data(health)
                .app_data(web::Data::new(self.state.clone()))
                .configure(configure_health)
                .configure(configure_api)
                .default_service(web::to(unknown_route))
                .wrap(
                    ErrorHandlers::new()
                        .handler(StatusCode::METHOD_NOT_ALLOWED, method_not_allowed),
                )
                .wrap(Authenticate::new(Arc::new(self.tokens.resolver.clone())))
                .wrap(Trace),
        )
        .await;
        let request = match token {
            Some(token) => request.insert_header((AUTHORIZATION, format!("Bearer {token}"))),
            None => request,
        };
        let res = test::call_service(&app, request.to_request()).await;
        let status = res.status();
        let trace_id = res
            .headers()
            .get("trace-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = test::read_body(res).await;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };
        (status, trace_id, body)
    }

    pub async fn send(
        &self,
        request: test::TestRequest,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let (status, _, body) = self.call(request, token).await;
        (status, body)
    }

    pub async fn user_id(&self, username: &str) -> String {
        self.store
            .find_by_username(username)
            .await
            .expect("lookup succeeds")
            .expect("seeded user exists")
            .id
            .to_string()
    }

    pub async fn product_id(&self, name: &str) -> String {
        self.store
            .search_by_name(&name.to_lowercase())
            .await
            .expect("search succeeds")
            .into_iter()
            .next()
            .expect("seeded product exists")
            .id
            .to_string()
    }
}
