//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::middleware::ErrorHandlers;
use actix_web::{App, test, web};
use mockable::DefaultClock;
use serde_json::Value;

use crate::inbound::http::error::{method_not_allowed, unknown_route};
use crate::inbound::http::routes::configure_api;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::middleware::{Authenticate, Trace};
use crate::outbound::memory::{DemoTokens, MemoryStore, seed_demo_data};

/// Seeded in-memory storefront driven through the full middleware stack.
pub struct Storefront {
    pub store: Arc<MemoryStore>,
    pub state: HttpState,
    pub tokens: DemoTokens,
}

impl Storefront {
    /// Build a storefront over freshly seeded demo data.
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

    /// Send `request` with an optional bearer token and decode the envelope.
    pub async fn send(
        &self,
        request: test::TestRequest,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(self.state.clone()))
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
        let body: Value = test::read_body_json(res).await;
        (status, body)
    }

    /// Identifier of the seeded user called `username`.
    pub async fn user_id(&self, username: &str) -> String {
        use crate::domain::ports::UserRepository;

        self.store
            .find_by_username(username)
            .await
            .expect("lookup succeeds")
            .expect("seeded user exists")
            .id
            .to_string()
    }

    /// Identifier of the seeded product called `name`.
    pub async fn product_id(&self, name: &str) -> String {
        use crate::domain::ports::ProductRepository;

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

    /// Identifier of the seeded shop.
    pub async fn shop_id(&self) -> String {
        use crate::domain::ports::ShopRepository;

        ShopRepository::list(self.store.as_ref())
            .await
            .expect("listing succeeds")
            .into_iter()
            .next()
            .expect("seeded shop exists")
            .id
            .to_string()
    }
}
