//! Builders wiring the in-memory adapters into HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::info;

use storefront::domain::Error;
use storefront::domain::ports::IdentityResolver;
use storefront::inbound::http::state::{HttpState, HttpStatePorts};
use storefront::outbound::memory::{MemoryStore, StaticTokenResolver, seed_demo_data};

use super::ServerConfig;

/// Shared state handed to every worker.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) http: HttpState,
    pub(crate) resolver: Arc<dyn IdentityResolver>,
}

/// Wire every service over one in-memory store, seeding it when configured.
pub(crate) async fn build_app_state(config: &ServerConfig) -> Result<AppState, Error> {
    build_app_state_with_clock(config, Arc::new(DefaultClock)).await
}

async fn build_app_state_with_clock(
    config: &ServerConfig,
    clock: Arc<dyn Clock>,
) -> Result<AppState, Error> {
    let store = Arc::new(MemoryStore::default());
    let resolver = if config.seed_fixtures {
        let tokens = seed_demo_data(&store, clock.clone()).await?;
        info!(tokens = tokens.resolver.len(), "demo tokens issued");
        tokens.resolver
    } else {
        StaticTokenResolver::default()
    };

    let http = HttpState::new(HttpStatePorts {
        users: store.clone(),
        shops: store.clone(),
        categories: store.clone(),
        products: store.clone(),
        carts: store.clone(),
        orders: store.clone(),
        payments: store,
        clock,
    });
    Ok(AppState {
        http,
        resolver: Arc::new(resolver),
    })
}
