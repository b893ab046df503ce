//! In-memory adapters for every driven port.
//!
//! [`MemoryStore`] keeps each aggregate in insertion order behind a single
//! `tokio` read-write lock and implements all repository ports, so one store
//! can back a whole [`crate::inbound::http::state::HttpState`].
//! [`StaticTokenResolver`] maps fixed bearer tokens to identities.

mod identity;
mod seed;
mod store;

pub use identity::StaticTokenResolver;
pub use seed::{DemoTokens, seed_demo_data};
pub use store::MemoryStore;
