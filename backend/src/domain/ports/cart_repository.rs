//! Port abstraction for cart persistence. Each user owns at most one cart.
use async_trait::async_trait;

use crate::domain::{Cart, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by cart repository adapters.
    pub enum CartPersistenceError {
        Connection { message: String } => "cart repository connection failed: {message}",
        Query { message: String } => "cart repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_by_user(&self, user: &UserId) -> Result<Option<Cart>, CartPersistenceError>;

    /// Insert or replace the cart owned by `cart.user_id`.
    async fn save(&self, cart: &Cart) -> Result<(), CartPersistenceError>;
}
