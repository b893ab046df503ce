//! Port abstraction for order persistence.
use async_trait::async_trait;

use crate::domain::{Order, OrderId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by order repository adapters.
    pub enum OrderPersistenceError {
        Connection { message: String } => "order repository connection failed: {message}",
        Query { message: String } => "order repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert or replace an order together with its shipment.
    async fn save(&self, order: &Order) -> Result<(), OrderPersistenceError>;

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderPersistenceError>;

    /// Orders placed by `user`, oldest first.
    async fn list_by_user(&self, user: &UserId) -> Result<Vec<Order>, OrderPersistenceError>;
}
