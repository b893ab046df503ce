//! Port abstraction for shop persistence.
use async_trait::async_trait;

use crate::domain::{Shop, ShopId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by shop repository adapters.
    pub enum ShopPersistenceError {
        Connection { message: String } => "shop repository connection failed: {message}",
        Query { message: String } => "shop repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShopRepository: Send + Sync {
    async fn save(&self, shop: &Shop) -> Result<(), ShopPersistenceError>;

    async fn find_by_id(&self, id: &ShopId) -> Result<Option<Shop>, ShopPersistenceError>;

    async fn list(&self) -> Result<Vec<Shop>, ShopPersistenceError>;

    /// Shops owned by `owner`.
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Shop>, ShopPersistenceError>;
}
