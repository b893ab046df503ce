//! Port abstraction for category persistence.
//!
//! Names passed to and returned from this port are already normalised.
use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by category repository adapters.
    pub enum CategoryPersistenceError {
        Connection { message: String } => "category repository connection failed: {message}",
        Query { message: String } => "category repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn save(&self, category: &Category) -> Result<(), CategoryPersistenceError>;

    async fn find_by_id(&self, id: &CategoryId)
    -> Result<Option<Category>, CategoryPersistenceError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CategoryPersistenceError>;

    async fn list(&self) -> Result<Vec<Category>, CategoryPersistenceError>;

    /// Categories whose name contains `keyword`.
    async fn search(&self, keyword: &str) -> Result<Vec<Category>, CategoryPersistenceError>;

    async fn delete(&self, id: &CategoryId) -> Result<(), CategoryPersistenceError>;
}
