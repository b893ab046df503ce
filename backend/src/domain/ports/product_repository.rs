//! Port abstraction for product persistence and catalogue queries.
use async_trait::async_trait;

use crate::domain::{CategoryId, Product, ProductId, ShopId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by product repository adapters.
    pub enum ProductPersistenceError {
        Connection { message: String } => "product repository connection failed: {message}",
        Query { message: String } => "product repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert or replace a product.
    async fn save(&self, product: &Product) -> Result<(), ProductPersistenceError>;

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductPersistenceError>;

    async fn delete(&self, id: &ProductId) -> Result<(), ProductPersistenceError>;

    async fn list_by_shop(&self, shop: &ShopId) -> Result<Vec<Product>, ProductPersistenceError>;

    /// Products tagged with the normalised category name.
    async fn list_by_category(&self, name: &str) -> Result<Vec<Product>, ProductPersistenceError>;

    /// Products whose brand equals `brand`, ignoring case.
    async fn list_by_brand(&self, brand: &str) -> Result<Vec<Product>, ProductPersistenceError>;

    /// Products whose lowercased name contains the normalised keyword.
    async fn search_by_name(&self, keyword: &str)
    -> Result<Vec<Product>, ProductPersistenceError>;

    /// Whether any product references the category.
    async fn uses_category(&self, category: &CategoryId) -> Result<bool, ProductPersistenceError>;
}
