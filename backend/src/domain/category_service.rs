//! Category management. Every name crossing this service is normalised
//! with [`normalize_name`] before it reaches the repository.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{CategoryRepository, ProductRepository};
use crate::domain::{Category, CategoryId, Error, ErrorCode, SecurityContext, normalize_name};

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Create a category. Admin only; names must be unique once normalised.
    pub async fn create(&self, ctx: &SecurityContext, raw_name: &str) -> Result<Category, Error> {
        ctx.require_admin()?;
        let category = Category::new(raw_name);
        if self.categories.find_by_name(&category.name).await?.is_some() {
            return Err(Error::new(ErrorCode::CategoryExisted));
        }
        self.categories.save(&category).await?;
        info!(category = %category.name, "category created");
        Ok(category)
    }

    pub async fn list(&self) -> Result<Vec<Category>, Error> {
        Ok(self.categories.list().await?)
    }

    pub async fn get(&self, id: &CategoryId) -> Result<Category, Error> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or(Error::new(ErrorCode::CategoryNotExist))
    }

    /// Delete a category by name. Admin only; refused while products use it.
    pub async fn delete(&self, ctx: &SecurityContext, raw_name: &str) -> Result<(), Error> {
        ctx.require_admin()?;
        let category = self
            .categories
            .find_by_name(&normalize_name(raw_name))
            .await?
            .ok_or(Error::new(ErrorCode::CategoryNotExist))?;
        if self.products.uses_category(&category.id).await? {
            return Err(Error::new(ErrorCode::CategoryUsedByProduct));
        }
        self.categories.delete(&category.id).await?;
        info!(category = %category.name, "category deleted");
        Ok(())
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<Category>, Error> {
        Ok(self.categories.search(&normalize_name(keyword)).await?)
    }

    /// Resolve names to categories, creating the missing ones.
    pub(crate) async fn resolve_or_create(
        &self,
        raw_names: &[String],
    ) -> Result<Vec<Category>, Error> {
        let mut resolved: Vec<Category> = Vec::with_capacity(raw_names.len());
        for raw in raw_names {
            let name = normalize_name(raw);
            if name.is_empty() || resolved.iter().any(|c| c.name == name) {
                continue;
            }
            let category = match self.categories.find_by_name(&name).await? {
                Some(existing) => existing,
                None => {
                    let created = Category::new(&name);
                    self.categories.save(&created).await?;
                    created
                }
            };
            resolved.push(category);
        }
        Ok(resolved)
    }
}
