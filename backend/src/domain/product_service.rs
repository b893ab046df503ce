//! Product listing, editing and catalogue queries.
//!
//! Mutations are restricted to the owning shop's user and to admins.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{ProductRepository, ShopRepository};
use crate::domain::{
    CategoryService, Error, ErrorCode, Product, ProductDraft, ProductId, SecurityContext, Shop,
    ShopId, normalize_name,
};

#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    shops: Arc<dyn ShopRepository>,
    categories: CategoryService,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        shops: Arc<dyn ShopRepository>,
        categories: CategoryService,
    ) -> Self {
        Self {
            products,
            shops,
            categories,
        }
    }

    /// List a new product in `shop_id`. Unknown category names are created.
    pub async fn create(
        &self,
        ctx: &SecurityContext,
        shop_id: &ShopId,
        draft: ProductDraft,
    ) -> Result<Product, Error> {
        ctx.current_identity()?;
        let shop = self.shop(shop_id).await?;
        Self::authorize(ctx, &shop)?;

        let categories = self.categories.resolve_or_create(&draft.category_names).await?;
        let product = Product::new(shop.id, draft, categories);
        self.products.save(&product).await?;
        info!(product_id = %product.id, shop_id = %shop.id, "product created");
        Ok(product)
    }

    pub async fn get(&self, id: &ProductId) -> Result<Product, Error> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or(Error::new(ErrorCode::ProductNotExist))
    }

    /// Products of an existing shop.
    pub async fn list_by_shop(&self, shop_id: &ShopId) -> Result<Vec<Product>, Error> {
        let shop = self.shop(shop_id).await?;
        Ok(self.products.list_by_shop(&shop.id).await?)
    }

    pub async fn update(
        &self,
        ctx: &SecurityContext,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<Product, Error> {
        let mut product = self.get(id).await?;
        ctx.current_identity()?;
        let shop = self.shop(&product.shop_id).await?;
        Self::authorize(ctx, &shop)?;

        let categories = self.categories.resolve_or_create(&draft.category_names).await?;
        product.apply(draft, categories);
        self.products.save(&product).await?;
        Ok(product)
    }

    pub async fn delete(&self, ctx: &SecurityContext, id: &ProductId) -> Result<(), Error> {
        let product = self.get(id).await?;
        ctx.current_identity()?;
        let shop = self.shop(&product.shop_id).await?;
        Self::authorize(ctx, &shop)?;

        self.products.delete(&product.id).await?;
        info!(product_id = %product.id, "product deleted");
        Ok(())
    }

    pub async fn list_by_category(&self, name: &str) -> Result<Vec<Product>, Error> {
        Ok(self.products.list_by_category(&normalize_name(name)).await?)
    }

    pub async fn list_by_brand(&self, brand: &str) -> Result<Vec<Product>, Error> {
        Ok(self.products.list_by_brand(brand).await?)
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<Product>, Error> {
        Ok(self.products.search_by_name(&normalize_name(keyword)).await?)
    }

    async fn shop(&self, id: &ShopId) -> Result<Shop, Error> {
        self.shops
            .find_by_id(id)
            .await?
            .ok_or(Error::new(ErrorCode::ShopNotExist))
    }

    fn authorize(ctx: &SecurityContext, shop: &Shop) -> Result<(), Error> {
        ctx.require_self_or_admin(&shop.owner_username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        MockCategoryRepository, MockProductRepository, MockShopRepository,
    };
    use crate::domain::{Authentication, Category, UserId};
    use rstest::{fixture, rstest};

    #[fixture]
    fn shop() -> Shop {
        Shop::new("Corner Books", UserId::random(), "seller")
    }

    fn draft(categories: &[&str]) -> ProductDraft {
        ProductDraft {
            name: "Rust in Action".into(),
            price: 450_000.0,
            weight: 800.0,
            brand: Some("Manning".into()),
            description: None,
            category_names: categories.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    fn caller(name: &str, role: &str) -> SecurityContext {
        SecurityContext::new(Authentication::authenticated(name, [role]))
    }

    fn shops_returning(shop: Shop) -> MockShopRepository {
        let mut shops = MockShopRepository::new();
        shops
            .expect_find_by_id()
            .returning(move |_| Ok(Some(shop.clone())));
        shops
    }

    fn categories_creating() -> CategoryService {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_name().returning(|_| Ok(None));
        categories.expect_save().returning(|_| Ok(()));
        CategoryService::new(Arc::new(categories), Arc::new(MockProductRepository::new()))
    }

    #[rstest]
    #[tokio::test]
    async fn owner_can_list_products_with_new_categories(shop: Shop) {
        let shop_id = shop.id;
        let mut products = MockProductRepository::new();
        products.expect_save().times(1).returning(|_| Ok(()));
        let service = ProductService::new(
            Arc::new(products),
            Arc::new(shops_returning(shop)),
            categories_creating(),
        );

        let product = service
            .create(&caller("seller", "ROLE_USER"), &shop_id, draft(&["Books", "Programming"]))
            .await
            .expect("created");

        assert_eq!(product.shop_id, shop_id);
        let names: Vec<_> = product.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["books", "programming"]);
    }

    #[rstest]
    #[case::stranger("mallory", "ROLE_USER", false)]
    #[case::admin("root", "ROLE_ADMIN", true)]
    #[tokio::test]
    async fn create_checks_ownership(
        shop: Shop,
        #[case] name: &str,
        #[case] role: &str,
        #[case] allowed: bool,
    ) {
        let shop_id = shop.id;
        let mut products = MockProductRepository::new();
        products.expect_save().returning(|_| Ok(()));
        let service = ProductService::new(
            Arc::new(products),
            Arc::new(shops_returning(shop)),
            categories_creating(),
        );

        let result = service.create(&caller(name, role), &shop_id, draft(&[])).await;
        match result {
            Ok(_) => assert!(allowed),
            Err(err) => {
                assert!(!allowed);
                assert_eq!(err.code(), ErrorCode::Unauthorized);
            }
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_reports_unknown_shop() {
        let mut shops = MockShopRepository::new();
        shops.expect_find_by_id().returning(|_| Ok(None));
        let service = ProductService::new(
            Arc::new(MockProductRepository::new()),
            Arc::new(shops),
            categories_creating(),
        );

        let err = service
            .create(&caller("seller", "ROLE_USER"), &ShopId::random(), draft(&[]))
            .await
            .expect_err("unknown shop");
        assert_eq!(err.code(), ErrorCode::ShopNotExist);
    }

    #[rstest]
    #[tokio::test]
    async fn get_reports_missing_product() {
        let mut products = MockProductRepository::new();
        products.expect_find_by_id().returning(|_| Ok(None));
        let service = ProductService::new(
            Arc::new(products),
            Arc::new(MockShopRepository::new()),
            categories_creating(),
        );

        let err = service.get(&ProductId::random()).await.expect_err("missing");
        assert_eq!(err.code(), ErrorCode::ProductNotExist);
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_fields_and_categories(shop: Shop) {
        let existing = Product::new(shop.id, draft(&[]), vec![Category::new("old")]);
        let id = existing.id;
        let mut products = MockProductRepository::new();
        products
            .expect_find_by_id()
            .return_once(move |_| Ok(Some(existing)));
        products.expect_save().times(1).returning(|_| Ok(()));
        let service = ProductService::new(
            Arc::new(products),
            Arc::new(shops_returning(shop)),
            categories_creating(),
        );

        let mut changes = draft(&["New Arrivals"]);
        changes.price = 399_000.0;
        let updated = service
            .update(&caller("seller", "ROLE_USER"), &id, changes)
            .await
            .expect("updated");

        assert!((updated.price - 399_000.0).abs() < f64::EPSILON);
        assert!(updated.has_category("new arrivals"));
        assert!(!updated.has_category("old"));
    }

    #[rstest]
    #[tokio::test]
    async fn search_normalises_keyword() {
        let mut products = MockProductRepository::new();
        products
            .expect_search_by_name()
            .withf(|keyword| keyword == "rust book")
            .returning(|_| Ok(Vec::new()));
        let service = ProductService::new(
            Arc::new(products),
            Arc::new(MockShopRepository::new()),
            categories_creating(),
        );

        let found = service.search("  Rust   BOOK ").await.expect("search");
        assert!(found.is_empty());
    }
}
