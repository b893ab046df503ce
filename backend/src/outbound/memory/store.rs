//! Repository implementations over in-process tables.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    CartPersistenceError, CartRepository, CategoryPersistenceError, CategoryRepository,
    OrderPersistenceError, OrderRepository, PaymentPersistenceError, PaymentRepository,
    ProductPersistenceError, ProductRepository, ShopPersistenceError, ShopRepository,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    Cart, Category, CategoryId, Order, OrderId, Payment, Product, ProductId, Shop, ShopId, User,
    UserId,
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    shops: Vec<Shop>,
    categories: Vec<Category>,
    products: Vec<Product>,
    carts: Vec<Cart>,
    orders: Vec<Order>,
    payments: Vec<Payment>,
}

/// Replace the row matching `same` or append `row`.
fn upsert<T: Clone>(rows: &mut Vec<T>, row: &T, same: impl Fn(&T) -> bool) {
    match rows.iter_mut().find(|existing| same(existing)) {
        Some(existing) => *existing = row.clone(),
        None => rows.push(row.clone()),
    }
}

fn select<T: Clone>(rows: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    rows.iter().filter(|row| keep(row)).cloned().collect()
}

/// Process-local storage backing every repository port.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut tables = self.tables.write().await;
        upsert(&mut tables.users, user, |row| row.id == user.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|row| row.id == *id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|row| row.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|row| row.email.as_deref() == Some(email))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let tables = self.tables.read().await;
        let mut users = tables.users.clone();
        users.sort_by_key(|user| user.created_at);
        Ok(users)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut tables = self.tables.write().await;
        let before = tables.users.len();
        tables.users.retain(|row| row.id != *id);
        Ok(tables.users.len() != before)
    }
}

#[async_trait]
impl ShopRepository for MemoryStore {
    async fn save(&self, shop: &Shop) -> Result<(), ShopPersistenceError> {
        let mut tables = self.tables.write().await;
        upsert(&mut tables.shops, shop, |row| row.id == shop.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &ShopId) -> Result<Option<Shop>, ShopPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.shops.iter().find(|row| row.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<Shop>, ShopPersistenceError> {
        Ok(self.tables.read().await.shops.clone())
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Shop>, ShopPersistenceError> {
        let tables = self.tables.read().await;
        Ok(select(&tables.shops, |row| row.owner_id == *owner))
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn save(&self, category: &Category) -> Result<(), CategoryPersistenceError> {
        let mut tables = self.tables.write().await;
        upsert(&mut tables.categories, category, |row| row.id == category.id);
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, CategoryPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|row| row.id == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CategoryPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|row| row.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Category>, CategoryPersistenceError> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Category>, CategoryPersistenceError> {
        let tables = self.tables.read().await;
        Ok(select(&tables.categories, |row| row.name.contains(keyword)))
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), CategoryPersistenceError> {
        self.tables.write().await.categories.retain(|row| row.id != *id);
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn save(&self, product: &Product) -> Result<(), ProductPersistenceError> {
        let mut tables = self.tables.write().await;
        upsert(&mut tables.products, product, |row| row.id == product.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.products.iter().find(|row| row.id == *id).cloned())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductPersistenceError> {
        self.tables.write().await.products.retain(|row| row.id != *id);
        Ok(())
    }

    async fn list_by_shop(&self, shop: &ShopId) -> Result<Vec<Product>, ProductPersistenceError> {
        let tables = self.tables.read().await;
        Ok(select(&tables.products, |row| row.shop_id == *shop))
    }

    async fn list_by_category(&self, name: &str) -> Result<Vec<Product>, ProductPersistenceError> {
        let tables = self.tables.read().await;
        Ok(select(&tables.products, |row| row.has_category(name)))
    }

    async fn list_by_brand(&self, brand: &str) -> Result<Vec<Product>, ProductPersistenceError> {
        let tables = self.tables.read().await;
        Ok(select(&tables.products, |row| row.has_brand(brand)))
    }

    async fn search_by_name(
        &self,
        keyword: &str,
    ) -> Result<Vec<Product>, ProductPersistenceError> {
        let tables = self.tables.read().await;
        Ok(select(&tables.products, |row| row.name_matches(keyword)))
    }

    async fn uses_category(&self, category: &CategoryId) -> Result<bool, ProductPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .iter()
            .any(|row| row.categories.iter().any(|c| c.id == *category)))
    }
}

#[async_trait]
impl CartRepository for MemoryStore {
    async fn find_by_user(&self, user: &UserId) -> Result<Option<Cart>, CartPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.carts.iter().find(|row| row.user_id == *user).cloned())
    }

    async fn save(&self, cart: &Cart) -> Result<(), CartPersistenceError> {
        let mut tables = self.tables.write().await;
        upsert(&mut tables.carts, cart, |row| row.user_id == cart.user_id);
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn save(&self, order: &Order) -> Result<(), OrderPersistenceError> {
        let mut tables = self.tables.write().await;
        upsert(&mut tables.orders, order, |row| row.id == order.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.orders.iter().find(|row| row.id == *id).cloned())
    }

    async fn list_by_user(&self, user: &UserId) -> Result<Vec<Order>, OrderPersistenceError> {
        let tables = self.tables.read().await;
        Ok(select(&tables.orders, |row| row.user_id == *user))
    }
}

#[async_trait]
impl PaymentRepository for MemoryStore {
    async fn save(&self, payment: &Payment) -> Result<(), PaymentPersistenceError> {
        let mut tables = self.tables.write().await;
        upsert(&mut tables.payments, payment, |row| {
            row.order_id == payment.order_id
        });
        Ok(())
    }

    async fn find_by_order(
        &self,
        order: &OrderId,
    ) -> Result<Option<Payment>, PaymentPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.payments.iter().find(|row| row.order_id == *order).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProductDraft, normalize_name};
    use chrono::Utc;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> MemoryStore {
        MemoryStore::default()
    }

    fn product(shop: ShopId, name: &str, brand: &str, category: &Category) -> Product {
        Product::new(
            shop,
            ProductDraft {
                name: name.into(),
                price: 1.0,
                weight: 1.0,
                brand: Some(brand.into()),
                description: None,
                category_names: Vec::new(),
            },
            vec![category.clone()],
        )
    }

    #[rstest]
    #[tokio::test]
    async fn users_upsert_in_place_and_delete_reports_presence(store: MemoryStore) {
        let mut alice = User::new("alice", Utc::now());
        UserRepository::upsert(&store, &alice).await.expect("insert");
        alice.fullname = Some("Alice Nguyen".into());
        UserRepository::upsert(&store, &alice).await.expect("update");

        let all = UserRepository::list(&store).await.expect("list");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].fullname.as_deref(), Some("Alice Nguyen"));

        assert!(UserRepository::delete(&store, &alice.id).await.expect("delete"));
        assert!(!UserRepository::delete(&store, &alice.id).await.expect("delete again"));
    }

    #[rstest]
    #[tokio::test]
    async fn product_queries_filter_by_category_brand_and_name(store: MemoryStore) {
        let shop = ShopId::random();
        let books = Category::new("Books");
        let toys = Category::new("Toys");
        for product in [
            product(shop, "Rust Book", "Manning", &books),
            product(shop, "Go Book", "O'Reilly", &books),
            product(shop, "Rubber Duck", "manning", &toys),
        ] {
            ProductRepository::save(&store, &product).await.expect("save");
        }

        let in_books = store.list_by_category("books").await.expect("by category");
        assert_eq!(in_books.len(), 2);
        let by_brand = store.list_by_brand("MANNING").await.expect("by brand");
        assert_eq!(by_brand.len(), 2);
        let found = store
            .search_by_name(&normalize_name("  BOOK "))
            .await
            .expect("search");
        assert_eq!(found.len(), 2);
        assert!(store.uses_category(&toys.id).await.expect("uses"));
        assert!(!store.uses_category(&CategoryId::random()).await.expect("uses"));
    }

    #[rstest]
    #[tokio::test]
    async fn carts_are_keyed_by_owner(store: MemoryStore) {
        let owner = UserId::random();
        let first = Cart::new(owner);
        let replacement = Cart::new(owner);
        CartRepository::save(&store, &first).await.expect("save");
        CartRepository::save(&store, &replacement).await.expect("save");

        let cart = store.find_by_user(&owner).await.expect("find").expect("cart");
        assert_eq!(cart.id, replacement.id);
    }
}
