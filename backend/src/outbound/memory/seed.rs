//! Demo catalogue loaded when fixture seeding is enabled.

use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use super::{MemoryStore, StaticTokenResolver};
use crate::domain::ports::{CategoryRepository, ProductRepository, ShopRepository, UserRepository};
use crate::domain::{Address, Category, Error, Product, ProductDraft, Shop, User};

const ADMIN_TOKEN: &str = "demo-admin-token";
const CUSTOMER_TOKEN: &str = "demo-customer-token";
const SELLER_TOKEN: &str = "demo-seller-token";

/// Bearer tokens issued for the seeded accounts.
#[derive(Debug, Clone)]
pub struct DemoTokens {
    pub resolver: StaticTokenResolver,
    pub admin: &'static str,
    pub customer: &'static str,
    pub seller: &'static str,
}

/// Populate `store` with an admin, a seller with one shop, a customer with an
/// address, and a small catalogue.
pub async fn seed_demo_data(
    store: &MemoryStore,
    clock: Arc<dyn Clock>,
) -> Result<DemoTokens, Error> {
    let now = clock.utc();
    let admin = User::new("admin", now).with_role("ADMIN");
    let seller = User::new("seller", now);
    let customer = User::new("customer", now).with_address(Address {
        phone: "0912345678".into(),
        name: "Demo Customer".into(),
        address_detail: "1 Dai Co Viet, Hai Ba Trung".into(),
        ward_code: "00004".into(),
    });
    for user in [&admin, &seller, &customer] {
        store.upsert(user).await?;
    }

    let shop = Shop::new("Corner Books", seller.id, seller.username.clone());
    ShopRepository::save(store, &shop).await?;

    let books = Category::new("Books");
    let stationery = Category::new("Stationery");
    for category in [&books, &stationery] {
        CategoryRepository::save(store, category).await?;
    }

    let listings = [
        ("The Rust Programming Language", 520_000.0, 900.0, "No Starch", &books),
        ("Zero To Production", 610_000.0, 1_100.0, "Self-published", &books),
        ("Fountain Pen", 85_000.0, 40.0, "Lamy", &stationery),
    ];
    for (name, price, weight, brand, category) in listings {
        let product = Product::new(
            shop.id,
            ProductDraft {
                name: name.into(),
                price,
                weight,
                brand: Some(brand.into()),
                description: None,
                category_names: vec![category.name.clone()],
            },
            vec![category.clone()],
        );
        ProductRepository::save(store, &product).await?;
    }
    info!(users = 3, shops = 1, products = listings.len(), "demo data seeded");

    Ok(DemoTokens {
        resolver: StaticTokenResolver::default()
            .with_user(ADMIN_TOKEN, &admin)
            .with_user(SELLER_TOKEN, &seller)
            .with_user(CUSTOMER_TOKEN, &customer),
        admin: ADMIN_TOKEN,
        customer: CUSTOMER_TOKEN,
        seller: SELLER_TOKEN,
    })
}
