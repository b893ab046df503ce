//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports are persistence-shaped traits implemented by outbound
//! adapters. Services depend on them through `Arc<dyn Port>` so adapters can
//! be swapped without touching domain logic.

mod macros;
pub(crate) use macros::define_port_error;

mod cart_repository;
mod category_repository;
mod identity_resolver;
mod order_repository;
mod payment_repository;
mod product_repository;
mod shop_repository;
mod user_repository;

#[cfg(test)]
pub use cart_repository::MockCartRepository;
pub use cart_repository::{CartPersistenceError, CartRepository};
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryPersistenceError, CategoryRepository};
#[cfg(test)]
pub use identity_resolver::MockIdentityResolver;
pub use identity_resolver::{
    FixtureIdentityResolver, IdentityResolutionError, IdentityResolver,
};
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderPersistenceError, OrderRepository};
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
pub use payment_repository::{PaymentPersistenceError, PaymentRepository};
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductPersistenceError, ProductRepository};
#[cfg(test)]
pub use shop_repository::MockShopRepository;
pub use shop_repository::{ShopPersistenceError, ShopRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
